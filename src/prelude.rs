//! Commonly used imports
//!
//! Use `use gust::prelude::*;` to bring the containers, their variants and the
//! iterator traits into scope. The variants shadow the standard library's
//! `Some`/`None`/`Ok`/`Err` in the importing module.

// Core types and their variants
pub use crate::control_flow::ControlFlow::{self, Break, Continue};
pub use crate::option::Option::{self, None, Some};
pub use crate::result::Result::{self, Err, Ok};

// Iterator protocol
pub use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};

// Carriers and helpers
pub use crate::{catch, ErrBox, Ordering, Pair};
