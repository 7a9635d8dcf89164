//! # Gust: Option, Result and Lazy Iterators
//!
//! A value-and-control-flow vocabulary: an optional container, a fallible
//! container whose error slot is a type-erased [`ErrBox`], and a pull-based
//! [`Iterator`] protocol with its combinator algebra.
//!
//! ## Core Types
//!
//! - **[`Option<T>`]**: present / absent value
//! - **[`Result<T>`]**: success value or an [`ErrBox`] carrying the error and
//!   the call sites it travelled through
//! - **[`ControlFlow<B, C>`]**: the short-circuit signal of `try_*` consumers
//! - **[`Iterator`]** / **[`DoubleEndedIterator`]**: lazy sequences
//!
//! ## Unwinding with `catch`
//!
//! Calling `.unwrap()` on an `Err` inside [`catch`] aborts the closure and
//! turns the whole computation into that `Err`, the way `?` would:
//!
//! ```
//! use gust::prelude::*;
//!
//! fn parse(s: &str) -> Result<i32> {
//!     Result::from(s.parse::<i32>())
//! }
//!
//! let sum = catch(|| {
//!     let a = parse("20").unwrap();
//!     let b = parse("x").unwrap(); // unwinds back to `catch`
//!     Ok(a + b)
//! });
//! assert!(sum.is_err());
//! assert_eq!(sum.unwrap_err().to_string(), "invalid digit found in string");
//! ```
//!
//! ## Iterators
//!
//! ```
//! use gust::prelude::*;
//! use gust::iter;
//!
//! let evens = iter::from_range(0, 10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .collect();
//! assert_eq!(evens, vec![0, 4, 16, 36, 64]);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`iter::from_slice(s)`](iter::from_slice) - Borrow the elements of a slice
//! - [`iter::from_range(a, b)`](iter::from_range) - Integers in `[a, b)`
//! - [`iter::from_chan(rx)`](iter::from_chan) - Block on a channel until it closes
//!
//! **Propagation:**
//! - [`catch(f)`] - Turn an unwinding `.unwrap()` into an `Err`
//! - [`result::ret(r)`](result::ret) - Lift a `std::result::Result`

mod control_flow;
mod errbox;
mod error;
mod ordering;
mod pair;
mod stack;
mod unwind;

pub mod dict;
pub mod iter;
pub mod option;
pub mod prelude;
pub mod result;
pub mod vec;

pub use control_flow::*;
pub use errbox::*;
pub use error::*;
pub use iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};
pub use option::Option;
pub use ordering::*;
pub use pair::*;
pub use result::Result;
pub use stack::*;
pub use unwind::*;
