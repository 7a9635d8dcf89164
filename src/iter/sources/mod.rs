//! Iterator sources: where sequences come from.

mod bridge;
mod chan;
mod func;
mod map;
mod range;
mod slice;
mod string;

pub use bridge::*;
pub use chan::*;
pub use func::*;
pub use map::*;
pub use range::*;
pub use slice::*;
pub use string::*;
