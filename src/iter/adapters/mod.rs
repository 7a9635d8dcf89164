//! Iterator adapters: lazy wrappers that own the iterator they transform.

mod chain;
mod filter;
mod flatten;
mod intersperse;
mod map;
mod peekable;
mod scan;
mod skip;
mod take;
mod to_std;
mod window;

pub use chain::*;
pub use filter::*;
pub use flatten::*;
pub use intersperse::*;
pub use map::*;
pub use peekable::*;
pub use scan::*;
pub use skip::*;
pub use take::*;
pub use to_std::*;
pub use window::*;

use crate::option::Option::{self, None, Some};

/// Keeps the upper bound and drops the lower, for adapters that may discard
/// any number of items.
#[inline]
pub(crate) fn filtered_hint(hint: (usize, Option<usize>)) -> (usize, Option<usize>) {
    (0, hint.1)
}

/// Componentwise sum, saturating the lower bound and giving up on the upper
/// one on overflow.
pub(crate) fn add_hints(
    a: (usize, Option<usize>),
    b: (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let lower = a.0.saturating_add(b.0);
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => x.checked_add(y).into(),
        _ => None,
    };
    (lower, upper)
}

/// Componentwise minimum. A missing upper bound means unbounded.
pub(crate) fn min_hints(
    a: (usize, Option<usize>),
    b: (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let lower = a.0.min(b.0);
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    };
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_hints() {
        assert_eq!(add_hints((1, Some(2)), (3, Some(4))), (4, Some(6)));
        assert_eq!(add_hints((1, None), (3, Some(4))), (4, None));
        assert_eq!(add_hints((usize::MAX, Some(usize::MAX)), (1, Some(1))), (usize::MAX, None));
    }

    #[test]
    fn test_min_hints() {
        assert_eq!(min_hints((1, Some(5)), (3, None)), (1, Some(5)));
        assert_eq!(min_hints((4, None), (3, None)), (3, None));
        assert_eq!(min_hints((4, Some(4)), (2, Some(2))), (2, Some(2)));
    }

    #[test]
    fn test_filtered_hint() {
        assert_eq!(filtered_hint((3, Some(3))), (0, Some(3)));
    }
}
