use std::cmp;

/// The result of comparing two values.
///
/// Mirrors [`std::cmp::Ordering`] and converts to and from it, so comparison
/// closures written against the standard library plug into
/// [`Iterator::max_by`](crate::Iterator::max_by) and friends.
///
/// # Examples
///
/// ```rust
/// use gust::{compare, Ordering};
///
/// assert_eq!(compare(&1, &2), Ordering::Less);
/// assert_eq!(Ordering::Less.reverse(), Ordering::Greater);
/// assert_eq!(Ordering::Equal.then(Ordering::Greater), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Ordering {
    Less = -1,
    Equal = 0,
    Greater = 1,
}

/// Compares two values with their total order.
#[inline]
pub fn compare<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b).into()
}

impl Ordering {
    #[inline]
    pub const fn is_eq(self) -> bool {
        matches!(self, Ordering::Equal)
    }

    #[inline]
    pub const fn is_ne(self) -> bool {
        !self.is_eq()
    }

    #[inline]
    pub const fn is_lt(self) -> bool {
        matches!(self, Ordering::Less)
    }

    #[inline]
    pub const fn is_gt(self) -> bool {
        matches!(self, Ordering::Greater)
    }

    #[inline]
    pub const fn is_le(self) -> bool {
        !self.is_gt()
    }

    #[inline]
    pub const fn is_ge(self) -> bool {
        !self.is_lt()
    }

    /// Swaps `Less` and `Greater`.
    #[inline]
    pub const fn reverse(self) -> Ordering {
        match self {
            Ordering::Less => Ordering::Greater,
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => Ordering::Less,
        }
    }

    /// Chains two orderings: returns `self` unless it is `Equal`.
    #[inline]
    pub const fn then(self, other: Ordering) -> Ordering {
        match self {
            Ordering::Equal => other,
            _ => self,
        }
    }

    /// Like [`then`](Ordering::then), computing the tie-breaker lazily.
    #[inline]
    pub fn then_with<F>(self, f: F) -> Ordering
    where
        F: FnOnce() -> Ordering,
    {
        match self {
            Ordering::Equal => f(),
            _ => self,
        }
    }

    /// Returns `-1`, `0` or `1`.
    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

impl From<cmp::Ordering> for Ordering {
    #[inline]
    fn from(o: cmp::Ordering) -> Self {
        match o {
            cmp::Ordering::Less => Ordering::Less,
            cmp::Ordering::Equal => Ordering::Equal,
            cmp::Ordering::Greater => Ordering::Greater,
        }
    }
}

impl From<Ordering> for cmp::Ordering {
    #[inline]
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => cmp::Ordering::Less,
            Ordering::Equal => cmp::Ordering::Equal,
            Ordering::Greater => cmp::Ordering::Greater,
        }
    }
}
