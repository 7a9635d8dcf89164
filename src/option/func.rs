//! Free-function forms of the option combinators.
//!
//! Each function is the method of the same name with the receiver moved to
//! the first argument, so the two forms are interchangeable.

use crate::{
    errbox::ErrBox,
    option::Option,
    pair::Pair,
    result::Result,
};

/// ```rust
/// use gust::prelude::*;
/// use gust::option;
///
/// assert_eq!(option::map(Some(2), |x| x * 3), Some(6));
/// ```
#[inline]
pub fn map<T, U, F>(o: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    o.map(f)
}

#[inline]
pub fn map_or<T, U, F>(o: Option<T>, default: U, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    o.map_or(default, f)
}

#[inline]
pub fn map_or_else<T, U, D, F>(o: Option<T>, default: D, f: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    o.map_or_else(default, f)
}

#[inline]
pub fn and<T, U>(o: Option<T>, optb: Option<U>) -> Option<U> {
    o.and(optb)
}

#[inline]
pub fn and_then<T, U, F>(o: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    o.and_then(f)
}

#[inline]
pub fn filter<T, P>(o: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    o.filter(predicate)
}

#[inline]
pub fn zip<T, U>(a: Option<T>, b: Option<U>) -> Option<Pair<T, U>> {
    a.zip(b)
}

#[inline]
pub fn zip_with<T, U, R, F>(a: Option<T>, b: Option<U>, f: F) -> Option<R>
where
    F: FnOnce(T, U) -> R,
{
    a.zip_with(b, f)
}

/// ```rust
/// use gust::prelude::*;
/// use gust::option;
///
/// let o = Some(Pair::new("k", 1));
/// let (a, b) = option::unzip(o);
/// assert_eq!(option::zip(a, b), o);
/// ```
#[inline]
pub fn unzip<A, B>(o: Option<Pair<A, B>>) -> (Option<A>, Option<B>) {
    o.unzip()
}

#[inline]
pub fn flatten<T>(o: Option<Option<T>>) -> Option<T> {
    o.flatten()
}

#[inline]
pub fn ok_or_else<T, E, F>(o: Option<T>, err: F) -> Result<T>
where
    E: Into<ErrBox>,
    F: FnOnce() -> E,
{
    o.ok_or_else(err)
}

#[inline]
pub fn transpose<T>(o: Option<Result<T>>) -> Result<Option<T>> {
    o.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{Err, None, Ok, Some};

    #[test]
    fn test_free_forms_match_methods() {
        let f = |x: i32| x + 1;
        assert_eq!(map(Some(1), f), Some(1).map(f));
        assert_eq!(map(None, f), None);
        assert_eq!(map_or(None, 7, f), 7);
        assert_eq!(map_or_else(Some(1), || 0, f), 2);
        assert_eq!(and_then(Some(4), |x| Some(x * 2)), Some(8));
        assert_eq!(and_then(None::<i32>, |x| Some(x * 2)), None);
        assert_eq!(and(Some(1), Some('a')), Some('a'));
        assert_eq!(filter(Some(3), |x| *x > 5), None);
        assert_eq!(zip_with(Some(2), Some(3), |a, b| a * b), Some(6));
        assert_eq!(flatten(Some(Some(1))), Some(1));
        assert_eq!(transpose(Some(Ok(2))), Ok(Some(2)));
    }

    #[test]
    fn test_ok_or_else() {
        assert_eq!(ok_or_else(Some(1), || ErrBox::msg("e")), Ok(1));
        assert_eq!(ok_or_else(None::<i32>, || ErrBox::msg("e")), Err(ErrBox::msg("e")));
    }

    #[test]
    fn test_zip_unzip_round_trip() {
        let o = Some(Pair::new(1, "b"));
        let (a, b) = unzip(o);
        assert_eq!(zip(a, b), o);
        let (x, y) = unzip(None::<Pair<i32, i32>>);
        assert_eq!((x, y), (None, None));
    }
}
