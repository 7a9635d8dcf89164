//! Free-function forms of the result combinators.

use crate::{errbox::ErrBox, option::Option, result::Result};

#[inline]
pub fn map<T, U, F>(r: Result<T>, f: F) -> Result<U>
where
    F: FnOnce(T) -> U,
{
    r.map(f)
}

#[inline]
pub fn map_err<T, E, F>(r: Result<T>, f: F) -> Result<T>
where
    E: Into<ErrBox>,
    F: FnOnce(ErrBox) -> E,
{
    r.map_err(f)
}

#[inline]
pub fn map_or<T, U, F>(r: Result<T>, default: U, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    r.map_or(default, f)
}

#[inline]
pub fn map_or_else<T, U, D, F>(r: Result<T>, default: D, f: F) -> U
where
    D: FnOnce(ErrBox) -> U,
    F: FnOnce(T) -> U,
{
    r.map_or_else(default, f)
}

#[inline]
pub fn and<T, U>(r: Result<T>, res: Result<U>) -> Result<U> {
    r.and(res)
}

/// ```rust
/// use gust::prelude::*;
/// use gust::result;
///
/// let r = result::and_then(Ok(2), |x| if x > 1 { Ok(x * 2) } else { gust::fmt_err!("small") });
/// assert_eq!(r, Ok(4));
/// ```
#[inline]
pub fn and_then<T, U, F>(r: Result<T>, f: F) -> Result<U>
where
    F: FnOnce(T) -> Result<U>,
{
    r.and_then(f)
}

#[inline]
pub fn or_else<T, F>(r: Result<T>, f: F) -> Result<T>
where
    F: FnOnce(ErrBox) -> Result<T>,
{
    r.or_else(f)
}

#[inline]
pub fn flatten<T>(r: Result<Result<T>>) -> Result<T> {
    r.flatten()
}

#[inline]
pub fn transpose<T>(r: Result<Option<T>>) -> Option<Result<T>> {
    r.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{Err, Ok, Some};

    #[test]
    fn test_free_forms_match_methods() {
        let e = || ErrBox::msg("e");
        assert_eq!(map(Ok(1), |x| x + 1), Ok(2));
        assert_eq!(map(Err::<i32>(e()), |x| x + 1), Err(e()));
        assert_eq!(map_or(Err::<i32>(e()), 0, |x| x + 1), 0);
        assert_eq!(map_or_else(Ok(2), |_| 0, |x| x * 3), 6);
        assert_eq!(and(Ok(1), Ok('a')), Ok('a'));
        assert_eq!(and_then(Ok(3), |x| Ok(x * x)), Ok(9));
        assert_eq!(and_then(Err::<i32>(e()), |x| Ok(x * x)), Err(e()));
        assert_eq!(or_else(Err(e()), |_| Ok(5)), Ok(5));
        assert_eq!(flatten(Ok(Ok(1))), Ok(1));
        assert_eq!(flatten(Ok(Err::<i32>(e()))), Err(e()));
        assert_eq!(transpose(Ok(Some(1))), Some(Ok(1)));
        assert!(map_err(Err::<i32>(e()), |x| x.context("c")).is_err_and(|x| x.to_string() == "c: e"));
    }
}
