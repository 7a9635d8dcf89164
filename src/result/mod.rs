//! Fallible values.
//!
//! [`Result<T>`] is either [`Ok`] holding a `T` or [`Err`] holding an
//! [`ErrBox`]. Calling `.unwrap()` on an `Err` inside [`catch`] turns the
//! enclosing computation into that `Err`; see [`crate::unwind`] for the
//! protocol.
//!
//! # Examples
//!
//! ```rust
//! use gust::prelude::*;
//! use gust::result;
//!
//! fn half(x: i32) -> Result<i32> {
//!     if x % 2 == 0 {
//!         Ok(x / 2)
//!     } else {
//!         gust::fmt_err!("{x} is odd")
//!     }
//! }
//!
//! assert_eq!(half(8).and_then(half), Ok(2));
//! assert_eq!(half(6).and_then(half).unwrap_err().to_string(), "3 is odd");
//! assert_eq!(result::map(half(4), |v| v * 10), Ok(20));
//! ```

mod convert;
mod func;
#[cfg(feature = "serde")]
mod serialize;

pub use convert::*;
pub use func::*;

use std::{any::Any, fmt, hint};

use crate::{
    control_flow::ControlFlow,
    errbox::ErrBox,
    error::Error,
    option::{
        self,
        Option::{self, None, Some},
    },
    unwind,
};

pub use self::Result::{Err, Ok};

/// A success value or an error carrier.
///
/// Equality compares the `Ok` values, or the errors by identity or message.
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, PartialEq)]
pub enum Result<T> {
    /// Contains the success value
    Ok(T),
    /// Contains the error
    Err(ErrBox),
}

impl<T> Result<T> {
    /// Runs `f`, turning an `.unwrap()` on `Err` inside it into the returned
    /// `Err`. Same as [`crate::catch`].
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let r = Result::catch(|| {
    ///     let n: i32 = err_msg("nope").unwrap();
    ///     Ok(n)
    /// });
    /// assert_eq!(r, err_msg("nope"));
    /// ```
    #[inline]
    pub fn catch<F>(f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        unwind::catch(f)
    }

    /// Returns `true` if the result is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    /// Returns `true` if the result is `Ok` and the value satisfies `f`.
    #[inline]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Ok(v) => f(v),
            Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is `Err` and the error satisfies `f`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let r: Result<()> = err_msg("timeout");
    /// assert!(r.is_err_and(|e| e.to_string() == "timeout"));
    /// ```
    #[inline]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(ErrBox) -> bool,
    {
        match self {
            Ok(_) => false,
            Err(e) => f(e),
        }
    }

    /// Converts to `Option<T>`, discarding the error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(_) => None,
        }
    }

    /// Converts to `Option<ErrBox>`, discarding the success value.
    #[inline]
    pub fn err(self) -> Option<ErrBox> {
        match self {
            Ok(_) => None,
            Err(e) => Some(e),
        }
    }

    /// Converts from `&Result<T>` to `Result<&T>`. The error is shared, not
    /// copied.
    #[inline]
    pub fn as_ref(&self) -> Result<&T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.clone()),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Result<&mut T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.clone()),
        }
    }

    /// Returns an iterator over the possibly contained success value.
    #[inline]
    pub fn iter(&self) -> option::Iter<'_, T> {
        option::Iter::new(match self {
            Ok(v) => Some(v),
            Err(_) => None,
        })
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`, with a message that includes the
    /// error. Inside [`catch`](crate::catch) the error is returned from the
    /// enclosing `catch` instead, with this call site recorded in its stack
    /// trace.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let x: Result<u32> = Ok(2);
    /// assert_eq!(x.unwrap(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let x: Result<u32> = err_msg("emergency failure");
    /// x.unwrap(); // panics with `emergency failure`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => unwind::raise(e, |e| {
                format!("called `Result::unwrap()` on an `Err` value: {e}")
            }),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg: <error>` if the value is an `Err`. Inside
    /// [`catch`](crate::catch) the returned error wraps the original one
    /// under `msg`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => unwind::raise(e.context(msg), |e| e.message()),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(v) => v,
            Err(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(ErrBox) -> T,
    {
        match self {
            Ok(v) => v,
            Err(e) => f(e),
        }
    }

    /// Returns the contained value or `T::default()`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let bad: Result<Option<Box<i32>>> = err_msg("x");
    /// assert_eq!(bad.unwrap_or_default(), None);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(_) => T::default(),
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Ok`, with a message that includes the value.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> ErrBox
    where
        T: fmt::Debug,
    {
        match self {
            Ok(v) => unwind::raise(Error::UnwrapErrOnOk(format!("{v:?}")).into(), |e| {
                e.message()
            }),
            Err(e) => e,
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg: <value>` if the value is `Ok`.
    ///
    /// ```should_panic
    /// use gust::prelude::*;
    ///
    /// let x: Result<u32> = Ok(10);
    /// x.expect_err("Testing expect_err"); // panics with `Testing expect_err: 10`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> ErrBox
    where
        T: fmt::Debug,
    {
        match self {
            Ok(v) => unwind::raise(
                Error::ExpectErr {
                    msg: msg.to_owned(),
                    value: format!("{v:?}"),
                }
                .into(),
                |e| e.message(),
            ),
            Err(e) => e,
        }
    }

    /// Returns the `Ok` value without checking.
    ///
    /// # Safety
    ///
    /// Calling this on `Err` is undefined behavior.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Ok(v) => v,
            // SAFETY: the caller guarantees `self` is `Ok`.
            Err(_) => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Maps the success value, leaving an error untouched.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::ret;
    ///
    /// let lens = ["1", "x"].map(|s| ret(s.parse::<i32>()).map(|n| n * 2));
    /// assert_eq!(lens[0], Ok(2));
    /// assert!(lens[1].is_err());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => Ok(f(v)),
            Err(e) => Err(e),
        }
    }

    /// Maps the error, leaving a success value untouched.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let r: Result<i32> = err_msg("disk");
    /// let r = r.map_err(|e| e.context("saving"));
    /// assert_eq!(r.unwrap_err().to_string(), "saving: disk");
    /// ```
    #[inline]
    pub fn map_err<E, F>(self, f: F) -> Result<T>
    where
        E: Into<ErrBox>,
        F: FnOnce(ErrBox) -> E,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(f(e).into()),
        }
    }

    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => f(v),
            Err(_) => default,
        }
    }

    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(ErrBox) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(v) => f(v),
            Err(e) => default(e),
        }
    }

    /// Calls `f` with a reference to the success value, then returns the
    /// result unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(v) = &self {
            f(v);
        }
        self
    }

    /// Calls `f` with a reference to the error, then returns the result
    /// unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrBox),
    {
        if let Err(e) = &self {
            f(e);
        }
        self
    }

    /// Returns `res` if the result is `Ok`, otherwise the error of `self`.
    #[inline]
    pub fn and<U>(self, res: Result<U>) -> Result<U> {
        match self {
            Ok(_) => res,
            Err(e) => Err(e),
        }
    }

    /// Calls `f` with the success value, or propagates the error.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            Ok(v) => f(v),
            Err(e) => Err(e),
        }
    }

    /// Returns `res` if the result is `Err`, otherwise the success value of
    /// `self`.
    #[inline]
    pub fn or(self, res: Result<T>) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(_) => res,
        }
    }

    /// Calls `f` with the error, or keeps the success value.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let fallback = err_msg("primary down").or_else(|_| Ok(5));
    /// assert_eq!(fallback, Ok(5));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Result<T>
    where
        F: FnOnce(ErrBox) -> Result<T>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => f(e),
        }
    }

    /// Returns `true` if the result is `Ok` holding a value equal to `x`.
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Ok(v) if x == v)
    }

    /// Returns `true` if the result is `Err` and some payload along its
    /// context chain equals `e`. See [`ErrBox::is_value`].
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// let r: Result<()> = err_msg("busy");
    /// assert!(r.contains_err(&"busy"));
    /// assert!(!r.contains_err(&"idle"));
    /// assert!(r.map_err(|e| e.context("retrying")).contains_err(&"busy"));
    /// ```
    #[inline]
    pub fn contains_err<E>(&self, e: &E) -> bool
    where
        E: Any + PartialEq,
    {
        matches!(self, Err(err) if err.is_value(e))
    }

    /// `Ok(v)` becomes `Continue(v)` and `Err(e)` becomes `Break(e)`.
    #[inline]
    pub fn ctrl_flow(self) -> ControlFlow<ErrBox, T> {
        self.into()
    }

    /// Converts into the standard library's result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, ErrBox> {
        self.into()
    }
}

impl<T> Result<Result<T>> {
    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::result::err_msg;
    ///
    /// assert_eq!(Ok::<Result<i32>>(Ok(1)).flatten(), Ok(1));
    /// assert_eq!(Ok::<Result<i32>>(err_msg("in")).flatten(), err_msg("in"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Result<T> {
        match self {
            Ok(inner) => inner,
            Err(e) => Err(e),
        }
    }
}

impl<T> Result<Option<T>> {
    /// Transposes a `Result` of an `Option` into an `Option` of a `Result`.
    #[inline]
    pub fn transpose(self) -> Option<Result<T>> {
        match self {
            Ok(Some(v)) => Some(Ok(v)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T>
where
    E: Into<ErrBox>,
{
    #[inline]
    fn from(r: std::result::Result<T, E>) -> Self {
        match r {
            std::result::Result::Ok(v) => Ok(v),
            std::result::Result::Err(e) => Err(e.into()),
        }
    }
}

impl<T> From<Result<T>> for std::result::Result<T, ErrBox> {
    #[inline]
    fn from(r: Result<T>) -> Self {
        match r {
            Ok(v) => std::result::Result::Ok(v),
            Err(e) => std::result::Result::Err(e),
        }
    }
}

/// Collects until the first `Err`, which becomes the outcome.
impl<A, V> FromIterator<Result<A>> for Result<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<A>>,
    {
        let mut failure = std::option::Option::None;
        let collected = std::iter::Iterator::map_while(iter.into_iter(), |r| match r {
            Ok(v) => std::option::Option::Some(v),
            Err(e) => {
                failure = std::option::Option::Some(e);
                std::option::Option::None
            }
        })
        .collect();
        match failure {
            std::option::Option::Some(e) => Err(e),
            std::option::Option::None => Ok(collected),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ok(v) => write!(f, "Ok({v})"),
            Err(e) => write!(f, "Err({e})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catch;
    use std::io;

    fn boom() -> ErrBox {
        ErrBox::msg("boom")
    }

    #[test]
    fn test_predicates_and_projections() {
        let good: Result<i32> = Ok(1);
        let bad: Result<i32> = Err(boom());
        assert!(good.is_ok() && bad.is_err());
        assert!(good.clone().is_ok_and(|v| v == 1));
        assert!(bad.clone().is_err_and(|e| e.message() == "boom"));
        assert_eq!(good.clone().ok(), Some(1));
        assert_eq!(bad.clone().ok(), None);
        assert_eq!(bad.err(), Some(boom()));
        assert_eq!(good.err(), None);
    }

    #[test]
    fn test_accessors_with_defaults() {
        assert_eq!(Err::<i32>(boom()).unwrap_or(3), 3);
        assert_eq!(Err::<i32>(boom()).unwrap_or_else(|e| e.message().len() as i32), 4);
        assert_eq!(Err::<String>(boom()).unwrap_or_default(), "");
        assert_eq!(Err::<Option<Box<Box<i32>>>>(boom()).unwrap_or_default(), None);
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap()` on an `Err` value: boom")]
    fn test_unwrap_panics_outside_catch() {
        Err::<i32>(boom()).unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap_err()` on an `Ok` value: 7")]
    fn test_unwrap_err_panics() {
        Ok(7).unwrap_err();
    }

    #[test]
    #[should_panic(expected = "reading header: boom")]
    fn test_expect_prefixes_message() {
        Err::<i32>(boom()).expect("reading header");
    }

    #[test]
    #[should_panic(expected = "wanted a failure: \"ok\"")]
    fn test_expect_err_prefixes_value() {
        Ok("ok").expect_err("wanted a failure");
    }

    #[test]
    fn test_expect_inside_catch_wraps_source() {
        let r: Result<i32> = catch(|| Ok(Err::<i32>(io::Error::other("eof").into()).expect("header")));
        let err = r.unwrap_err();
        assert_eq!(err.to_string(), "header: eof");
        assert!(err.is::<io::Error>());
    }

    #[test]
    fn test_and_then_preserves_error_type() {
        let r: Result<i32> = Err(io::Error::new(io::ErrorKind::NotFound, "gone").into());
        let chained = r.and_then(|v| Ok(v + 1)).map(|v| v * 2);
        let err = chained.unwrap_err();
        assert_eq!(err.downcast_ref::<io::Error>().map(|e| e.kind()), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_and_or() {
        let good: Result<i32> = Ok(1);
        let bad: Result<i32> = Err(boom());
        assert_eq!(good.clone().and(Ok("x")), Ok("x"));
        assert_eq!(bad.clone().and(Ok("x")), Err(boom()));
        assert_eq!(bad.clone().or(Ok(2)), Ok(2));
        assert_eq!(good.clone().or(Ok(2)), Ok(1));
        assert_eq!(bad.clone().or_else(|e| Ok(e.message().len() as i32)), Ok(4));
        assert_eq!(good.or_else(|_| Ok(9)), Ok(1));
    }

    #[test]
    fn test_map_family() {
        let bad: Result<i32> = Err(boom());
        assert_eq!(Ok(2).map_or(0, |v| v + 1), 3);
        assert_eq!(bad.clone().map_or(0, |v| v + 1), 0);
        assert_eq!(bad.clone().map_or_else(|e| e.message().len(), |_| 0), 4);
        let remapped = bad.map_err(|_| io::Error::other("swapped"));
        assert!(remapped.unwrap_err().is::<io::Error>());
    }

    #[test]
    fn test_contains() {
        let good: Result<i32> = Ok(1);
        assert!(good.contains(&1));
        assert!(!good.contains(&2));
        let bad: Result<i32> = Err(ErrBox::msg(404u16));
        assert!(bad.contains_err(&404u16));
        assert!(!bad.contains_err(&404u32));
    }

    #[test]
    fn test_inspect() {
        let mut seen = Vec::new();
        let _ = Ok::<i32>(1).inspect(|v| seen.push(*v)).inspect_err(|_| seen.push(-1));
        let _ = Err::<i32>(boom()).inspect(|v| seen.push(*v)).inspect_err(|_| seen.push(-1));
        assert_eq!(seen, vec![1, -1]);
    }

    #[test]
    fn test_flatten_and_transpose() {
        assert_eq!(Ok::<Result<i32>>(Ok(1)).flatten(), Ok(1));
        assert_eq!(Ok::<Result<i32>>(Err(boom())).flatten(), Err(boom()));
        assert_eq!(Err::<Result<i32>>(boom()).flatten(), Err(boom()));
        assert_eq!(Ok(Some(1)).transpose(), Some(Ok(1)));
        assert_eq!(Ok::<Option<i32>>(None).transpose(), None);
    }

    #[test]
    fn test_std_conversions() {
        let parsed: Result<i32> = "12".parse::<i32>().into();
        assert_eq!(parsed, Ok(12));
        let failed: Result<i32> = "x".parse::<i32>().into();
        assert!(failed.clone().unwrap_err().is::<std::num::ParseIntError>());
        assert!(failed.into_std().is_err());
    }

    #[test]
    fn test_collect_stops_at_first_err() {
        let all: Result<Vec<i32>> = vec![Ok(1), Ok(2)].into_iter().collect();
        assert_eq!(all, Ok(vec![1, 2]));
        let mut pulled = 0;
        let first_bad: Result<Vec<i32>> = vec![Ok(1), Err(boom()), Ok(3)]
            .into_iter()
            .inspect(|_| pulled += 1)
            .collect();
        assert_eq!(first_bad, Err(boom()));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_ctrl_flow() {
        assert_eq!(Ok(1).ctrl_flow(), ControlFlow::Continue(1));
        assert_eq!(Err::<i32>(boom()).ctrl_flow(), ControlFlow::Break(boom()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ok(3).to_string(), "Ok(3)");
        assert_eq!(Err::<i32>(boom()).to_string(), "Err(boom)");
    }
}
