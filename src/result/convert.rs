//! Building results from values, errors and host conventions.

use std::{
    any::{type_name, Any},
    fmt::{Debug, Display},
};

use crate::{
    errbox::ErrBox,
    error::Error,
    option::Option,
    result::Result::{self, Err, Ok},
    stack::Frame,
};

/// Wraps a success value. Same as `Ok(value)`.
#[inline]
pub fn ok<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Wraps an error. Same as `Err(err.into())`.
///
/// ```rust
/// use gust::result::err;
///
/// let r = err::<u8, _>(std::fmt::Error);
/// assert!(r.unwrap_err().is::<std::fmt::Error>());
/// ```
#[inline]
pub fn err<T, E>(err: E) -> Result<T>
where
    E: Into<ErrBox>,
{
    Err(err.into())
}

/// Wraps a plain message as an error.
#[inline]
pub fn err_msg<T, M>(message: M) -> Result<T>
where
    M: Display + Debug + Send + Sync + 'static,
{
    Err(ErrBox::msg(message))
}

/// Lifts a standard `(value, error)` result.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::result::ret;
///
/// assert_eq!(ret("7".parse::<u8>()), Ok(7));
/// assert!(ret("700".parse::<u8>()).is_err());
/// ```
#[inline]
pub fn ret<T, E>(r: std::result::Result<T, E>) -> Result<T>
where
    E: Into<ErrBox>,
{
    r.into()
}

/// Like [`err`], also recording the caller's location in the error's stack
/// trace.
///
/// ```rust
/// use gust::result::try_err;
///
/// let r = try_err::<(), _>(std::fmt::Error);
/// let err = r.unwrap_err();
/// assert_eq!(err.stack_trace().len(), 1);
/// assert_eq!(err.stack_trace().top().unwrap().line(), line!() - 3);
/// ```
#[inline]
#[track_caller]
pub fn try_err<T, E>(err: E) -> Result<T>
where
    E: Into<ErrBox>,
{
    let mut err = err.into();
    err.push_frame(Frame::caller());
    Err(err)
}

/// Asserts the dynamic type of `x`, yielding an [`Error::TypeAssert`] on
/// mismatch. Boxed `dyn Any` values are looked through for the match, but the
/// error still names `X`, the box type.
pub fn assert_ret<U, X>(x: X) -> Result<U>
where
    U: Any,
    X: Any,
{
    match crate::option::assert_opt::<U, X>(x) {
        Option::Some(u) => Ok(u),
        Option::None => Err(Error::TypeAssert {
            got: type_name::<X>(),
            want: type_name::<U>(),
        }
        .into()),
    }
}

/// Builds an `Err` from a format string.
///
/// ```rust
/// use gust::prelude::*;
///
/// let r: Result<()> = gust::fmt_err!("bad port {}", 70000);
/// assert_eq!(r.unwrap_err().to_string(), "bad port 70000");
/// ```
#[macro_export]
macro_rules! fmt_err {
    ($($arg:tt)*) => {
        $crate::Result::Err($crate::ErrBox::msg(::std::format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(ok(1), Ok(1));
        assert_eq!(err_msg::<i32, _>("x"), Err(ErrBox::msg("x")));
        assert!(err::<i32, _>(std::fmt::Error).is_err());
    }

    #[test]
    fn test_ret_laws() {
        let good: std::result::Result<i32, std::fmt::Error> = std::result::Result::Ok(3);
        let bad: std::result::Result<i32, std::fmt::Error> = std::result::Result::Err(std::fmt::Error);
        assert_eq!(ret(good), Ok(3));
        assert_eq!(ret(bad), Err(ErrBox::from(std::fmt::Error)));
    }

    #[test]
    fn test_try_err_records_frame() {
        let r: Result<()> = try_err(ErrBox::msg("x"));
        let trace = r.unwrap_err().stack_trace().clone();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.frames()[0].file(), file!());
    }

    #[test]
    fn test_assert_ret() {
        assert_eq!(assert_ret::<u8, _>(1u8), Ok(1));
        let err = assert_ret::<u8, _>("s").unwrap_err();
        assert_eq!(err.to_string(), "type assert error, got &str, want u8");
    }

    #[test]
    fn test_assert_ret_erased_mismatch_names_box() {
        let erased: Box<dyn std::any::Any> = Box::new(1i32);
        let msg = assert_ret::<u8, _>(erased).unwrap_err().to_string();
        assert!(msg.contains("Box<dyn"), "{msg}");
        assert!(msg.ends_with(", want u8"), "{msg}");

        let erased: Box<dyn std::any::Any> = Box::new(1i32);
        assert_eq!(assert_ret::<i32, _>(erased), Ok(1));
    }

    #[test]
    fn test_fmt_err_macro() {
        let r: Result<i32> = crate::fmt_err!("{}-{}", 1, 2);
        assert_eq!(r.unwrap_err().to_string(), "1-2");
    }
}
