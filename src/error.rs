use thiserror::Error as ThisError;

/// Failures raised by the library itself.
///
/// These are the payloads an [`ErrBox`](crate::ErrBox) carries when an
/// accessor is used on the wrong variant inside [`catch`](crate::catch), or
/// when a runtime type assertion fails.
///
/// # Examples
///
/// ```rust
/// use gust::prelude::*;
/// use gust::Error;
///
/// let r: Result<i32> = catch(|| {
///     let v: Option<i32> = None;
///     Ok(v.unwrap())
/// });
/// assert!(r.unwrap_err().is::<Error>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("called `Option::unwrap()` on a `None` value")]
    UnwrapOnNone,
    #[error("{0}")]
    Expect(String),
    #[error("called `Result::unwrap_err()` on an `Ok` value: {0}")]
    UnwrapErrOnOk(String),
    #[error("{msg}: {value}")]
    ExpectErr { msg: String, value: String },
    #[error("called `ControlFlow::unwrap_continue()` on a `Break` value")]
    UnwrapContinueOnBreak,
    #[error("called `ControlFlow::unwrap_break()` on a `Continue` value")]
    UnwrapBreakOnContinue,
    /// `got` is the static type handed to the assertion. A `Box<dyn Any>`
    /// input reports the box type, since an erased value's type has no name
    /// at runtime.
    #[error("type assert error, got {got}, want {want}")]
    TypeAssert {
        got: &'static str,
        want: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::UnwrapOnNone.to_string(),
            "called `Option::unwrap()` on a `None` value"
        );
        assert_eq!(Error::Expect("boom".into()).to_string(), "boom");
        assert_eq!(
            Error::ExpectErr {
                msg: "wanted err".into(),
                value: "3".into()
            }
            .to_string(),
            "wanted err: 3"
        );
        assert_eq!(
            Error::TypeAssert {
                got: "i32",
                want: "u8"
            }
            .to_string(),
            "type assert error, got i32, want u8"
        );
    }
}
