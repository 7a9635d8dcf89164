use std::fmt;

use crate::{
    errbox::ErrBox,
    error::Error,
    option::Option::{self, None, Some},
    result::Result,
    unwind,
};

/// Tells a short-circuiting consumer whether to keep going or stop.
///
/// `ControlFlow` is what the closures passed to
/// [`Iterator::try_fold`](crate::Iterator::try_fold) and
/// [`Iterator::try_for_each`](crate::Iterator::try_for_each) return.
///
/// # Examples
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let r = iter::from_range(1i8, 30).try_fold(0i8, |acc, x| match acc.checked_add(x) {
///     std::option::Option::Some(sum) => Continue(sum),
///     std::option::Option::None => Break(acc),
/// });
/// assert_eq!(r, Break(120));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlFlow<B, C = ()> {
    /// Keep going with this state
    Continue(C),
    /// Stop now and surface this value
    Break(B),
}

impl<B, C> ControlFlow<B, C> {
    /// Returns `true` if this is `Continue`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::ControlFlow;
    ///
    /// let x: ControlFlow<&str, i32> = ControlFlow::Continue(42);
    /// assert!(x.is_continue());
    ///
    /// let y: ControlFlow<&str, i32> = ControlFlow::Break("stop");
    /// assert!(!y.is_continue());
    /// ```
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, ControlFlow::Continue(_))
    }

    /// Returns `true` if this is `Break`.
    #[inline]
    pub const fn is_break(&self) -> bool {
        matches!(self, ControlFlow::Break(_))
    }

    /// Converts to `Option<C>`, discarding a break value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let x: ControlFlow<&str, i32> = Continue(42);
    /// assert_eq!(x.continue_value(), Some(42));
    ///
    /// let y: ControlFlow<&str, i32> = Break("stop");
    /// assert_eq!(y.continue_value(), None);
    /// ```
    #[inline]
    pub fn continue_value(self) -> Option<C> {
        match self {
            ControlFlow::Continue(c) => Some(c),
            ControlFlow::Break(_) => None,
        }
    }

    /// Converts to `Option<B>`, discarding a continue value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let x: ControlFlow<&str, i32> = Break("stop");
    /// assert_eq!(x.break_value(), Some("stop"));
    /// ```
    #[inline]
    pub fn break_value(self) -> Option<B> {
        match self {
            ControlFlow::Continue(_) => None,
            ControlFlow::Break(b) => Some(b),
        }
    }

    /// Maps the break value, leaving `Continue` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::ControlFlow;
    ///
    /// let x: ControlFlow<i32, i32> = ControlFlow::Break(5);
    /// assert_eq!(x.map_break(|v| v * 2), ControlFlow::Break(10));
    ///
    /// let y: ControlFlow<i32, i32> = ControlFlow::Continue(3);
    /// assert_eq!(y.map_break(|v| v * 2), ControlFlow::Continue(3));
    /// ```
    #[inline]
    pub fn map_break<B2, F>(self, f: F) -> ControlFlow<B2, C>
    where
        F: FnOnce(B) -> B2,
    {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(c),
            ControlFlow::Break(b) => ControlFlow::Break(f(b)),
        }
    }

    /// Maps the continue value, leaving `Break` untouched.
    #[inline]
    pub fn map_continue<C2, F>(self, f: F) -> ControlFlow<B, C2>
    where
        F: FnOnce(C) -> C2,
    {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(f(c)),
            ControlFlow::Break(b) => ControlFlow::Break(b),
        }
    }

    /// Maps whichever value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::ControlFlow;
    ///
    /// let x: ControlFlow<i32, i32> = ControlFlow::Continue(42);
    /// assert_eq!(x.map(|b| b + 1, |c| c * 2), ControlFlow::Continue(84));
    /// ```
    #[inline]
    pub fn map<B2, C2, FB, FC>(self, fb: FB, fc: FC) -> ControlFlow<B2, C2>
    where
        FB: FnOnce(B) -> B2,
        FC: FnOnce(C) -> C2,
    {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(fc(c)),
            ControlFlow::Break(b) => ControlFlow::Break(fb(b)),
        }
    }

    #[inline]
    pub fn continue_or(self, default: C) -> C {
        match self {
            ControlFlow::Continue(c) => c,
            ControlFlow::Break(_) => default,
        }
    }

    #[inline]
    pub fn continue_or_else<F>(self, f: F) -> C
    where
        F: FnOnce(B) -> C,
    {
        match self {
            ControlFlow::Continue(c) => c,
            ControlFlow::Break(b) => f(b),
        }
    }

    #[inline]
    pub fn break_or(self, default: B) -> B {
        match self {
            ControlFlow::Continue(_) => default,
            ControlFlow::Break(b) => b,
        }
    }

    #[inline]
    pub fn break_or_else<F>(self, f: F) -> B
    where
        F: FnOnce(C) -> B,
    {
        match self {
            ControlFlow::Continue(c) => f(c),
            ControlFlow::Break(b) => b,
        }
    }

    /// Converts from `&ControlFlow<B, C>` to `ControlFlow<&B, &C>`.
    #[inline]
    pub const fn as_ref(&self) -> ControlFlow<&B, &C> {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(c),
            ControlFlow::Break(b) => ControlFlow::Break(b),
        }
    }

    /// Converts from `&mut ControlFlow<B, C>` to `ControlFlow<&mut B, &mut C>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::ControlFlow;
    ///
    /// let mut x: ControlFlow<String, i32> = ControlFlow::Continue(1);
    /// if let ControlFlow::Continue(c) = x.as_mut() {
    ///     *c = 100;
    /// }
    /// assert_eq!(x, ControlFlow::Continue(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> ControlFlow<&mut B, &mut C> {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(c),
            ControlFlow::Break(b) => ControlFlow::Break(b),
        }
    }

    /// Returns `true` if this is a `Continue` holding a value equal to `c`.
    #[inline]
    pub fn contains_continue<U>(&self, c: &U) -> bool
    where
        U: PartialEq<C>,
    {
        matches!(self, ControlFlow::Continue(v) if c == v)
    }

    /// Returns `true` if this is a `Break` holding a value equal to `b`.
    #[inline]
    pub fn contains_break<U>(&self, b: &U) -> bool
    where
        U: PartialEq<B>,
    {
        matches!(self, ControlFlow::Break(v) if b == v)
    }

    /// Returns the continue value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` on `Break`. Inside [`catch`](crate::catch) the
    /// failure becomes an `Err` instead.
    ///
    /// ```should_panic
    /// use gust::ControlFlow;
    ///
    /// let x: ControlFlow<&str, i32> = ControlFlow::Break("stop");
    /// x.expect_continue("the world is ending"); // panics with "the world is ending"
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_continue(self, msg: &str) -> C {
        match self {
            ControlFlow::Continue(c) => c,
            ControlFlow::Break(_) => unwind::raise(Error::Expect(msg.into()).into(), |e| e.message()),
        }
    }

    /// Returns the break value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` on `Continue`.
    #[inline]
    #[track_caller]
    pub fn expect_break(self, msg: &str) -> B {
        match self {
            ControlFlow::Continue(_) => unwind::raise(Error::Expect(msg.into()).into(), |e| e.message()),
            ControlFlow::Break(b) => b,
        }
    }

    /// Returns the continue value.
    ///
    /// # Panics
    ///
    /// Panics on `Break`.
    ///
    /// ```should_panic
    /// use gust::ControlFlow;
    ///
    /// let x: ControlFlow<&str, i32> = ControlFlow::Break("stop");
    /// x.unwrap_continue(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_continue(self) -> C {
        match self {
            ControlFlow::Continue(c) => c,
            ControlFlow::Break(_) => {
                unwind::raise(Error::UnwrapContinueOnBreak.into(), |e| e.message())
            }
        }
    }

    /// Returns the break value.
    ///
    /// # Panics
    ///
    /// Panics on `Continue`.
    #[inline]
    #[track_caller]
    pub fn unwrap_break(self) -> B {
        match self {
            ControlFlow::Continue(_) => {
                unwind::raise(Error::UnwrapBreakOnContinue.into(), |e| e.message())
            }
            ControlFlow::Break(b) => b,
        }
    }

    /// Turns a break into an error: `Continue(c)` becomes `Ok(c)` and
    /// `Break(b)` becomes `Err(b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::ErrBox;
    ///
    /// let x: ControlFlow<ErrBox, i32> = Break(ErrBox::msg("halt"));
    /// assert_eq!(x.into_result().unwrap_err().to_string(), "halt");
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<C>
    where
        B: Into<ErrBox>,
    {
        match self {
            ControlFlow::Continue(c) => Result::Ok(c),
            ControlFlow::Break(b) => Result::Err(b.into()),
        }
    }
}

impl<T> From<Result<T>> for ControlFlow<ErrBox, T> {
    #[inline]
    fn from(r: Result<T>) -> Self {
        match r {
            Result::Ok(v) => ControlFlow::Continue(v),
            Result::Err(e) => ControlFlow::Break(e),
        }
    }
}

impl<B, C> From<std::ops::ControlFlow<B, C>> for ControlFlow<B, C> {
    #[inline]
    fn from(cf: std::ops::ControlFlow<B, C>) -> Self {
        match cf {
            std::ops::ControlFlow::Continue(c) => ControlFlow::Continue(c),
            std::ops::ControlFlow::Break(b) => ControlFlow::Break(b),
        }
    }
}

impl<B, C> From<ControlFlow<B, C>> for std::ops::ControlFlow<B, C> {
    #[inline]
    fn from(cf: ControlFlow<B, C>) -> Self {
        match cf {
            ControlFlow::Continue(c) => std::ops::ControlFlow::Continue(c),
            ControlFlow::Break(b) => std::ops::ControlFlow::Break(b),
        }
    }
}

impl<B: fmt::Display, C: fmt::Display> fmt::Display for ControlFlow<B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlFlow::Continue(c) => write!(f, "Continue({c})"),
            ControlFlow::Break(b) => write!(f, "Break({b})"),
        }
    }
}
