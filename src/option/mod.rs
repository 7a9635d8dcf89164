//! Optional values.
//!
//! [`Option<T>`] is either [`Some`] holding a `T` or [`None`]. Besides the
//! method combinators, this module exports construction helpers that bridge
//! host conventions (`(value, ok)`, nullable pointers, zero values, dynamic
//! type assertions) and free-function forms of the combinators that take a
//! second type parameter.
//!
//! # Examples
//!
//! ```rust
//! use gust::prelude::*;
//! use gust::option;
//!
//! let port = Some("8080").map(|s| s.parse::<u16>().unwrap());
//! assert_eq!(port, Some(8080));
//! assert_eq!(option::map(port, |p| p + 1), Some(8081));
//!
//! let missing: Option<u16> = None;
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

mod convert;
mod func;
mod iter;
#[cfg(feature = "serde")]
mod serialize;

pub use convert::*;
pub use func::*;
pub use iter::{IntoIter, Iter};

use std::{fmt, hint, ops::Deref};

use crate::{
    errbox::ErrBox,
    error::Error,
    pair::Pair,
    result::Result::{self, Err, Ok},
    unwind,
};

pub use self::Option::{None, Some};

/// A value that may be absent.
///
/// Equality is structural: two `Some` are equal iff their payloads are, and
/// `None` only equals `None`. `None` orders before any `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value
    None,
    /// Some value of type `T`
    Some(T),
}

impl<T> Option<T> {
    /// Returns `true` if the option is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let x: Option<u32> = Some(2);
    /// assert!(x.is_some());
    ///
    /// let y: Option<u32> = None;
    /// assert!(!y.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// Returns `true` if the option is `Some` and the value satisfies `f`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// assert!(Some(2).is_some_and(|x| x > 1));
    /// assert!(!Some(0).is_some_and(|x| x > 1));
    /// assert!(!None::<u32>.is_some_and(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Some(v) => f(v),
            None => false,
        }
    }

    /// Returns `true` if the option is a `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if the option is `None` or the value satisfies `f`.
    #[inline]
    pub fn is_none_or<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Some(v) => f(v),
            None => true,
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Some(v) => Some(v),
            None => None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Some(v) => Some(v),
            None => None,
        }
    }

    /// Converts from `&Option<T>` to `Option<&T::Target>`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let name: Option<String> = Some("ferris".to_string());
    /// assert_eq!(name.as_deref(), Some("ferris"));
    /// ```
    #[inline]
    pub fn as_deref(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|t| t.deref())
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `None`. Inside
    /// [`catch`](crate::catch) the closure returns an `Err` holding
    /// [`Error::Expect`] instead.
    ///
    /// ```should_panic
    /// use gust::prelude::*;
    ///
    /// let x: Option<&str> = None;
    /// x.expect("fruits are healthy"); // panics with `fruits are healthy`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(v) => v,
            None => unwind::raise(Error::Expect(msg.to_owned()).into(), |e| e.message()),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`. Inside [`catch`](crate::catch) the
    /// closure returns an `Err` holding [`Error::UnwrapOnNone`] instead.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// assert_eq!(Some("air").unwrap(), "air");
    /// ```
    ///
    /// ```should_panic
    /// use gust::prelude::*;
    ///
    /// let x: Option<&str> = None;
    /// x.unwrap(); // fails
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(v) => v,
            None => unwind::raise(Error::UnwrapOnNone.into(), |e| e.message()),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(v) => v,
            None => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(v) => v,
            None => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Some(v) => v,
            None => T::default(),
        }
    }

    /// Returns the contained value without checking for `None`.
    ///
    /// # Safety
    ///
    /// Calling this on `None` is undefined behavior.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Some(v) => v,
            // SAFETY: the caller guarantees `self` is `Some`.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Maps an `Option<T>` to `Option<U>` by applying a function to a
    /// contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let len = Some(String::from("Hello, World!")).map(|s| s.len());
    /// assert_eq!(len, Some(13));
    ///
    /// let x: Option<String> = None;
    /// assert_eq!(x.map(|s| s.len()), None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => Some(f(v)),
            None => None,
        }
    }

    /// Calls `f` with a reference to the contained value, then returns the
    /// option unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(v) = &self {
            f(v);
        }
        self
    }

    /// Calls `f` if the option is `None`, then returns the option unchanged.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let mut misses = 0;
    /// let x: Option<i32> = None;
    /// let x = x.inspect_none(|| misses += 1).inspect(|_| unreachable!());
    /// assert_eq!((x, misses), (None, 1));
    /// ```
    #[inline]
    pub fn inspect_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => f(v),
            None => default,
        }
    }

    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => f(v),
            None => default(),
        }
    }

    /// Transforms `Some(v)` to `Ok(v)` and `None` to `Err(err)`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::ErrBox;
    ///
    /// assert_eq!(Some(1).ok_or(ErrBox::msg("none")), Ok(1));
    /// assert!(None::<i32>.ok_or(ErrBox::msg("none")).is_err());
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T>
    where
        E: Into<ErrBox>,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(err.into()),
        }
    }

    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T>
    where
        E: Into<ErrBox>,
        F: FnOnce() -> E,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(err().into()),
        }
    }

    /// Returns an iterator over the possibly contained value.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// assert_eq!(Some(4).iter().next(), Some(&4));
    /// assert_eq!(None::<i32>.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Returns `None` if the option is `None`, otherwise returns `optb`.
    #[inline]
    pub fn and<U>(self, optb: Option<U>) -> Option<U> {
        match self {
            Some(_) => optb,
            None => None,
        }
    }

    /// Returns `None` if the option is `None`, otherwise calls `f` with the
    /// wrapped value and returns the result.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// fn sq_then_to_string(x: u32) -> Option<String> {
    ///     x.checked_mul(x).map(|sq| sq.to_string()).into()
    /// }
    ///
    /// assert_eq!(Some(2).and_then(sq_then_to_string), Some(4.to_string()));
    /// assert_eq!(Some(1_000_000).and_then(sq_then_to_string), None); // overflowed!
    /// assert_eq!(None.and_then(sq_then_to_string), None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(v) => f(v),
            None => None,
        }
    }

    /// Keeps `Some(v)` only when `predicate(&v)` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Some(v) = self {
            if predicate(&v) {
                return Some(v);
            }
        }
        None
    }

    /// Returns the option if it contains a value, otherwise returns `optb`.
    #[inline]
    pub fn or(self, optb: Option<T>) -> Option<T> {
        match self {
            x @ Some(_) => x,
            None => optb,
        }
    }

    #[inline]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            x @ Some(_) => x,
            None => f(),
        }
    }

    /// Returns `Some` if exactly one of `self`, `optb` is `Some`.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// assert_eq!(Some(2).xor(None), Some(2));
    /// assert_eq!(None.xor(Some(2)), Some(2));
    /// assert_eq!(Some(2).xor(Some(2)), None);
    /// assert_eq!(None::<u32>.xor(None), None);
    /// ```
    #[inline]
    pub fn xor(self, optb: Option<T>) -> Option<T> {
        match (self, optb) {
            (a @ Some(_), None) => a,
            (None, b @ Some(_)) => b,
            _ => None,
        }
    }

    /// Stores `Some(value)` and returns a mutable reference to it.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let mut opt = None;
    /// let val = opt.insert(1);
    /// *val = 3;
    /// assert_eq!(opt.unwrap(), 3);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Some(value);
        // SAFETY: the slot was just written.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Inserts `value` if the option is `None`, then returns a mutable
    /// reference to the contained value.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Inserts `f()` if the option is `None`, then returns a mutable
    /// reference to the contained value.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let mut x = None;
    /// {
    ///     let y: &mut u32 = x.get_or_insert_with(|| 5);
    ///     assert_eq!(y, &5);
    ///     *y = 7;
    /// }
    /// assert_eq!(x, Some(7));
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_none() {
            *self = Some(f());
        }
        // SAFETY: `self` is `Some` at this point.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Takes the value out, leaving `None` in its place.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        std::mem::replace(self, None)
    }

    /// Stores `Some(value)`, returning the previous state.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Some(value))
    }

    /// Zips `self` with another option.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// assert_eq!(Some(1).zip(Some("hi")), Some(Pair::new(1, "hi")));
    /// assert_eq!(Some(1).zip(None::<u8>), None);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<Pair<T, U>> {
        self.zip_with(other, Pair::new)
    }

    #[inline]
    pub fn zip_with<U, R, F>(self, other: Option<U>, f: F) -> Option<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(f(a, b)),
            _ => None,
        }
    }

    /// Converts into the standard library's option.
    #[inline]
    pub fn into_std(self) -> std::option::Option<T> {
        self.into()
    }
}

impl<T> Option<&T> {
    #[inline]
    pub fn copied(self) -> Option<T>
    where
        T: Copy,
    {
        self.map(|&t| t)
    }

    #[inline]
    pub fn cloned(self) -> Option<T>
    where
        T: Clone,
    {
        self.map(|t| t.clone())
    }
}

impl<T> Option<&mut T> {
    #[inline]
    pub fn cloned(self) -> Option<T>
    where
        T: Clone,
    {
        self.map(|t| t.clone())
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// assert_eq!(Some(Some(6)).flatten(), Some(6));
    /// assert_eq!(Some(None::<u32>).flatten(), None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Some(inner) => inner,
            None => None,
        }
    }
}

impl<A, B> Option<Pair<A, B>> {
    /// Splits an option of a pair into a pair of options.
    ///
    /// ```rust
    /// use gust::prelude::*;
    ///
    /// let (a, b) = Some(Pair::new(1, 'x')).unzip();
    /// assert_eq!((a, b), (Some(1), Some('x')));
    /// assert_eq!(a.zip(b), Some(Pair::new(1, 'x')));
    /// ```
    #[inline]
    pub fn unzip(self) -> (Option<A>, Option<B>) {
        match self {
            Some(Pair { a, b }) => (Some(a), Some(b)),
            None => (None, None),
        }
    }
}

impl<T> Option<Result<T>> {
    /// Transposes an `Option` of a `Result` into a `Result` of an `Option`.
    #[inline]
    pub fn transpose(self) -> Result<Option<T>> {
        match self {
            Some(Ok(v)) => Ok(Some(v)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        None
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    #[inline]
    fn from(o: std::option::Option<T>) -> Self {
        match o {
            std::option::Option::Some(v) => Some(v),
            std::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    #[inline]
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => std::option::Option::Some(v),
            None => std::option::Option::None,
        }
    }
}

impl<'a, T> From<&'a Option<T>> for Option<&'a T> {
    #[inline]
    fn from(o: &'a Option<T>) -> Self {
        o.as_ref()
    }
}

/// Collects until the first `None`, which becomes the outcome.
impl<A, V> FromIterator<Option<A>> for Option<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Option<A>>,
    {
        let mut missing = false;
        let collected = std::iter::Iterator::map_while(iter.into_iter(), |o| match o {
            Some(v) => std::option::Option::Some(v),
            None => {
                missing = true;
                std::option::Option::None
            }
        })
        .collect();
        if missing {
            None
        } else {
            Some(collected)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(v) => write!(f, "Some({v})"),
            None => f.write_str("None"),
        }
    }
}
