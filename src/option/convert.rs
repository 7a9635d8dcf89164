//! Building options from host conventions.

use std::{
    any::{type_name, Any},
    ptr::NonNull,
};

use crate::{
    error::Error,
    option::Option::{self, None, Some},
    result::Result,
};

/// Wraps `value`. Same as `Some(value)`.
#[inline]
pub fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// An empty option.
#[inline]
pub fn none<T>() -> Option<T> {
    None
}

/// Builds an option from a `(value, ok)` pair.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::option::some_opt;
///
/// assert_eq!(some_opt(1, true), Some(1));
/// assert_eq!(some_opt(1, false), None);
/// ```
#[inline]
pub fn some_opt<T>(value: T, ok: bool) -> Option<T> {
    if ok {
        Some(value)
    } else {
        None
    }
}

/// A null pointer becomes `None`, anything else `Some`.
///
/// ```rust
/// use gust::option::ptr_opt;
///
/// let mut x = 5;
/// assert!(ptr_opt(&mut x as *mut i32).is_some());
/// assert!(ptr_opt(std::ptr::null_mut::<i32>()).is_none());
/// ```
#[inline]
pub fn ptr_opt<T>(ptr: *mut T) -> Option<NonNull<T>> {
    NonNull::new(ptr).into()
}

/// Copies the referenced element out, if there is one.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::option::elem_opt;
///
/// let v = vec![10, 20];
/// assert_eq!(elem_opt(v.get(1)), Some(20));
/// assert_eq!(elem_opt(v.get(7)), None);
/// ```
#[inline]
pub fn elem_opt<T: Clone>(elem: std::option::Option<&T>) -> Option<T> {
    elem.cloned().into()
}

/// The zero value of `T` becomes `None`, anything else `Some`.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::option::zero_opt;
///
/// assert_eq!(zero_opt(0), None);
/// assert_eq!(zero_opt(String::from("x")), Some(String::from("x")));
/// ```
#[inline]
pub fn zero_opt<T>(value: T) -> Option<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

/// Keeps the value of an `Ok`, dropping any error.
#[inline]
pub fn ret_opt<T, E>(r: std::result::Result<T, E>) -> Option<T> {
    r.ok().into()
}

/// Asserts the dynamic type of `x`, yielding `None` on mismatch.
///
/// A boxed `dyn Any` is looked through, so values that were already erased
/// can be recovered.
///
/// ```rust
/// use std::any::Any;
/// use gust::prelude::*;
/// use gust::option::assert_opt;
///
/// assert_eq!(assert_opt::<i32, _>(7i32), Some(7));
/// assert_eq!(assert_opt::<u8, _>(7i32), None);
///
/// let erased: Box<dyn Any> = Box::new("hi");
/// assert_eq!(assert_opt::<&str, _>(erased), Some("hi"));
/// ```
pub fn assert_opt<U, X>(x: X) -> Option<U>
where
    U: Any,
    X: Any,
{
    let boxed: Box<dyn Any> = Box::new(x);
    let boxed: Box<dyn Any> = match boxed.downcast::<Box<dyn Any>>() {
        Ok(inner) => *inner,
        Err(other) => match other.downcast::<Box<dyn Any + Send>>() {
            Ok(inner) => *inner,
            Err(other) => other,
        },
    };
    match boxed.downcast::<U>() {
        Ok(u) => Some(*u),
        Err(_) => None,
    }
}

/// Asserts the dynamic type of an option's value.
///
/// `None` passes through as `Ok(None)`; a mismatched value is an
/// [`Error::TypeAssert`] naming `T` as the type it got.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::option::safe_assert;
///
/// assert_eq!(safe_assert::<i32, i32>(Some(1)), Ok(Some(1)));
/// assert_eq!(safe_assert::<i32, u8>(None), Ok(None));
/// assert_eq!(
///     safe_assert::<i32, u8>(Some(1)).unwrap_err().to_string(),
///     "type assert error, got i32, want u8",
/// );
/// ```
pub fn safe_assert<T, U>(o: Option<T>) -> Result<Option<U>>
where
    T: Any,
    U: Any,
{
    match o {
        None => Result::Ok(None),
        Some(x) => match assert_opt::<U, T>(x) {
            Some(u) => Result::Ok(Some(u)),
            None => Result::Err(
                Error::TypeAssert {
                    got: type_name::<T>(),
                    want: type_name::<U>(),
                }
                .into(),
            ),
        },
    }
}
