//! Catchable unwinding for `.unwrap()`.
//!
//! Inside [`catch`], an accessor used on the wrong variant (`Result::unwrap`
//! on `Err`, `Option::unwrap` on `None`, the `expect` family) does not abort
//! the thread. It unwinds with a private payload that only [`catch`]
//! recognises, and the closure's result becomes that `Err`. Outside any
//! `catch` the same accessors panic with the usual diagnostic message.
//!
//! Propagation never crosses a function boundary by itself: a callee with
//! its own `catch` returns a normal `Err`, and the caller `.unwrap()`s it again
//! to keep unwinding.
//!
//! # Examples
//!
//! ```rust
//! use gust::prelude::*;
//!
//! fn read(name: &str) -> Result<String> {
//!     catch(|| {
//!         let text = Result::from(std::fs::read_to_string(name)).unwrap();
//!         Ok(text)
//!     })
//! }
//!
//! let r = read("/definitely/not/here");
//! assert!(r.is_err());
//! assert!(r.unwrap_err().is::<std::io::Error>());
//! ```

use std::{
    cell::Cell,
    panic::{self, AssertUnwindSafe, Location},
    sync::Once,
};

use crate::{errbox::ErrBox, result::Result, stack::Frame};

/// Payload of a library unwind.
struct Unwind {
    err: ErrBox,
}

thread_local! {
    static CATCH_DEPTH: Cell<usize> = const { Cell::new(0) };
}

static HOOK: Once = Once::new();

/// Silences library unwinds. Any other panic still reaches the previous hook.
fn install_hook() {
    HOOK.call_once(|| {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if info.payload().is::<Unwind>() {
                return;
            }
            prev(info);
        }));
    });
}

struct DepthGuard;

impl DepthGuard {
    fn enter() -> DepthGuard {
        CATCH_DEPTH.with(|d| d.set(d.get() + 1));
        DepthGuard
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        CATCH_DEPTH.with(|d| d.set(d.get() - 1));
    }
}

/// Returns `true` while a [`catch`] is active on the current thread.
pub fn is_catching() -> bool {
    CATCH_DEPTH.with(|d| d.get() > 0)
}

/// Runs `f`, converting a library unwind raised inside it into `Err`.
///
/// A normal return is passed through untouched. Panics that did not come
/// from this library are resumed unchanged.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::result::err_msg;
///
/// let r: Result<i32> = catch(|| {
///     let v: i32 = err_msg("bad input").unwrap();
///     Ok(v + 1)
/// });
/// assert_eq!(r.unwrap_err().to_string(), "bad input");
///
/// let fine = catch(|| Ok(5));
/// assert_eq!(fine, Ok(5));
/// ```
pub fn catch<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    install_hook();
    let outcome = {
        let _depth = DepthGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(f))
    };
    match outcome {
        Ok(r) => r,
        Err(payload) => match payload.downcast::<Unwind>() {
            Ok(unwind) => {
                tracing::debug!(error = %unwind.err, "caught unwind");
                Result::Err(unwind.err)
            }
            Err(foreign) => {
                tracing::debug!("re-raising foreign panic");
                panic::resume_unwind(foreign)
            }
        },
    }
}

/// Records the caller's frame on `err`, then unwinds to the nearest
/// [`catch`], or panics with `describe(&err)` when there is none.
#[track_caller]
pub(crate) fn raise<D>(mut err: ErrBox, describe: D) -> !
where
    D: FnOnce(&ErrBox) -> String,
{
    let location = Location::caller();
    err.push_frame(Frame::from(location));
    if is_catching() {
        err.capture_backtrace();
        tracing::trace!(error = %err, %location, "raising unwind");
        panic::panic_any(Unwind { err })
    } else {
        panic!("{}", describe(&err))
    }
}
