//! The type-erased error carrier stored in [`Result::Err`](crate::Result::Err).

use std::{
    any::Any,
    error::Error as StdError,
    fmt::{self, Debug, Display},
    sync::Arc,
};

use crate::{
    iter::Iterator,
    stack::{Frame, StackTrace},
    Option,
};

/// A shareable error value plus the call sites it was raised through.
///
/// Any [`std::error::Error`] converts into an `ErrBox` (so `?` works on
/// standard results); plain messages go through [`ErrBox::msg`]. Cloning is
/// cheap: clones share the payload and compare equal.
///
/// # Examples
///
/// ```rust
/// use gust::ErrBox;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let err = ErrBox::from(io).context("loading config");
///
/// assert_eq!(err.to_string(), "loading config: no such file");
/// assert!(err.is::<std::io::Error>());
/// assert_eq!(
///     err.downcast_ref::<std::io::Error>().unwrap().kind(),
///     std::io::ErrorKind::NotFound,
/// );
/// ```
#[derive(Clone)]
pub struct ErrBox {
    payload: Arc<dyn Payload>,
    trace: StackTrace,
}

trait Payload: Send + Sync + 'static {
    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static);
    fn value(&self) -> &dyn Any;
}

struct ErrorPayload<E>(E);

impl<E> Payload for ErrorPayload<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &self.0
    }

    fn value(&self) -> &dyn Any {
        &self.0
    }
}

struct MessagePayload<M>(M);

impl<M: Debug> Debug for MessagePayload<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<M: Display> Display for MessagePayload<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Display + Debug> StdError for MessagePayload<M> {}

impl<M> Payload for MessagePayload<M>
where
    M: Display + Debug + Send + Sync + 'static,
{
    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn value(&self) -> &dyn Any {
        &self.0
    }
}

struct Context {
    msg: String,
    source: ErrBox,
}

impl Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("msg", &self.msg)
            .field("source", &self.source.payload.as_error())
            .finish()
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.msg, self.source.payload.as_error())
    }
}

impl StdError for Context {
    fn source(&self) -> std::option::Option<&(dyn StdError + 'static)> {
        Some(self.source.as_error())
    }
}

impl ErrBox {
    /// Wraps an error value.
    pub fn new<E>(error: E) -> ErrBox
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrBox {
            payload: Arc::new(ErrorPayload(error)),
            trace: StackTrace::new(),
        }
    }

    /// Wraps a plain message. The message's `Display` output is the error
    /// message and the message itself is retrievable with
    /// [`value_ref`](ErrBox::value_ref).
    ///
    /// ```rust
    /// use gust::ErrBox;
    ///
    /// let err = ErrBox::msg("disk full");
    /// assert_eq!(err.to_string(), "disk full");
    /// assert_eq!(err.value_ref::<&str>().unwrap(), &"disk full");
    /// ```
    pub fn msg<M>(message: M) -> ErrBox
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        ErrBox {
            payload: Arc::new(MessagePayload(message)),
            trace: StackTrace::new(),
        }
    }

    /// Wraps `self` under a higher-level message. The result displays as
    /// `msg: <self>` and its [`source`](ErrBox::source) is `self`. The stack
    /// trace carries over.
    pub fn context<C>(self, msg: C) -> ErrBox
    where
        C: Display,
    {
        let trace = self.trace.clone();
        ErrBox {
            payload: Arc::new(ErrorPayload(Context {
                msg: msg.to_string(),
                source: self,
            })),
            trace,
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> String {
        self.payload.as_error().to_string()
    }

    /// The top-level error as a standard error object.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.payload.as_error()
    }

    /// The error this one wraps, if any.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.payload.as_error().source().into()
    }

    /// Walks the error chain starting at the top-level error.
    ///
    /// ```rust
    /// use gust::prelude::*;
    /// use gust::ErrBox;
    ///
    /// let err = ErrBox::msg("root").context("middle").context("top");
    /// let messages = err.chain().map(|e| e.to_string()).collect();
    /// assert_eq!(messages, vec!["top: middle: root", "middle: root", "root"]);
    /// ```
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self.as_error()),
        }
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut cur: &(dyn StdError + 'static) = self.as_error();
        while let Some(next) = cur.source() {
            cur = next;
        }
        cur
    }

    /// Returns `true` if any error in the chain is an `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Finds the first error of type `E` along the chain.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        let mut cur = std::option::Option::Some(self.as_error() as &(dyn StdError + 'static));
        while let Some(e) = cur {
            if let Some(hit) = e.downcast_ref::<E>() {
                return Option::Some(hit);
            }
            cur = e.source();
        }
        Option::None
    }

    /// The top-level payload when it is a `V`. For boxes built with
    /// [`ErrBox::msg`] this is the message value itself.
    pub fn value_ref<V>(&self) -> Option<&V>
    where
        V: Any,
    {
        self.payload.value().downcast_ref::<V>().into()
    }

    /// Returns `true` if any payload along the chain of
    /// [`context`](ErrBox::context) layers is a `V` equal to `value`.
    ///
    /// ```rust
    /// use gust::ErrBox;
    ///
    /// let err = ErrBox::msg("disk full").context("saving draft");
    /// assert!(err.is_value(&"disk full"));
    /// assert!(!err.is_value(&"disk empty"));
    /// ```
    pub fn is_value<V>(&self, value: &V) -> bool
    where
        V: Any + PartialEq,
    {
        let mut cur = self;
        loop {
            let payload = cur.payload.value();
            if payload.downcast_ref::<V>().is_some_and(|v| v == value) {
                return true;
            }
            match payload.downcast_ref::<Context>() {
                Some(ctx) => cur = &ctx.source,
                None => return false,
            }
        }
    }

    /// The call sites this error was raised through.
    pub fn stack_trace(&self) -> &StackTrace {
        &self.trace
    }

    /// Returns `true` if both boxes share one payload.
    pub fn ptr_eq(a: &ErrBox, b: &ErrBox) -> bool {
        Arc::ptr_eq(&a.payload, &b.payload)
    }

    pub(crate) fn push_frame(&mut self, frame: Frame) {
        self.trace.push(frame);
    }

    pub(crate) fn capture_backtrace(&mut self) {
        self.trace.capture_backtrace();
    }
}

impl<E> From<E> for ErrBox
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        ErrBox::new(error)
    }
}

impl From<ErrBox> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(err: ErrBox) -> Self {
        Box::new(Boxed(err))
    }
}

/// Adapter that lets an `ErrBox` leave the crate as a boxed standard error.
struct Boxed(ErrBox);

impl Debug for Boxed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for Boxed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for Boxed {
    fn source(&self) -> std::option::Option<&(dyn StdError + 'static)> {
        self.0.as_error().source()
    }
}

impl PartialEq for ErrBox {
    fn eq(&self, other: &Self) -> bool {
        ErrBox::ptr_eq(self, other) || self.message() == other.message()
    }
}

impl Display for ErrBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.payload.as_error())?;
        if f.alternate() && !self.trace.is_empty() {
            write!(f, "\n{:#}", self.trace)?;
        }
        Ok(())
    }
}

impl Debug for ErrBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrBox")
            .field("error", &self.payload.as_error())
            .field("trace", &self.trace)
            .finish()
    }
}

/// Iterator over an error and its sources. See [`ErrBox::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: std::option::Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next.take();
        self.next = cur.and_then(|e| e.source());
        cur.into()
    }
}
