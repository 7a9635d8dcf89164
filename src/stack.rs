//! Call-site provenance for error carriers.
//!
//! Every time an `Err` is raised through `.unwrap()` (or recorded with
//! [`result::try_err`](crate::result::try_err)) the caller's location is
//! pushed onto the carrier's [`StackTrace`]. Locations come from
//! `#[track_caller]`, so a frame points at the user's `.unwrap()` rather than
//! at library internals.
//!
//! When `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` is set, the first raise also
//! attaches a full [`Backtrace`].

use std::{backtrace::Backtrace, fmt, panic::Location, sync::Arc};

/// A single call site.
///
/// `{}` prints `file:line`; `{:#}` prints `function\n\tfile:line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    function: std::option::Option<&'static str>,
    file: &'static str,
    line: u32,
    column: u32,
}

impl Frame {
    /// The location of the caller of the function this is invoked from.
    #[track_caller]
    #[inline]
    pub fn caller() -> Frame {
        Frame::from(Location::caller())
    }

    /// Names the enclosing function of this frame.
    pub fn with_function(mut self, function: &'static str) -> Frame {
        self.function = std::option::Option::Some(function);
        self
    }

    pub fn function(&self) -> crate::Option<&'static str> {
        self.function.into()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for Frame {
    fn from(loc: &'static Location<'static>) -> Self {
        Frame {
            function: None,
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            if let Some(function) = self.function {
                writeln!(f, "{function}")?;
            }
            write!(f, "\t{}:{}", self.file, self.line)
        } else {
            write!(f, "{}:{}", self.file, self.line)
        }
    }
}

/// The ordered call sites an error travelled through, oldest first.
///
/// `{}` prints `[frame1 frame2 ...]`; `{:#}` prints one frame per line,
/// followed by the captured backtrace when there is one.
#[derive(Clone, Default)]
pub struct StackTrace {
    frames: Vec<Frame>,
    backtrace: std::option::Option<Arc<Backtrace>>,
}

impl StackTrace {
    pub const fn new() -> StackTrace {
        StackTrace {
            frames: Vec::new(),
            backtrace: None,
        }
    }

    /// A trace holding only the caller's frame.
    #[track_caller]
    pub fn here() -> StackTrace {
        let mut trace = StackTrace::new();
        trace.push(Frame::caller());
        trace
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Attaches a backtrace if none is held yet. Capturing is a no-op unless
    /// backtraces are enabled through the environment.
    pub fn capture_backtrace(&mut self) {
        if self.backtrace.is_none() {
            self.backtrace = Some(Arc::new(Backtrace::capture()));
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent frame.
    pub fn top(&self) -> crate::Option<&Frame> {
        self.frames.last().into()
    }

    pub fn backtrace(&self) -> crate::Option<&Backtrace> {
        self.backtrace.as_deref().into()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl PartialEq for StackTrace {
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames
    }
}

impl Eq for StackTrace {}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter().map(|fr| fr.to_string())).finish()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for (i, frame) in self.frames.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "{frame:#}")?;
            }
            if let Some(bt) = &self.backtrace {
                if bt.status() == std::backtrace::BacktraceStatus::Captured {
                    write!(f, "\n{bt}")?;
                }
            }
            Ok(())
        } else {
            f.write_str("[")?;
            for (i, frame) in self.frames.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{frame}")?;
            }
            f.write_str("]")
        }
    }
}
