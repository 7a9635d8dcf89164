use std::fmt;

use super::filtered_hint;
use crate::{
    iter::Iterator,
    option::Option::{self, None, Some},
};

/// A mapping with state threaded through every call. Ends at the first
/// `None` from the closure.
///
/// Created by [`Iterator::scan`].
#[derive(Clone)]
pub struct Scan<I, St, F> {
    iter: I,
    state: St,
    f: F,
    done: bool,
}

impl<I, St, F> Scan<I, St, F> {
    pub(crate) fn new(iter: I, state: St, f: F) -> Self {
        Scan { iter, state, f, done: false }
    }
}

impl<I: fmt::Debug, St: fmt::Debug, F> fmt::Debug for Scan<I, St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .finish()
    }
}

impl<B, I, St, F> Iterator for Scan<I, St, F>
where
    I: Iterator,
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        let x = match self.iter.next() {
            Some(x) => x,
            None => return None,
        };
        let out = (self.f)(&mut self.state, x);
        self.done = out.is_none();
        out
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        filtered_hint(self.iter.size_hint())
    }
}
