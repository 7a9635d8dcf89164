use crossbeam_channel::Receiver;

use crate::{
    iter::Iterator,
    option::Option::{self, None, Some},
};

/// Drains a channel, blocking on each pull until a message arrives. Ends
/// once every sender is dropped and the buffer is empty.
///
/// The lower size-hint bound is the number of messages already buffered;
/// there is no upper bound while senders remain.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// std::thread::spawn(move || {
///     for i in 0..3 {
///         tx.send(i).unwrap();
///     }
/// });
/// assert_eq!(iter::from_chan(rx).sum::<i32>(), 3);
/// ```
#[inline]
pub fn from_chan<T>(rx: Receiver<T>) -> Chan<T> {
    Chan { rx }
}

/// Blocking iterator over a channel's messages.
///
/// Created by [`from_chan`].
#[derive(Debug, Clone)]
pub struct Chan<T> {
    rx: Receiver<T>,
}

impl<T> Chan<T> {
    /// The underlying receiver.
    pub fn receiver(&self) -> &Receiver<T> {
        &self.rx
    }
}

impl<T> Iterator for Chan<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.rx.recv() {
            Ok(x) => Some(x),
            Err(_) => {
                tracing::trace!(buffered = 0, "channel source disconnected");
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rx.len(), None)
    }
}
