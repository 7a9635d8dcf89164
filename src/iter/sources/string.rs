use std::iter::Iterator as _;

use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, Iterator},
    option::Option::{self, None, Some},
};

/// Yields the bytes of a string.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut it = iter::from_str_bytes("héllo");
/// assert_eq!(it.size_hint(), (6, Some(6)));
/// assert_eq!(it.next(), Some(b'h'));
/// assert_eq!(it.next_back(), Some(b'o'));
/// ```
#[inline]
pub fn from_str_bytes(s: &str) -> Bytes<'_> {
    Bytes { bytes: s.as_bytes() }
}

/// Byte iterator over a string slice.
///
/// Created by [`from_str_bytes`].
#[derive(Debug, Clone)]
pub struct Bytes<'a> {
    bytes: &'a [u8],
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        match self.bytes.split_first() {
            std::option::Option::Some((b, rest)) => {
                self.bytes = rest;
                Some(*b)
            }
            std::option::Option::None => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bytes.len(), Some(self.bytes.len()))
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        match self.bytes.split_last() {
            std::option::Option::Some((b, rest)) => {
                self.bytes = rest;
                Some(*b)
            }
            std::option::Option::None => None,
        }
    }
}

impl ExactSizeIterator for Bytes<'_> {}

/// Yields the `char`s of a string.
///
/// The remaining byte length bounds the count from above. A `char` is at
/// most four bytes, which bounds it from below.
///
/// ```rust
/// use gust::prelude::*;
/// use gust::iter;
///
/// let mut it = iter::from_str_chars("añb");
/// assert_eq!(it.size_hint(), (1, Some(4)));
/// assert_eq!(it.collect(), vec!['a', 'ñ', 'b']);
/// ```
#[inline]
pub fn from_str_chars(s: &str) -> Chars<'_> {
    Chars { rest: s }
}

/// Character iterator over a string slice.
///
/// Created by [`from_str_chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    rest: &'a str,
}

impl<'a> Chars<'a> {
    /// The part of the string not yet yielded.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.rest
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next();
        self.rest = chars.as_str();
        c.into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.len();
        (len.div_ceil(4), Some(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_meet() {
        let mut it = from_str_bytes("abc");
        assert_eq!(it.next_back(), Some(b'c'));
        assert_eq!(it.next(), Some(b'a'));
        assert_eq!(it.next_back(), Some(b'b'));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_chars_multibyte() {
        let mut it = from_str_chars("日本");
        assert_eq!(it.size_hint(), (2, Some(6)));
        assert_eq!(it.next(), Some('日'));
        assert_eq!(it.as_str(), "本");
        assert_eq!(it.next(), Some('本'));
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_chars_empty() {
        assert_eq!(from_str_chars("").next(), None);
    }
}
