use std::fmt;

/// An ordered 2-tuple.
///
/// Produced by [`Iterator::zip`](crate::Iterator::zip),
/// [`Iterator::enumerate`](crate::Iterator::enumerate) and the map sources.
///
/// # Examples
///
/// ```rust
/// use gust::Pair;
///
/// let p = Pair::new(1, "one");
/// let (n, s) = p.split();
/// assert_eq!((n, s), (1, "one"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    pub a: A,
    pub b: B,
}

/// An index and the element found at it.
pub type VecEntry<T> = Pair<usize, T>;

/// A key and its value.
pub type DictEntry<K, V> = Pair<K, V>;

impl<A, B> Pair<A, B> {
    #[inline]
    pub const fn new(a: A, b: B) -> Self {
        Pair { a, b }
    }

    /// Returns both components in order.
    #[inline]
    pub fn split(self) -> (A, B) {
        (self.a, self.b)
    }

    /// Swaps the components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gust::Pair;
    ///
    /// assert_eq!(Pair::new(1, 'x').swap(), Pair::new('x', 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.b, self.a)
    }

    #[inline]
    pub const fn as_ref(&self) -> Pair<&A, &B> {
        Pair { a: &self.a, b: &self.b }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Pair<&mut A, &mut B> {
        Pair { a: &mut self.a, b: &mut self.b }
    }

    #[inline]
    pub fn map_a<A2, F>(self, f: F) -> Pair<A2, B>
    where
        F: FnOnce(A) -> A2,
    {
        Pair::new(f(self.a), self.b)
    }

    #[inline]
    pub fn map_b<B2, F>(self, f: F) -> Pair<A, B2>
    where
        F: FnOnce(B) -> B2,
    {
        Pair::new(self.a, f(self.b))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((a, b): (A, B)) -> Self {
        Pair { a, b }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(p: Pair<A, B>) -> Self {
        p.split()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_swap() {
        let p = Pair::new(3, "three");
        assert_eq!(p.split(), (3, "three"));
        assert_eq!(p.swap(), Pair::new("three", 3));
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Pair<i32, char> = (1, 'a').into();
        assert_eq!(p, Pair { a: 1, b: 'a' });
        let t: (i32, char) = p.into();
        assert_eq!(t, (1, 'a'));
    }

    #[test]
    fn test_map_components() {
        let p = Pair::new(2, String::from("x"));
        let q = p.map_a(|a| a * 10).map_b(|b| b.len());
        assert_eq!(q, Pair::new(20, 1));
    }

    #[test]
    fn test_as_mut_aliases() {
        let mut p = Pair::new(1, 2);
        *p.as_mut().b = 5;
        assert_eq!(p.b, 5);
        assert_eq!(p.as_ref(), Pair::new(&1, &5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pair::new(1, "a").to_string(), "(1, a)");
    }
}
