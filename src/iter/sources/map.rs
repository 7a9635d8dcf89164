use crate::{
    iter::{ExactSizeIterator, Iterator},
    option::Option,
    pair::Pair,
};

/// Yields the entries of a map as `Pair(key, value)`, in the map's own
/// iteration order.
///
/// Accepts anything that turns into an exact-length iterator of key-value
/// tuples: an owned or borrowed `HashMap`, a `BTreeMap`, and so on.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use gust::prelude::*;
/// use gust::iter;
///
/// let m = BTreeMap::from([("a", 1), ("b", 2)]);
/// let mut it = iter::from_map(&m);
/// assert_eq!(it.size_hint(), (2, Some(2)));
/// assert_eq!(it.next(), Some(Pair::new(&"a", &1)));
/// ```
#[inline]
pub fn from_map<M, K, V>(map: M) -> MapIter<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
    M::IntoIter: std::iter::ExactSizeIterator,
{
    MapIter { inner: map.into_iter() }
}

/// Iterator over map entries.
///
/// Created by [`from_map`].
#[derive(Debug, Clone)]
pub struct MapIter<I> {
    inner: I,
}

impl<I, K, V> Iterator for MapIter<I>
where
    I: std::iter::ExactSizeIterator<Item = (K, V)>,
{
    type Item = Pair<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Pair<K, V>> {
        self.inner.next().map(Pair::from).into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.inner.len();
        (n, Option::Some(n))
    }
}

impl<I, K, V> ExactSizeIterator for MapIter<I> where
    I: std::iter::ExactSizeIterator<Item = (K, V)>
{
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_hash_map_entries() {
        let m = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
        let mut entries = from_map(m).collect();
        entries.sort();
        assert_eq!(
            entries,
            vec![Pair::new(1, "one"), Pair::new(2, "two"), Pair::new(3, "three")]
        );
    }

    #[test]
    fn test_empty_map() {
        let m: HashMap<i32, i32> = HashMap::new();
        let mut it = from_map(&m);
        assert_eq!(it.size_hint(), (0, Option::Some(0)));
        assert_eq!(it.next(), Option::None);
    }
}
