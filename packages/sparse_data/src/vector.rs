
use std::{
    collections::btree_map::{
        self,
        BTreeMap,
    },
    ops::Index,
};


/// Ordered sparse vector over the full `i64` index domain.
///
/// Stores only entries whose value differs from the vector's default value.
/// Reading any other index yields the default. Writing the default value to
/// an index frees that index instead of storing anything, so the invariant
/// holds that no stored value ever equals the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseVector<V> {
    entries: BTreeMap<i64, V>,
    default: V,
}

impl<V> SparseVector<V> {
    /// New empty vector with the given default value.
    pub fn new(default: V) -> Self {
        SparseVector {
            entries: BTreeMap::new(),
            default,
        }
    }

    /// Value at `idx`, or the default value if `idx` is unoccupied.
    ///
    /// Never stores anything.
    pub fn get(&self, idx: i64) -> &V {
        self.entries.get(&idx).unwrap_or(&self.default)
    }

    /// Stored value at `idx`, if `idx` is occupied.
    pub fn stored(&self, idx: i64) -> Option<&V> {
        self.entries.get(&idx)
    }

    /// Whether `idx` is occupied.
    pub fn contains(&self, idx: i64) -> bool {
        self.entries.contains_key(&idx)
    }

    /// The vector's default value.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Number of occupied entries. Not a logical length.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest occupied index, or `None` if the vector is empty.
    pub fn max_index(&self) -> Option<i64> {
        self.entries.last_key_value().map(|(&idx, _)| idx)
    }

    /// Write `val` to `idx`, returning the previously stored value.
    ///
    /// Writing the vector's default value frees `idx` instead of storing
    /// anything, so a default write to an unoccupied index is a no-op and
    /// returns `None`.
    pub fn set(&mut self, idx: i64, val: V) -> Option<V>
    where
        V: PartialEq,
    {
        if val == self.default {
            self.entries.remove(&idx)
        } else {
            self.entries.insert(idx, val)
        }
    }

    /// Free the entry at `idx`, returning the stored value if there was one.
    pub fn remove(&mut self, idx: i64) -> Option<V> {
        self.entries.remove(&idx)
    }

    /// Copy the value at `src` to `dst`.
    ///
    /// An unoccupied `src` reads as the default value, which frees `dst`.
    /// `src == dst` is a no-op.
    pub fn copy_within(&mut self, src: i64, dst: i64)
    where
        V: Clone + PartialEq,
    {
        if src == dst {
            return;
        }
        let val = self.get(src).clone();
        self.set(dst, val);
    }

    /// Free all entries, keeping the default value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterator over occupied entries in ascending index order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            entries: self.entries.iter(),
        }
    }
}

impl<V> Index<i64> for SparseVector<V> {
    type Output = V;

    fn index(&self, idx: i64) -> &V {
        self.get(idx)
    }
}

impl<V: Default> Default for SparseVector<V> {
    fn default() -> Self {
        SparseVector::new(V::default())
    }
}

/// Iterator over a [`SparseVector`]'s occupied entries in ascending index
/// order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    entries: btree_map::Iter<'a, i64, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(&idx, val)| (idx, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V> IntoIterator for &'a SparseVector<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}


#[test]
fn test_default_read() {
    let vector: SparseVector<i64> = SparseVector::new(-777);
    for idx in [i64::MIN, -1000000, -1, 0, 1, 57, i64::MAX] {
        assert_eq!(*vector.get(idx), -777);
        assert_eq!(vector[idx], -777);
        assert_eq!(vector.stored(idx), None);
        assert!(!vector.contains(idx));
    }
    assert_eq!(vector.len(), 0);
    assert!(vector.is_empty());
    assert_eq!(vector.max_index(), None);

    // the Default impl defaults to V::default()
    let vector = SparseVector::<i64>::default();
    assert_eq!(*vector.default_value(), 0);
}

#[test]
fn test_insert_then_remove_by_default_write() {
    let mut vector = SparseVector::new(-777);
    for i in 0..10 {
        let idx = i * i * i * i;
        assert_eq!(vector.set(idx, idx + 1111), None);
        assert_eq!(vector.len(), (i + 1) as usize);
    }
    for i in 0..10 {
        let idx = i * i * i * i;
        assert_eq!(vector[idx], idx + 1111);
    }

    // writing the default value back frees each entry again
    let mut remaining = vector.len();
    for i in 0..10 {
        let idx = i * i * i * i;
        assert_eq!(vector.set(idx, -777), Some(idx + 1111));
        remaining -= 1;
        assert_eq!(vector.len(), remaining);
        assert_eq!(vector[idx], -777);
    }
    assert!(vector.is_empty());
}

#[test]
fn test_set_returns_previous() {
    let mut vector = SparseVector::new(0);
    assert_eq!(vector.set(5, 10), None);
    assert_eq!(vector.set(5, 20), Some(10));
    assert_eq!(vector.set(5, 0), Some(20));
    assert_eq!(vector.set(5, 0), None);
    assert_eq!(vector.len(), 0);
}

#[test]
fn test_remove() {
    let mut vector = SparseVector::new(0);
    vector.set(3, 7);
    assert_eq!(vector.remove(3), Some(7));
    assert_eq!(vector.remove(3), None);
    assert_eq!(vector.remove(100), None);
    assert!(vector.is_empty());
}

#[test]
fn test_max_index() {
    let mut vector = SparseVector::new(0);
    assert_eq!(vector.max_index(), None);
    vector.set(-40, 1);
    assert_eq!(vector.max_index(), Some(-40));
    vector.set(7, 2);
    assert_eq!(vector.max_index(), Some(7));
    vector.remove(7);
    assert_eq!(vector.max_index(), Some(-40));
}

#[test]
fn test_iter_ascending() {
    let mut vector = SparseVector::new(0);
    for idx in [30, -2, 14, 700, -100] {
        vector.set(idx, idx * 10);
    }
    let collected = vector.iter().map(|(idx, &val)| (idx, val)).collect::<Vec<_>>();
    assert_eq!(
        collected,
        vec![(-100, -1000), (-2, -20), (14, 140), (30, 300), (700, 7000)],
    );

    // restartable, and sized
    assert_eq!(vector.iter().len(), 5);
    assert_eq!((&vector).into_iter().count(), 5);
}

#[test]
fn test_copy_within() {
    let mut vector = SparseVector::new(0);
    vector.set(1, 44);
    vector.copy_within(1, 2);
    assert_eq!(vector[1], 44);
    assert_eq!(vector[2], 44);

    // copying an unoccupied source frees the destination
    vector.copy_within(3, 2);
    assert!(!vector.contains(2));

    // self-copy is a no-op
    vector.copy_within(1, 1);
    assert_eq!(vector[1], 44);
    assert_eq!(vector.len(), 1);
}

#[test]
fn test_clear() {
    let mut vector = SparseVector::new(9);
    vector.set(1, 2);
    vector.set(2, 3);
    vector.clear();
    assert!(vector.is_empty());
    assert_eq!(vector[1], 9);
    assert_eq!(*vector.default_value(), 9);
}
