
use crate::vector::{
    self,
    SparseVector,
};
use std::{
    collections::btree_map::{
        self,
        BTreeMap,
    },
    ops::Index,
};
use vek::*;


/// Ordered sparse matrix over the full `i64 x i64` index domain.
///
/// Rows are [`SparseVector`]s and are themselves stored sparsely: a row is
/// created by the first non-default write into it and freed by the write or
/// removal that frees its last cell. An empty row is never stored, so
/// [`nrows`](Self::nrows) counts exactly the rows with at least one occupied
/// cell, and iteration never has to skip over hollow rows.
///
/// Positions are `Vec2<i64>` with `x` as the row index and `y` as the column
/// index, so `Vec2::new(i, j)` and the array form `[i, j]` both read in
/// matrix order. Position parameters accept anything `Into<Vec2<i64>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<V> {
    rows: BTreeMap<i64, SparseVector<V>>,
    default: V,
}

impl<V> SparseMatrix<V> {
    /// New empty matrix with the given default value.
    pub fn new(default: V) -> Self {
        SparseMatrix {
            rows: BTreeMap::new(),
            default,
        }
    }

    /// Value at `pos`, or the default value if `pos` is unoccupied.
    ///
    /// Never stores anything, in particular never creates a row.
    pub fn get<P: Into<Vec2<i64>>>(&self, pos: P) -> &V {
        let pos = pos.into();
        self.rows
            .get(&pos.x)
            .map(|row| row.get(pos.y))
            .unwrap_or(&self.default)
    }

    /// Stored value at `pos`, if `pos` is occupied.
    pub fn stored<P: Into<Vec2<i64>>>(&self, pos: P) -> Option<&V> {
        let pos = pos.into();
        self.rows.get(&pos.x)?.stored(pos.y)
    }

    /// Whether `pos` is occupied.
    pub fn contains<P: Into<Vec2<i64>>>(&self, pos: P) -> bool {
        self.stored(pos).is_some()
    }

    /// The matrix's default value.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Number of occupied cells, summed over all rows.
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    /// Number of stored rows, each of which has at least one occupied cell.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at index `i`, if it has at least one occupied cell.
    ///
    /// Row access is read-only: a row emptied through a `&mut SparseVector`
    /// would linger, and rows are freed by the matrix write operations the
    /// moment they become empty.
    pub fn row(&self, i: i64) -> Option<&SparseVector<V>> {
        self.rows.get(&i)
    }

    /// Iterator over stored rows in ascending row order.
    pub fn rows<'s>(&'s self) -> impl Iterator<Item = (i64, &'s SparseVector<V>)> + 's {
        self.rows.iter().map(|(&i, row)| (i, row))
    }

    /// Write `val` to `pos`, returning the previously stored value.
    ///
    /// Writing the matrix's default value frees the cell, and its row if
    /// that emptied it, instead of storing anything. A non-default write
    /// creates the row on demand.
    pub fn set<P: Into<Vec2<i64>>>(&mut self, pos: P, val: V) -> Option<V>
    where
        V: Clone + PartialEq,
    {
        let pos = pos.into();
        if val == self.default {
            // a default write resolves to a removal, which must not
            // materialize a row
            return self.remove(pos);
        }
        self.rows
            .entry(pos.x)
            .or_insert_with(|| SparseVector::new(self.default.clone()))
            .set(pos.y, val)
    }

    /// Free the cell at `pos`, returning the stored value if there was one.
    ///
    /// Frees the row in the same call if this removed its last cell.
    pub fn remove<P: Into<Vec2<i64>>>(&mut self, pos: P) -> Option<V> {
        let pos = pos.into();
        let row = self.rows.get_mut(&pos.x)?;
        let old = row.remove(pos.y);
        if row.is_empty() {
            self.rows.remove(&pos.x);
        }
        old
    }

    /// Copy the value at `src` to `dst`.
    ///
    /// An unoccupied `src` reads as the default value, which frees `dst`.
    /// `src == dst` is a no-op.
    pub fn copy_within<P, Q>(&mut self, src: P, dst: Q)
    where
        P: Into<Vec2<i64>>,
        Q: Into<Vec2<i64>>,
        V: Clone + PartialEq,
    {
        let (src, dst) = (src.into(), dst.into());
        if src == dst {
            return;
        }
        let val = self.get(src).clone();
        self.set(dst, val);
    }

    /// Free all cells and rows, keeping the default value.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Iterator over occupied cells in row-major order, ascending within
    /// each row.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            rows: self.rows.iter(),
            row: None,
        }
    }
}

impl<V, P: Into<Vec2<i64>>> Index<P> for SparseMatrix<V> {
    type Output = V;

    fn index(&self, pos: P) -> &V {
        self.get(pos)
    }
}

impl<V: Default> Default for SparseMatrix<V> {
    fn default() -> Self {
        SparseMatrix::new(V::default())
    }
}

/// Iterator over a [`SparseMatrix`]'s occupied cells in row-major order.
///
/// Holds the row cursor plus the current row's cell cursor. Crossing a row
/// boundary resumes at the matrix's next stored row, and the iterator stays
/// finished once the last row is exhausted.
#[derive(Debug)]
pub struct Iter<'a, V> {
    rows: btree_map::Iter<'a, i64, SparseVector<V>>,
    row: Option<(i64, vector::Iter<'a, V>)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec2<i64>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((i, cells)) = self.row.as_mut() {
                if let Some((j, val)) = cells.next() {
                    return Some((Vec2::new(*i, j), val));
                }
            }
            match self.rows.next() {
                Some((&i, row)) => self.row = Some((i, row.iter())),
                None => return None,
            }
        }
    }
}

impl<'a, V> IntoIterator for &'a SparseMatrix<V> {
    type Item = (Vec2<i64>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}


#[test]
fn test_read_never_creates_rows() {
    let mut matrix = SparseMatrix::new(0);
    assert_eq!(*matrix.get([5, 5]), 0);
    assert_eq!(matrix[[5, 5]], 0);
    assert_eq!(matrix.stored([5, 5]), None);
    assert!(!matrix.contains([5, 5]));
    assert!(matrix.row(5).is_none());
    assert_eq!(matrix.nrows(), 0);
    assert_eq!(matrix.len(), 0);

    matrix.set([5, 5], 1);
    assert_eq!(matrix.nrows(), 1);
    assert_eq!(*matrix.get([5, 6]), 0);
    assert_eq!(matrix.nrows(), 1);
}

#[test]
fn test_immediate_row_pruning() {
    let mut matrix = SparseMatrix::new(0);
    matrix.set([2, 3], 8);
    matrix.set([2, 4], 9);
    assert_eq!(matrix.nrows(), 1);

    assert_eq!(matrix.remove([2, 3]), Some(8));
    assert_eq!(matrix.nrows(), 1);

    // a default write frees the row's last cell, and the row with it
    assert_eq!(matrix.set([2, 4], 0), Some(9));
    assert_eq!(matrix.nrows(), 0);
    assert!(matrix.is_empty());

    // and never creates a row in the first place
    assert_eq!(matrix.set([40, 1], 0), None);
    assert_eq!(matrix.nrows(), 0);
}

#[test]
fn test_remove_absent() {
    let mut matrix: SparseMatrix<i32> = SparseMatrix::new(0);
    assert_eq!(matrix.remove([1, 1]), None);
    matrix.set([1, 2], 5);
    assert_eq!(matrix.remove([1, 1]), None);
    assert_eq!(matrix.nrows(), 1);
    assert_eq!(matrix.len(), 1);
}

#[test]
fn test_fill_diagonals() {
    let mut matrix = SparseMatrix::new(0);
    for i in 0..10 {
        matrix.set([i, i], i);
        matrix.set([i, 9 - i], 9 - i);
    }
    assert_eq!(matrix.len(), 18);
    assert_eq!(matrix.nrows(), 10);
    for i in 1..9 {
        for j in 1..9 {
            let expect = if j == i {
                i
            } else if j == 9 - i {
                9 - i
            } else {
                0
            };
            assert_eq!(matrix[[i, j]], expect);
        }
    }
}

#[test]
fn test_iter_row_major() {
    let mut matrix = SparseMatrix::new(0);
    for i in 0..10 {
        matrix.set([i, i], i);
        matrix.set([i, 9 - i], 9 - i);
    }

    let cells = matrix.iter().collect::<Vec<_>>();
    assert_eq!(cells.len(), matrix.len());
    for &(pos, &val) in &cells {
        assert_eq!(matrix[pos], val);
    }
    for pair in cells.windows(2) {
        let (a, b) = (pair[0].0, pair[1].0);
        assert!((a.x, a.y) < (b.x, b.y));
    }

    // crossing a row boundary resumes at the next stored row
    assert_eq!(cells[0], (Vec2::new(0, 9), &9));
    assert_eq!(cells[1], (Vec2::new(1, 1), &1));
    assert_eq!(*cells.last().unwrap(), (Vec2::new(9, 9), &9));
}

#[test]
fn test_iter_empty_and_finished() {
    let matrix: SparseMatrix<i32> = SparseMatrix::new(0);
    let mut cells = matrix.iter();
    assert_eq!(cells.next(), None);
    assert_eq!(cells.next(), None);

    let mut matrix = SparseMatrix::new(0);
    matrix.set([1, 1], 1);
    let mut cells = matrix.iter();
    assert!(cells.next().is_some());
    assert_eq!(cells.next(), None);
    assert_eq!(cells.next(), None);
}

#[test]
fn test_copy_within() {
    let mut matrix = SparseMatrix::new(0);
    matrix.set([1, 2], 99);
    matrix.copy_within([1, 2], [50, -3]);
    assert_eq!(matrix[[50, -3]], 99);
    assert_eq!(matrix.len(), 2);

    // an unoccupied source frees the destination, and its row
    matrix.copy_within([4, 4], [50, -3]);
    assert_eq!(matrix.nrows(), 1);

    // self-copy is a no-op
    matrix.copy_within([1, 2], [1, 2]);
    assert_eq!(matrix[[1, 2]], 99);
    assert_eq!(matrix.len(), 1);
}

#[test]
fn test_negative_indices() {
    let mut matrix = SparseMatrix::new(0);
    matrix.set([-1000000000000, 4], 1);
    matrix.set([8, -17], 2);
    assert_eq!(matrix[[-1000000000000, 4]], 1);
    assert_eq!(matrix[[8, -17]], 2);
    assert_eq!(matrix.iter().next().unwrap().0, Vec2::new(-1000000000000, 4));
}

#[test]
fn test_row_access() {
    let mut matrix = SparseMatrix::new(7);
    matrix.set([3, 1], 1);
    matrix.set([3, 2], 2);
    matrix.set([9, 9], 3);

    let row = matrix.row(3).unwrap();
    assert_eq!(row.len(), 2);
    assert_eq!(row[1], 1);
    assert_eq!(*row.default_value(), 7);

    assert_eq!(matrix.rows().map(|(i, _)| i).collect::<Vec<_>>(), vec![3, 9]);
}

#[test]
fn test_clear() {
    let mut matrix = SparseMatrix::new(0);
    matrix.set([1, 1], 1);
    matrix.clear();
    assert!(matrix.is_empty());
    assert_eq!(matrix.nrows(), 0);
    assert_eq!(matrix[[1, 1]], 0);
}
