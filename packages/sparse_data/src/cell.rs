
use crate::vector::SparseVector;


impl<V> SparseVector<V> {
    /// Read handle for the cell at `idx`.
    pub fn cell(&self, idx: i64) -> CellRead<'_, V> {
        CellRead { vector: self, idx }
    }

    /// Write handle for the cell at `idx`.
    pub fn cell_mut(&mut self, idx: i64) -> CellWrite<'_, V> {
        CellWrite { vector: self, idx }
    }
}

/// Reader for a single cell of a [`SparseVector`].
///
/// Notably, implements `Copy` for any `V`.
#[derive(Debug)]
pub struct CellRead<'a, V> {
    pub vector: &'a SparseVector<V>,
    pub idx: i64,
}

impl<'a, V> Copy for CellRead<'a, V> {}

impl<'a, V> Clone for CellRead<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> CellRead<'a, V> {
    /// Read the cell: its stored value, or the default value if unoccupied.
    pub fn get(self) -> &'a V {
        self.vector.get(self.idx)
    }

    /// The stored value, if the cell is occupied.
    pub fn stored(self) -> Option<&'a V> {
        self.vector.stored(self.idx)
    }

    /// Whether the cell is occupied.
    pub fn is_occupied(self) -> bool {
        self.vector.contains(self.idx)
    }
}

/// Writer for a single cell of a [`SparseVector`].
#[derive(Debug)]
pub struct CellWrite<'a, V> {
    pub vector: &'a mut SparseVector<V>,
    pub idx: i64,
}

impl<'a, V> CellWrite<'a, V> {
    /// Convert a `&'a2 mut CellWrite<'_, V>` to a `CellWrite<'a2, V>`.
    pub fn reborrow<'a2>(&'a2 mut self) -> CellWrite<'a2, V> {
        CellWrite {
            vector: self.vector,
            idx: self.idx,
        }
    }

    /// Convert from a writer to a reader.
    pub fn read(self) -> CellRead<'a, V> {
        CellRead {
            vector: self.vector,
            idx: self.idx,
        }
    }

    /// Read the cell: its stored value, or the default value if unoccupied.
    pub fn get(&self) -> &V {
        self.vector.get(self.idx)
    }

    /// The stored value, if the cell is occupied.
    pub fn stored(&self) -> Option<&V> {
        self.vector.stored(self.idx)
    }

    /// Whether the cell is occupied.
    pub fn is_occupied(&self) -> bool {
        self.vector.contains(self.idx)
    }

    /// Write `val` to the cell, returning the previously stored value.
    ///
    /// Follows the vector's write contract: writing the default value frees
    /// the cell. Takes `&mut self`, so one handle can absorb a whole chain
    /// of re-assignments.
    pub fn set(&mut self, val: V) -> Option<V>
    where
        V: PartialEq,
    {
        self.vector.set(self.idx, val)
    }

    /// Free the cell, returning the stored value if there was one.
    pub fn remove(&mut self) -> Option<V> {
        self.vector.remove(self.idx)
    }
}


#[test]
fn test_cell_read() {
    let mut vector = SparseVector::new(0);
    vector.set(4, 44);

    let read = vector.cell(4);
    let copy = read;
    assert_eq!(*read.get(), 44);
    assert_eq!(*copy.get(), 44);
    assert_eq!(read.stored(), Some(&44));
    assert!(read.is_occupied());

    assert_eq!(*vector.cell(5).get(), 0);
    assert_eq!(vector.cell(5).stored(), None);
    assert!(!vector.cell(5).is_occupied());
}

#[test]
fn test_cell_write_chain() {
    let mut vector = SparseVector::new(0);
    let mut cell = vector.cell_mut(100);
    assert_eq!(cell.set(314), None);
    assert_eq!(cell.set(0), Some(314));
    assert_eq!(cell.set(217), None);
    assert_eq!(*cell.get(), 217);
    assert_eq!(vector.len(), 1);
    assert_eq!(vector[100], 217);
}

#[test]
fn test_cell_write_reborrow_and_read() {
    let mut vector = SparseVector::new(0);
    let mut cell = vector.cell_mut(7);
    cell.reborrow().set(1);
    assert!(cell.is_occupied());
    let read = cell.read();
    assert_eq!(*read.get(), 1);
}

#[test]
fn test_cell_write_remove() {
    let mut vector = SparseVector::new(0);
    vector.set(1, 5);
    let mut cell = vector.cell_mut(1);
    assert_eq!(cell.remove(), Some(5));
    assert_eq!(cell.remove(), None);
    assert!(!cell.is_occupied());
    assert_eq!(*cell.get(), 0);
}

#[test]
fn test_cross_vector_copy() {
    let mut src = SparseVector::new(0);
    let mut dst = SparseVector::new(0);
    src.set(3, 33);

    dst.cell_mut(9).set(src.cell(3).get().clone());
    assert_eq!(dst[9], 33);

    // an unoccupied source reads as the default, freeing the destination
    dst.cell_mut(9).set(src.cell(4).get().clone());
    assert!(dst.is_empty());
}
