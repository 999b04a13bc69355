//! Data structures for efficient storage of sparse grid data in memory.
//!
//! Basic example:
//!
//! ```
//! use sparse_data::SparseMatrix;
//!
//! // a conceptually infinite matrix of cells, almost all of them 0
//! let mut matrix = SparseMatrix::new(0);
//!
//! matrix.set([100, 100], 314);
//! assert_eq!(matrix[[100, 100]], 314);
//! assert_eq!(matrix.len(), 1);
//!
//! // unoccupied cells read as the default value without storing anything
//! assert_eq!(matrix[[-40, 7]], 0);
//! assert_eq!(matrix.len(), 1);
//!
//! // writing the default value frees the cell, and here its whole row
//! matrix.set([100, 100], 0);
//! assert!(matrix.is_empty());
//! assert_eq!(matrix.nrows(), 0);
//!
//! // occupied cells iterate in row-major order
//! matrix.set([2, -1], 5);
//! matrix.set([-3, 8], 6);
//! let cells = matrix
//!     .iter()
//!     .map(|(pos, &val)| (pos.x, pos.y, val))
//!     .collect::<Vec<_>>();
//! assert_eq!(cells, vec![(-3, 8, 6), (2, -1, 5)]);
//! ```
//!
//! ## cells, positions
//!
//! A [`SparseMatrix`] models a grid of _cells_ which extends indefinitely in
//! all directions. A cell is identified by a _position_, a 2-vec of signed
//! integers (`vek::Vec2<i64>`) wherein `x` is the row index and `y` is the
//! column index, so `Vec2::new(i, j)` and the array form `[i, j]` both read
//! in conventional matrix order. Position parameters accept anything
//! `Into<Vec2<i64>>`.
//!
//! ## the default value, occupancy
//!
//! Every matrix and every [`SparseVector`] is constructed around a _default
//! value_. A cell is _occupied_ when a value differing from the default is
//! stored for it; all other cells read as the default and cost nothing.
//! Writing the default value to a cell therefore frees it rather than
//! storing anything, which keeps the representation canonical: equal
//! contents always mean equal storage. `len()` counts occupied cells, never
//! the extent of the grid.
//!
//! ## rows
//!
//! The matrix stores its rows sparsely too, as [`SparseVector`]s keyed by
//! row index. Reads never create a row; a row comes into existence with its
//! first occupied cell and is freed by the very operation that frees its
//! last one. `nrows()` is therefore always the count of rows with at least
//! one occupied cell.
//!
//! ## cell handles
//!
//! [`CellRead`] and [`CellWrite`] are small non-owning handles for working
//! with one vector cell through several reads or re-assignments. They
//! borrow the vector, so the borrow checker enforces their lifetime and
//! aliasing discipline.


pub mod matrix;
pub mod vector;

mod cell;


pub use self::{
    cell::{
        CellRead,
        CellWrite,
    },
    matrix::SparseMatrix,
    vector::SparseVector,
};
