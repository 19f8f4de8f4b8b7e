//! Generic fixed-size 2D grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board to
//! build a candidate state (or to let a bot probe a move) shares structure
//! with the original instead of copying every cell.
//!
//! All indexed access is bounds-checked and reports
//! [`EngineError::OutOfRange`] rather than panicking. The arithmetic
//! helpers (`try_add`, `try_sub`, `try_mul`, `mul_vector`) are general
//! matrix infrastructure; gameplay never calls them.
//!
//! ## Example
//!
//! ```
//! use gamecenter_engine::core::{Board, Coord};
//!
//! let mut board = Board::new(2, 3, 0);
//! *board.at_mut(Coord::new(1, 2)).unwrap() = 7;
//!
//! assert_eq!(board.row(1).unwrap(), vec![0, 0, 7]);
//! assert_eq!(board.column(2).unwrap(), vec![0, 7]);
//! assert!(board.at(Coord::new(2, 0)).is_err());
//! ```

use std::ops::{Add, Mul, Sub};

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Coord;
use super::error::{EngineError, Result};

/// Board dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: usize,
    pub cols: usize,
}

impl BoardSize {
    /// Create a new size.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A square `n x n` size.
    #[must_use]
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Number of cells.
    #[must_use]
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A `rows x cols` matrix of `T`.
///
/// Deserialization rejects payloads whose cell count disagrees with the
/// declared dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawBoard<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Board<T: Clone> {
    rows: usize,
    cols: usize,
    cells: Vector<T>,
}

/// Wire shape of a [`Board`] before its dimensions are checked.
#[derive(Deserialize)]
struct RawBoard<T: Clone> {
    rows: usize,
    cols: usize,
    cells: Vector<T>,
}

impl<T: Clone> TryFrom<RawBoard<T>> for Board<T> {
    type Error = EngineError;

    fn try_from(raw: RawBoard<T>) -> Result<Self> {
        let expected = raw.rows.checked_mul(raw.cols).ok_or_else(|| {
            EngineError::InvalidArgument(format!("{}x{} board is too large", raw.rows, raw.cols))
        })?;
        if raw.cells.len() != expected {
            return Err(EngineError::InvalidArgument(format!(
                "{}x{} board needs {} cells, got {}",
                raw.rows,
                raw.cols,
                expected,
                raw.cells.len()
            )));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl<T: Clone> Default for Board<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vector::new(),
        }
    }
}

impl<T: Clone> Board<T> {
    /// Create a board with every cell set to `default`.
    pub fn new(rows: usize, cols: usize, default: T) -> Self {
        Self {
            rows,
            cols,
            cells: std::iter::repeat(default).take(rows * cols).collect(),
        }
    }

    /// Create a board of the given size with every cell set to `default`.
    pub fn with_size(size: BoardSize, default: T) -> Self {
        Self::new(size.rows, size.cols, default)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.rows, self.cols)
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if `coord` lies inside `[0, rows) x [0, cols)`.
    #[must_use]
    pub fn is_valid(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    fn checked_index(&self, coord: Coord) -> Result<usize> {
        self.index_of(coord).ok_or(EngineError::OutOfRange {
            row: coord.row,
            col: coord.col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Read a cell, `None` when out of range.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.index_of(coord).and_then(|i| self.cells.get(i))
    }

    /// Bounds-checked read access.
    pub fn at(&self, coord: Coord) -> Result<&T> {
        let index = self.checked_index(coord)?;
        self.cells.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Bounds-checked write access.
    pub fn at_mut(&mut self, coord: Coord) -> Result<&mut T> {
        let index = self.checked_index(coord)?;
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index, len })
    }

    /// Overwrite a cell, returning its previous value.
    pub fn set(&mut self, coord: Coord, value: T) -> Result<T> {
        let slot = self.at_mut(coord)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Copy out row `row`, left to right.
    pub fn row(&self, row: usize) -> Result<Vec<T>> {
        if row >= self.rows {
            return Err(EngineError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(self.cells.iter().skip(start).take(self.cols).cloned().collect())
    }

    /// Copy out column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        if col >= self.cols {
            return Err(EngineError::IndexOutOfRange {
                index: col,
                len: self.cols,
            });
        }
        Ok(self
            .cells
            .iter()
            .skip(col)
            .step_by(self.cols)
            .cloned()
            .collect())
    }

    /// Change dimensions and reset every cell to `default`.
    pub fn resize(&mut self, rows: usize, cols: usize, default: T) {
        *self = Self::new(rows, cols, default);
    }

    /// Reset every cell to `default`, keeping the dimensions.
    pub fn clear(&mut self, default: T) {
        self.resize(self.rows, self.cols, default);
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Coord::new((i / cols) as i32, (i % cols) as i32))
    }

    /// `(coord, &cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.cells.iter())
    }

    fn ensure_same_shape(&self, other: &Self, op: &str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(EngineError::InvalidArgument(format!(
                "cannot {} a {} board and a {} board",
                op,
                self.size(),
                other.size()
            )));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
        }
    }
}

impl<T: Clone + Add<Output = T>> Board<T> {
    /// Element-wise sum. Fails on a shape mismatch.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }
}

impl<T: Clone + Sub<Output = T>> Board<T> {
    /// Element-wise difference. Fails on a shape mismatch.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }
}

impl<T: Clone + Default + Add<Output = T> + Mul<Output = T>> Board<T> {
    /// Matrix product `self * other`.
    ///
    /// Requires `self.cols() == other.rows()`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(EngineError::InvalidArgument(format!(
                "cannot multiply a {} board by a {} board",
                self.size(),
                other.size()
            )));
        }

        let mut cells = Vector::new();
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = T::default();
                for k in 0..self.cols {
                    let a = self.cells[r * self.cols + k].clone();
                    let b = other.cells[k * other.cols + c].clone();
                    acc = acc + a * b;
                }
                cells.push_back(acc);
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            cells,
        })
    }

    /// Matrix-vector product. Requires `vector.len() == self.cols()`.
    pub fn mul_vector(&self, vector: &[T]) -> Result<Vec<T>> {
        if vector.len() != self.cols {
            return Err(EngineError::InvalidArgument(format!(
                "cannot multiply a {} board by a vector of length {}",
                self.size(),
                vector.len()
            )));
        }

        Ok((0..self.rows)
            .map(|r| {
                (0..self.cols).fold(T::default(), |acc, c| {
                    acc + self.cells[r * self.cols + c].clone() * vector[c].clone()
                })
            })
            .collect())
    }
}
