//! Board geometry: cells, coordinates and candidate frames.
//!
//! Every type here is generic over the board side `N` so the engine can be
//! exercised on small boards while the binary uses [`BOARD_SIZE`].

#![allow(dead_code)]

use crate::error::{QueensError, Result};

/// Side length of the board searched by the binary.
pub const BOARD_SIZE: usize = 15;

/// A board position encoded as `row * N + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell<const N: usize>(usize);

impl<const N: usize> Cell<N> {
    /// Number of cells on the board.
    pub const COUNT: usize = N * N;

    /// The first cell, `[0,0]`.
    pub const FIRST: Cell<N> = Cell(0);

    pub fn new(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Cell(index))
        } else {
            Err(QueensError::InvalidCell {
                cell: index,
                cells: Self::COUNT,
            })
        }
    }

    pub fn from_coords(row: usize, col: usize) -> Result<Self> {
        if row >= N || col >= N {
            return Err(QueensError::InvalidCell {
                cell: row.saturating_mul(N).saturating_add(col),
                cells: Self::COUNT,
            });
        }
        Ok(Cell(row * N + col))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn row(self) -> usize {
        self.0 / N
    }

    pub fn col(self) -> usize {
        self.0 % N
    }

    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }
}

/// One level of the backtracking stack.
///
/// `Exhausted` marks a depth that has run past the last cell and must hand
/// control back to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<const N: usize> {
    Candidate(Cell<N>),
    Exhausted,
}

impl<const N: usize> Frame<N> {
    /// The next candidate in cell order, or `Exhausted` past the last cell.
    pub fn successor(self) -> Frame<N> {
        match self {
            Frame::Candidate(cell) if cell.0 + 1 < Cell::<N>::COUNT => {
                Frame::Candidate(Cell(cell.0 + 1))
            }
            _ => Frame::Exhausted,
        }
    }

    pub fn cell(self) -> Option<Cell<N>> {
        match self {
            Frame::Candidate(cell) => Some(cell),
            Frame::Exhausted => None,
        }
    }
}

impl<const N: usize> From<Cell<N>> for Frame<N> {
    fn from(cell: Cell<N>) -> Self {
        Frame::Candidate(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coordinates() {
        let cell = Cell::<4>::new(6).unwrap();
        assert_eq!(cell.row(), 1);
        assert_eq!(cell.col(), 2);
        assert_eq!(Cell::<4>::from_coords(1, 2).unwrap(), cell);
    }

    #[test]
    fn test_cell_out_of_range() {
        assert!(Cell::<4>::new(15).is_ok());
        assert!(matches!(
            Cell::<4>::new(16),
            Err(QueensError::InvalidCell { cell: 16, cells: 16 })
        ));
        assert!(Cell::<4>::from_coords(0, 4).is_err());
        assert!(Cell::<4>::from_coords(4, 0).is_err());
    }

    #[test]
    fn test_frame_successor() {
        let frame = Frame::from(Cell::<2>::new(2).unwrap());
        assert_eq!(frame.successor(), Frame::Candidate(Cell::new(3).unwrap()));
        assert_eq!(frame.successor().successor(), Frame::Exhausted);
        assert_eq!(Frame::<2>::Exhausted.successor(), Frame::Exhausted);
    }

    #[test]
    fn test_single_cell_board() {
        let frame = Frame::from(Cell::<1>::FIRST);
        assert_eq!(frame.successor(), Frame::Exhausted);
        assert_eq!(frame.cell().map(Cell::coords), Some((0, 0)));
    }
}
