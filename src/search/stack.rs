//! Explicit backtracking stack used in place of recursion.

use crate::board::{Cell, Frame};
use crate::error::{QueensError, Result};

/// Partial assignment of queens, one frame per depth.
///
/// Only the top frame can be [`Frame::Exhausted`]; every frame below it is a
/// placed queen.
#[derive(Debug, Clone)]
pub struct PlacementStack<const N: usize> {
    frames: Vec<Frame<N>>,
}

impl<const N: usize> PlacementStack<N> {
    /// Room for one frame per cell plus the exhausted marker.
    pub const CAPACITY: usize = N * N + 1;

    /// Stack holding the canonical root seed `[0]`.
    pub fn root() -> Self {
        let mut stack = Self::empty();
        stack.push(Frame::Candidate(Cell::FIRST));
        stack
    }

    /// Stack initialised from a copy of a caller-owned prefix.
    pub fn from_seed(prefix: &[Cell<N>]) -> Result<Self> {
        if prefix.is_empty() {
            return Err(QueensError::EmptySeed);
        }
        // One free frame is needed to advance or descend.
        if prefix.len() >= Self::CAPACITY {
            return Err(QueensError::SeedTooLong {
                len: prefix.len(),
                capacity: Self::CAPACITY,
            });
        }
        let mut stack = Self::empty();
        stack.frames.extend(prefix.iter().copied().map(Frame::Candidate));
        Ok(stack)
    }

    fn empty() -> Self {
        Self {
            frames: Vec::with_capacity(Self::CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn top(&self) -> Option<Frame<N>> {
        self.frames.last().copied()
    }

    pub fn push(&mut self, frame: Frame<N>) {
        debug_assert!(self.frames.len() < Self::CAPACITY, "placement stack overflow");
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame<N>> {
        self.frames.pop()
    }

    /// Replace the top frame with its successor.
    pub fn advance(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.push(frame.successor());
        }
    }

    /// Placed queens, bottom to top.
    pub fn cells(&self) -> impl Iterator<Item = Cell<N>> + '_ {
        self.frames.iter().filter_map(|frame| frame.cell())
    }

    pub fn placement(&self) -> Vec<Cell<N>> {
        self.cells().collect()
    }
}
