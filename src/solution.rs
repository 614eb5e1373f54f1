//! Textual form of a placement: `[row,col] [row,col] ...`

#![allow(dead_code)]

use std::fmt;
use std::str::FromStr;

use crate::board::Cell;
use crate::error::{QueensError, Result};

/// A formatted placement handed from a search worker to the printer.
///
/// Ownership moves into the queue on enqueue; the printer drops it once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution(String);

impl Solution {
    /// Format an ordered placement.
    pub fn format<const N: usize>(cells: &[Cell<N>]) -> Self {
        let text = cells
            .iter()
            .map(|cell| format!("[{},{}]", cell.row(), cell.col()))
            .collect::<Vec<_>>()
            .join(" ");
        Solution(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the `(row, col)` pairs in placement order.
    pub fn coords(&self) -> Result<Vec<(usize, usize)>> {
        parse_coords(&self.0)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Solution {
    type Err = QueensError;

    fn from_str(s: &str) -> Result<Self> {
        let coords = parse_coords(s)?;
        let text = coords
            .iter()
            .map(|(r, c)| format!("[{},{}]", r, c))
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Solution(text))
    }
}

/// Parse `[r,c]` pairs separated by whitespace.
pub fn parse_coords(input: &str) -> Result<Vec<(usize, usize)>> {
    input
        .split_whitespace()
        .map(|pair| {
            let inner = pair
                .strip_prefix('[')
                .and_then(|p| p.strip_suffix(']'))
                .ok_or_else(|| QueensError::parse(input, format!("'{}' is not [row,col]", pair)))?;
            let (row, col) = inner
                .split_once(',')
                .ok_or_else(|| QueensError::parse(input, format!("'{}' has no comma", pair)))?;
            let row = row
                .trim()
                .parse::<usize>()
                .map_err(|_| QueensError::parse(input, format!("invalid row '{}'", row)))?;
            let col = col
                .trim()
                .parse::<usize>()
                .map_err(|_| QueensError::parse(input, format!("invalid column '{}'", col)))?;
            Ok((row, col))
        })
        .collect()
}

/// Parse a placement into cells of an `N`-sided board.
pub fn parse_cells<const N: usize>(input: &str) -> Result<Vec<Cell<N>>> {
    parse_coords(input)?
        .into_iter()
        .map(|(row, col)| Cell::from_coords(row, col))
        .collect()
}
