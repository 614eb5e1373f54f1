//! Conflict check for the newest queen of a partial placement.
//!
//! The N x N attack grid is cleared and rebuilt from scratch on every call by
//! replaying the whole placement, so each check costs O(N^2) for the reset
//! plus O(len * N) marking. Incremental row/column/diagonal masks would be the
//! next step for large boards.

use crate::board::Cell;

/// Returns false as soon as a queen lands on a cell attacked by an earlier one.
pub fn is_feasible<const N: usize>(queens: impl IntoIterator<Item = Cell<N>>) -> bool {
    let mut attacked = [[false; N]; N];

    for queen in queens {
        let (r, c) = queen.coords();
        if attacked[r][c] {
            return false;
        }
        mark_attacks(&mut attacked, r, c);
    }

    true
}

fn mark_attacks<const N: usize>(attacked: &mut [[bool; N]; N], r: usize, c: usize) {
    for row in attacked.iter_mut() {
        row[c] = true;
    }
    attacked[r] = [true; N];

    // Diagonals, walking outward from the queen in all four directions.
    for (y, x) in (r + 1..N).zip(c + 1..N) {
        attacked[y][x] = true;
    }
    for (y, x) in (r + 1..N).zip((0..c).rev()) {
        attacked[y][x] = true;
    }
    for (y, x) in (0..r).rev().zip(c + 1..N) {
        attacked[y][x] = true;
    }
    for (y, x) in (0..r).rev().zip((0..c).rev()) {
        attacked[y][x] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queens<const N: usize>(coords: &[(usize, usize)]) -> Vec<Cell<N>> {
        coords
            .iter()
            .map(|&(r, c)| Cell::from_coords(r, c).unwrap())
            .collect()
    }

    #[test]
    fn test_single_queen_always_feasible() {
        for index in 0..64 {
            assert!(is_feasible([Cell::<8>::new(index).unwrap()]));
        }
    }

    #[test]
    fn test_empty_placement_feasible() {
        assert!(is_feasible(Vec::<Cell<4>>::new()));
    }

    #[test]
    fn test_same_row_conflict() {
        assert!(!is_feasible(queens::<8>(&[(2, 1), (2, 6)])));
    }

    #[test]
    fn test_same_column_conflict() {
        assert!(!is_feasible(queens::<8>(&[(0, 4), (7, 4)])));
    }

    #[test]
    fn test_diagonal_conflicts() {
        assert!(!is_feasible(queens::<8>(&[(1, 1), (4, 4)])));
        assert!(!is_feasible(queens::<8>(&[(4, 4), (1, 1)])));
        assert!(!is_feasible(queens::<8>(&[(0, 7), (7, 0)])));
        assert!(!is_feasible(queens::<8>(&[(5, 2), (3, 4)])));
    }

    #[test]
    fn test_same_cell_conflict() {
        assert!(!is_feasible(queens::<4>(&[(1, 2), (1, 2)])));
    }

    #[test]
    fn test_non_attacking_pair() {
        assert!(is_feasible(queens::<8>(&[(0, 0), (1, 2)])));
        assert!(is_feasible(queens::<8>(&[(3, 3), (5, 4)])));
    }

    #[test]
    fn test_classic_four_queens() {
        assert!(is_feasible(queens::<4>(&[(0, 1), (1, 3), (2, 0), (3, 2)])));
        assert!(is_feasible(queens::<4>(&[(0, 2), (1, 0), (2, 3), (3, 1)])));
        assert!(!is_feasible(queens::<4>(&[(0, 1), (1, 3), (2, 0), (3, 1)])));
    }

    #[test]
    fn test_single_cell_board() {
        assert!(is_feasible(queens::<1>(&[(0, 0)])));
    }
}
