use std::fmt;

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 8;

/// The 16 squares a princess attacks, as (row, col) offsets: the eight
/// king-move unit vectors plus the same eight vectors doubled. The table is
/// symmetric under negation, so a single directed check covers both pieces
/// of a pair.
pub const ATTACK_OFFSETS: [(i32, i32); 16] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (-2, -2),
    (-2, 0),
    (-2, 2),
    (0, -2),
    (0, 2),
    (2, -2),
    (2, 0),
    (2, 2),
];

/// An N x N occupancy grid. `true` marks a placed princess.
///
/// The side length is a const parameter so the same semantics can be
/// exercised on reduced boards in tests; the program itself only ever uses
/// `Board<BOARD_SIZE>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board<const N: usize> {
    cells: [[bool; N]; N],
}

impl<const N: usize> Board<N> {
    #[must_use]
    pub fn empty() -> Self {
        Self { cells: [[false; N]; N] }
    }

    #[must_use]
    pub fn from_positions(positions: &[(usize, usize)]) -> Self {
        let mut board = Self::empty();
        for &(row, col) in positions {
            board.place(row, col);
        }
        board
    }

    pub fn place(&mut self, row: usize, col: usize) {
        self.cells[row][col] = true;
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = false;
    }

    #[must_use]
    pub fn occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Number of placed pieces.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.cells.iter().flatten().filter(|&&occupied| occupied).count() as u32
    }

    /// Occupied squares in row-major order.
    #[must_use]
    pub fn positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for row in 0..N {
            for col in 0..N {
                if self.cells[row][col] {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// The square reached from (row, col) by `offset`, or `None` if it
    /// falls off the board.
    #[must_use]
    pub fn offset_within(row: usize, col: usize, offset: (i32, i32)) -> Option<(usize, usize)> {
        let row = row as i32 + offset.0;
        let col = col as i32 + offset.1;
        if row >= 0 && row < N as i32 && col >= 0 && col < N as i32 {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// True if no two placed pieces lie within the attack pattern of each
    /// other. The offset table is negation-symmetric, so checking each
    /// unordered pair once is enough.
    #[must_use]
    pub fn is_non_attacking(&self) -> bool {
        let pieces = self.positions();
        for (i, &(r1, c1)) in pieces.iter().enumerate() {
            for &(r2, c2) in &pieces[i + 1..] {
                let delta = (r2 as i32 - r1 as i32, c2 as i32 - c1 as i32);
                if ATTACK_OFFSETS.contains(&delta) {
                    return false;
                }
            }
        }
        true
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    /// One line per row, each square rendered as the two-character cell
    /// `" P"` (princess) or `" ."` (empty), row 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &occupied in row {
                f.write_str(if occupied { " P" } else { " ." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_table_is_negation_symmetric_and_nonzero() {
        for &(dr, dc) in &ATTACK_OFFSETS {
            assert_ne!((dr, dc), (0, 0));
            assert!(
                ATTACK_OFFSETS.contains(&(-dr, -dc)),
                "missing negation of ({dr}, {dc})"
            );
        }
    }

    #[test]
    fn offset_within_respects_bounds() {
        assert_eq!(Board::<8>::offset_within(0, 0, (-1, 0)), None);
        assert_eq!(Board::<8>::offset_within(0, 0, (0, -2)), None);
        assert_eq!(Board::<8>::offset_within(7, 7, (2, 2)), None);
        assert_eq!(Board::<8>::offset_within(3, 3, (2, -2)), Some((5, 1)));
        assert_eq!(Board::<8>::offset_within(0, 0, (1, 1)), Some((1, 1)));
        // On a 1x1 board no attack offset stays in bounds.
        for offset in ATTACK_OFFSETS {
            assert_eq!(Board::<1>::offset_within(0, 0, offset), None);
        }
    }

    #[test]
    fn knight_offsets_are_not_attacks() {
        let board = Board::<8>::from_positions(&[(0, 0), (1, 2)]);
        assert!(board.is_non_attacking());
        let board = Board::<8>::from_positions(&[(3, 3), (5, 4)]);
        assert!(board.is_non_attacking());
    }

    #[test]
    fn king_ring_and_doubled_ring_are_attacks() {
        let adjacent = Board::<8>::from_positions(&[(3, 3), (4, 4)]);
        assert!(!adjacent.is_non_attacking());
        let doubled = Board::<8>::from_positions(&[(3, 3), (3, 5)]);
        assert!(!doubled.is_non_attacking());
        // Reverse order of the pair must fail the same way.
        let doubled_rev = Board::<8>::from_positions(&[(3, 5), (3, 3)]);
        assert!(!doubled_rev.is_non_attacking());
    }

    #[test]
    fn place_clear_count_roundtrip() {
        let mut board = Board::<4>::empty();
        assert_eq!(board.count(), 0);
        board.place(1, 2);
        board.place(3, 0);
        assert_eq!(board.count(), 2);
        assert!(board.occupied(1, 2));
        assert_eq!(board.positions(), vec![(1, 2), (3, 0)]);
        board.clear(1, 2);
        assert_eq!(board.count(), 1);
        assert!(!board.occupied(1, 2));
    }

    #[test]
    fn display_renders_two_char_cells() {
        let board = Board::<3>::from_positions(&[(1, 2), (2, 0)]);
        assert_eq!(board.to_string(), " . . .\n . . P\n P . .\n");
    }
}
