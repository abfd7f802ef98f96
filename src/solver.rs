use crate::board::{Board, ATTACK_OFFSETS};
use log::debug;
use std::io::{self, Write};

/// Outcome of one exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<const N: usize> {
    /// Largest number of mutually non-attacking princesses found.
    pub max_count: u32,
    /// One placement achieving `max_count`; `Some` iff capture was requested.
    pub best_board: Option<Board<N>>,
    /// Recursion nodes visited.
    pub nodes: u64,
}

/// Depth-first include/exclude enumeration over all N*N squares.
///
/// Owns every piece of search state: the per-square attack counts (how many
/// placed pieces attack each square; zero means safe), the occupancy grid of
/// the current path, and the best placement seen so far. All mutations are
/// paired with their inverse inside a single recursive call, so the state a
/// caller observes is untouched by the subtree below it.
pub struct Searcher<const N: usize> {
    attacked: [[u8; N]; N],
    current: Board<N>,
    best: Board<N>,
    best_count: u32,
    capture_board: bool,
    nodes: u64,
}

impl<const N: usize> Searcher<N> {
    /// `capture_board` selects whether an example placement is snapshotted
    /// alongside the maximum count.
    #[must_use]
    pub fn new(capture_board: bool) -> Self {
        Self {
            attacked: [[0; N]; N],
            current: Board::empty(),
            best: Board::empty(),
            best_count: 0,
            capture_board,
            nodes: 0,
        }
    }

    /// Runs the full enumeration. Deterministic and infallible: the space is
    /// finite and the recursion depth is bounded by N*N + 1.
    pub fn search(&mut self) -> SearchResult<N> {
        self.solve(0, 0);
        debug!("search finished: best {} over {} nodes", self.best_count, self.nodes);
        self.result()
    }

    fn result(&self) -> SearchResult<N> {
        SearchResult {
            max_count: self.best_count,
            best_board: self.capture_board.then_some(self.best),
            nodes: self.nodes,
        }
    }

    fn solve(&mut self, index: usize, placed: u32) {
        self.nodes += 1;

        if index == N * N {
            // Strict improvement only: on ties the earlier leaf is kept, so
            // the traversal order below decides which optimum survives.
            if placed > self.best_count {
                self.best_count = placed;
                if self.capture_board {
                    self.best = self.current;
                }
            }
            return;
        }

        let row = index / N;
        let col = index % N;

        // Skip this square, unconditionally.
        self.solve(index + 1, placed);

        // Place here, only while no already-placed piece attacks the square.
        if self.attacked[row][col] == 0 {
            self.current.place(row, col);
            self.shift_attacks(row, col, 1);

            self.solve(index + 1, placed + 1);

            self.shift_attacks(row, col, -1);
            self.current.clear(row, col);
        }
    }

    // The paired +1/-1 update over all in-bounds attack targets of (row, col).
    fn shift_attacks(&mut self, row: usize, col: usize, delta: i8) {
        for offset in ATTACK_OFFSETS {
            if let Some((r, c)) = Board::<N>::offset_within(row, col, offset) {
                self.attacked[r][c] = self.attacked[r][c].wrapping_add_signed(delta);
            }
        }
    }
}

/// Splits the decision for square 0 across two rayon workers, each running an
/// independent [`Searcher`], and merges with "keep the larger". The
/// sequential order explores the skip side first and records only on strict
/// improvement, so ties go to the skip side; the merged result is identical
/// to [`Searcher::search`].
#[must_use]
pub fn search_parallel<const N: usize>(capture_board: bool) -> SearchResult<N> {
    let (skip, place) = rayon::join(
        || {
            let mut searcher = Searcher::<N>::new(capture_board);
            searcher.solve(1, 0);
            searcher.result()
        },
        || {
            let mut searcher = Searcher::<N>::new(capture_board);
            searcher.current.place(0, 0);
            searcher.shift_attacks(0, 0, 1);
            searcher.solve(1, 1);
            searcher.result()
        },
    );

    let nodes = skip.nodes + place.nodes + 1;
    let mut merged = if place.max_count > skip.max_count { place } else { skip };
    merged.nodes = nodes;
    merged
}

/// Writes the program output: the count line, then, when an example placement
/// was captured, the `One possible solution:` header and the rendered grid.
pub fn write_report<W: Write, const N: usize>(w: &mut W, result: &SearchResult<N>) -> io::Result<()> {
    writeln!(w, "Maximum number of non-attacking princesses: {}", result.max_count)?;
    if let Some(board) = &result.best_board {
        writeln!(w, "One possible solution:")?;
        write!(w, "{board}")?;
    }
    Ok(())
}
