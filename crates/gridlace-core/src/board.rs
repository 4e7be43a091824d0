//! The board model: id ↔ marker codec, pair distances and text parsing.

use std::{fmt, str::FromStr};

use crate::Coord;

/// Returns the number of distinct boards of the given size.
///
/// Every board is addressable by an id in `[0, amount(size))`, so this is
/// `size^(2·size)`: two radix-`size` digits per marker, `size` markers.
///
/// The count grows extremely fast (`amount(5)` is already ~9.77 million) and
/// overflows `u64` above size 9; exhaustive scans stop being feasible long
/// before that.
///
/// # Examples
///
/// ```
/// use gridlace_core::board;
///
/// assert_eq!(board::amount(3), 729);
/// assert_eq!(board::amount(4), 65536);
/// ```
#[must_use]
pub fn amount(size: u8) -> u64 {
    u64::from(size).pow(2 * u32::from(size))
}

/// Returns the maximal possible squared distance between two markers on a
/// board of the given size: `2·(size-1)²`.
///
/// This bounds every value produced by [`Board::square_distances`] and sizes
/// the presence table of [`DistanceSet`](crate::DistanceSet).
#[must_use]
pub fn max_distance(size: u8) -> usize {
    let edge = usize::from(size).saturating_sub(1);
    2 * edge * edge
}

/// A configuration of markers on a square grid.
///
/// A board of size `n` is `n` markers on an `n`×`n` grid, identified by a
/// single `u64` id in radix-`n` positional encoding. [`Board::generate`]
/// decodes an id into markers; every mutating operation re-encodes the
/// current markers back into the stored id, so `generate(size, board.id())`
/// always reproduces the board.
///
/// Marker order is significant for the id (decoding never sorts), but not
/// for a board's identity under canonicalization: [`Board::normalize`]
/// collapses marker order together with rotations and mirrorings.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Coord};
///
/// let board = Board::generate(3, 250);
/// assert_eq!(
///     board.markers(),
///     [Coord::new(1, 2), Coord::new(0, 0), Coord::new(0, 1)]
/// );
/// assert_eq!(board.id(), 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) markers: Vec<Coord>,
    pub(crate) size: u8,
    pub(crate) id: u64,
}

impl Board {
    /// Generates the board of the given size identified by `id`.
    ///
    /// A given id always produces the same board. Ids at or above
    /// [`amount(size)`](amount) wrap through the same modular arithmetic
    /// rather than failing; the meaningful id space is exactly
    /// `[0, amount(size))`.
    #[must_use]
    pub fn generate(size: u8, id: u64) -> Self {
        let mut markers = Vec::with_capacity(usize::from(size));
        decode_into(size, id, &mut markers);
        Self { markers, size, id }
    }

    /// Re-decodes `id` into this board, reusing the marker allocation.
    ///
    /// Equivalent to `*self = Board::generate(self.size(), id)` without the
    /// per-call allocation; scan loops call this once per candidate.
    pub fn assign(&mut self, id: u64) {
        decode_into(self.size, id, &mut self.markers);
        self.id = id;
    }

    /// Returns the markers in encoding order.
    #[must_use]
    pub fn markers(&self) -> &[Coord] {
        &self.markers
    }

    /// Returns the board's grid dimension.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the id encoding the current markers.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the maximal squared distance possible on this board.
    ///
    /// See [`max_distance`].
    #[must_use]
    pub fn max_distance(&self) -> usize {
        max_distance(self.size)
    }

    /// Returns the squared distances between all unordered marker pairs.
    ///
    /// Pairs are visited with the outer index ascending and the inner index
    /// ascending, yielding `n·(n-1)/2` values for `n` markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Board;
    ///
    /// // Markers on the main diagonal: (0,0), (1,1), (2,2).
    /// let board: Board = "
    ///     o..
    ///     .o.
    ///     ..o
    /// "
    /// .parse()?;
    /// let mut distances = board.square_distances();
    /// distances.sort_unstable();
    /// assert_eq!(distances, [2, 2, 8]);
    /// # Ok::<(), gridlace_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn square_distances(&self) -> Vec<usize> {
        let n = self.markers.len();
        let mut result = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        self.square_distances_into(&mut result);
        result
    }

    /// Writes the squared pair distances into `out`, clearing it first.
    ///
    /// Allocation-free once `out` has grown to the pair count; the search
    /// drivers reuse one buffer across every candidate.
    pub fn square_distances_into(&self, out: &mut Vec<usize>) {
        out.clear();
        for (i, a) in self.markers.iter().enumerate() {
            for b in &self.markers[i + 1..] {
                out.push(a.square_distance(*b));
            }
        }
    }

    /// Re-encodes the current marker order into the stored id.
    pub(crate) fn update_id(&mut self) {
        let size = u64::from(self.size);
        let mut id = 0u64;
        for marker in self.markers.iter().rev() {
            id = id * size + u64::from(marker.y);
            id = id * size + u64::from(marker.x);
        }
        self.id = id;
    }
}

/// Decodes `id` into `out`: per marker, x then y, each one radix-`size`
/// digit, extraction order defining marker index order.
fn decode_into(size: u8, id: u64, out: &mut Vec<Coord>) {
    out.clear();
    let radix = u64::from(size);
    let mut rest = id;
    #[expect(clippy::cast_possible_truncation)]
    for _ in 0..size {
        let x = (rest % radix) as u8;
        rest /= radix;
        let y = (rest % radix) as u8;
        rest /= radix;
        out.push(Coord::new(x, y));
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board {}x{} #{} [", self.size, self.size, self.id)?;
        for (i, marker) in self.markers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{marker}")?;
        }
        f.write_str("]")
    }
}

/// An error from parsing a [`Board`] out of its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input contained no rows.
    #[display("empty board")]
    Empty,
    /// A cell held a character other than `.`, `o` or a hex digit.
    #[display("invalid cell character {ch:?}")]
    InvalidCell {
        /// The offending character.
        ch: char,
    },
    /// The rows did not form a square grid.
    #[display("board is not square: {rows} row(s), {columns} column(s)")]
    NotSquare {
        /// Number of rows parsed.
        rows: usize,
        /// Width of the first offending row.
        columns: usize,
    },
    /// More rows than a `u8` board size can hold.
    #[display("board size {rows} exceeds the supported maximum of 255")]
    TooLarge {
        /// Number of rows parsed.
        rows: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the ascii grid form the renderer emits: one token per row,
    /// `.` for an empty cell, `o` for a single marker, a hex digit for that
    /// many stacked markers.
    ///
    /// The marker count of the parsed board is whatever the cells sum to;
    /// fixtures may stack more markers than the board size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.split_whitespace().collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }
        let size = u8::try_from(rows.len())
            .map_err(|_| ParseBoardError::TooLarge { rows: rows.len() })?;

        let mut markers = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != rows.len() {
                return Err(ParseBoardError::NotSquare {
                    rows: rows.len(),
                    columns: width,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let count = match ch {
                    '.' => 0,
                    'o' => 1,
                    _ => ch
                        .to_digit(16)
                        .ok_or(ParseBoardError::InvalidCell { ch })?,
                };
                // x and y are below rows.len(), which fits in u8.
                #[expect(clippy::cast_possible_truncation)]
                let coord = Coord::new(x as u8, y as u8);
                for _ in 0..count {
                    markers.push(coord);
                }
            }
        }

        let mut board = Self {
            markers,
            size,
            id: 0,
        };
        board.update_id();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_amount() {
        let cases = [(1, 1), (2, 16), (3, 729), (4, 65536)];
        for (size, want) in cases {
            assert_eq!(amount(size), want, "amount({size})");
        }
    }

    #[test]
    fn test_max_distance() {
        assert_eq!(max_distance(0), 0);
        assert_eq!(max_distance(1), 0);
        assert_eq!(max_distance(3), 8);
        assert_eq!(max_distance(4), 18);
    }

    #[test]
    fn test_generate_id_zero_stacks_origin() {
        let board = Board::generate(3, 0);
        let want: Board = "
            3..
            ...
            ...
        "
        .parse()
        .unwrap();
        assert_eq!(sorted_markers(&board), sorted_markers(&want));
    }

    #[test]
    fn test_generate_250() {
        let board = Board::generate(3, 250);
        let want: Board = "
            o..
            o..
            .o.
        "
        .parse()
        .unwrap();
        assert_eq!(sorted_markers(&board), sorted_markers(&want));
        assert_eq!(
            board.markers(),
            [Coord::new(1, 2), Coord::new(0, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn test_assign_matches_generate() {
        let mut board = Board::generate(4, 0);
        for id in [0, 1, 17, 9000, amount(4) - 1] {
            board.assign(id);
            assert_eq!(board, Board::generate(4, id), "id {id}");
        }
    }

    #[test]
    fn test_square_distances() {
        let cases = [
            (
                "3x3 diag",
                "
                o..
                .o.
                ..o
                ",
                vec![2, 2, 8],
            ),
            (
                "[o  ][ oo][   ]",
                "
                o..
                .oo
                ...
                ",
                vec![1, 2, 5],
            ),
        ];
        for (name, input, want) in cases {
            let board: Board = input.parse().unwrap();
            let mut got = board.square_distances();
            got.sort_unstable();
            assert_eq!(got, want, "{name}");
        }
    }

    #[test]
    fn test_square_distances_empty() {
        let board = Board::generate(0, 0);
        assert!(board.square_distances().is_empty());
    }

    #[test]
    fn test_square_distances_into_reuses_buffer() {
        let board = Board::generate(3, 250);
        let mut buf = vec![99; 10];
        board.square_distances_into(&mut buf);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf, board.square_distances());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::Empty));
        assert_eq!(
            "o. .o .o".parse::<Board>(),
            Err(ParseBoardError::NotSquare {
                rows: 3,
                columns: 2
            })
        );
        assert_eq!(
            "x. ..".parse::<Board>(),
            Err(ParseBoardError::InvalidCell { ch: 'x' })
        );
    }

    #[test]
    fn test_parse_roundtrips_generated_id() {
        // A generated board with one marker per cell position parses back
        // from its sorted fixture to the same marker multiset.
        let board = Board::generate(3, 250);
        let fixture: Board = "
            o..
            o..
            .o.
        "
        .parse()
        .unwrap();
        assert_eq!(sorted_markers(&board), sorted_markers(&fixture));
    }

    fn sorted_markers(board: &Board) -> Vec<Coord> {
        let mut markers = board.markers().to_vec();
        markers.sort_unstable();
        markers
    }

    proptest! {
        #[test]
        fn prop_roundtrip_id(size in 1u8..=5, id in 0u64..1024) {
            let id = id % amount(size);
            let mut board = Board::generate(size, id);
            prop_assert_eq!(board.id(), id);
            board.update_id();
            prop_assert_eq!(board.id(), id);
        }

        #[test]
        fn prop_distances_bounded(id in 0u64..9000) {
            let board = Board::generate(4, id);
            for d in board.square_distances() {
                prop_assert!(d <= board.max_distance(), "{} > {}", d, board.max_distance());
            }
        }
    }
}
