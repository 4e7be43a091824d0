//! Text rendering of boards.

use std::io::{self, Write};

use gridlace_core::{Board, Coord};

/// An error from rendering a board.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RenderError {
    /// A cell held more markers than a single hex digit can show.
    #[display("cell {cell} holds {count} markers, too many to render")]
    MarkerOverflow {
        /// The overflowing cell.
        cell: Coord,
        /// How many markers it holds.
        count: usize,
    },
    /// The output stream failed.
    #[display("write failed: {_0}")]
    Io(#[from] io::Error),
}

/// Writes `board` as one bracketed text line per row.
///
/// An empty cell renders as `.`, a single marker as `o`, and 2–15 stacked
/// markers as a hex digit. The squared pair distances are appended to the
/// first row:
///
/// ```text
/// [o..] [5, 2, 1]
/// [o..]
/// [.o.]
/// ```
///
/// # Errors
///
/// Fails with [`RenderError::MarkerOverflow`] when a cell holds 16 or more
/// markers (possible on raw generated boards of large sizes, never on
/// unique-distance solutions), or [`RenderError::Io`] when writing fails.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> Result<(), RenderError> {
    let size = usize::from(board.size());
    let mut cells = vec![0usize; size * size];
    for marker in board.markers() {
        cells[usize::from(marker.y) * size + usize::from(marker.x)] += 1;
    }

    for y in 0..board.size() {
        write!(out, "[")?;
        for x in 0..board.size() {
            let count = cells[usize::from(y) * size + usize::from(x)];
            match count {
                0 => write!(out, ".")?,
                1 => write!(out, "o")?,
                2..=15 => write!(out, "{count:x}")?,
                _ => {
                    return Err(RenderError::MarkerOverflow {
                        cell: Coord::new(x, y),
                        count,
                    });
                }
            }
        }
        write!(out, "]")?;
        if y == 0 {
            write!(out, " {:?}", board.square_distances())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(board: &Board) -> String {
        let mut buf = Vec::new();
        write_board(&mut buf, board).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_board() {
        let board = Board::generate(3, 250);
        assert_eq!(rendered(&board), "[o..] [5, 2, 1]\n[o..]\n[.o.]\n");
    }

    #[test]
    fn test_write_board_stacked_markers() {
        let board = Board::generate(3, 0);
        assert_eq!(rendered(&board), "[3..] [0, 0, 0]\n[...]\n[...]\n");
    }

    #[test]
    fn test_write_board_marker_overflow() {
        // Id 0 stacks all 16 markers of a size-16 board on the origin.
        let board = Board::generate(16, 0);
        let mut buf = Vec::new();
        match write_board(&mut buf, &board) {
            Err(RenderError::MarkerOverflow { cell, count }) => {
                assert_eq!(cell, Coord::new(0, 0));
                assert_eq!(count, 16);
            }
            other => panic!("expected MarkerOverflow, got {other:?}"),
        }
    }
}
