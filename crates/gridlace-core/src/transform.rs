//! Board transforms: mirroring, rotation and dihedral canonicalization.

use crate::Board;

/// The axis selector for [`Board::mirror`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Reflect x coordinates (flip left/right).
    Columns,
    /// Reflect y coordinates (flip top/bottom).
    Rows,
}

impl Board {
    /// Mirrors the board in place along the given axis and recomputes the id.
    pub fn mirror(&mut self, axis: Axis) {
        self.mirror_markers(axis);
        self.update_id();
    }

    /// Rotates the board 90° in place and recomputes the id.
    ///
    /// Every marker moves through `(x, y) -> (size-1-y, x)`. Four rotations
    /// restore the original marker sequence exactly.
    pub fn rotate(&mut self) {
        self.rotate_markers();
        self.update_id();
    }

    /// Brings the board to the canonical orientation of its symmetry class.
    ///
    /// The canonical form is the minimal sort-then-encode key over all 8
    /// elements of the dihedral group (4 rotations, with and without a
    /// mirror). Any two boards related by rotation, mirroring or marker
    /// reordering normalize to an identical marker sequence and id, which is
    /// what the search drivers key their deduplication on.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::{Axis, Board};
    ///
    /// let mut a: Board = "
    ///     oo.
    ///     o..
    ///     ...
    /// "
    /// .parse()?;
    /// let mut b = a.clone();
    /// b.rotate();
    /// b.mirror(Axis::Columns);
    ///
    /// a.normalize();
    /// b.normalize();
    /// assert_eq!(a, b);
    /// # Ok::<(), gridlace_core::ParseBoardError>(())
    /// ```
    pub fn normalize(&mut self) {
        let mut min_id = self.sorted_key();
        for step in 0..8 {
            if step == 4 {
                self.mirror_markers(Axis::Rows);
            }
            self.rotate_markers();
            min_id = min_id.min(self.sorted_key());
        }
        self.assign(min_id);
    }

    fn mirror_markers(&mut self, axis: Axis) {
        let edge = self.size.saturating_sub(1);
        for marker in &mut self.markers {
            match axis {
                Axis::Columns => marker.x = edge - marker.x,
                Axis::Rows => marker.y = edge - marker.y,
            }
        }
    }

    fn rotate_markers(&mut self) {
        let edge = self.size.saturating_sub(1);
        for marker in &mut self.markers {
            let y = marker.y;
            marker.y = marker.x;
            marker.x = edge - y;
        }
    }

    /// Encodes the current orientation with its markers sorted, producing
    /// the order-independent comparison key `normalize` minimizes over.
    fn sorted_key(&mut self) -> u64 {
        self.markers.sort_unstable();
        self.update_id();
        self.id
    }
}
