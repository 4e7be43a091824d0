use gridlace_core::{Board, DistanceSet, board};

/// Per-worker scan state: one board, one distance buffer and one presence
/// table, all reused across every candidate id so the inner loop never
/// touches the allocator.
#[derive(Debug)]
pub(crate) struct Scanner {
    board: Board,
    distances: Vec<usize>,
    unique: DistanceSet,
}

impl Scanner {
    pub(crate) fn new(size: u8) -> Self {
        let pairs = usize::from(size) * usize::from(size.saturating_sub(1)) / 2;
        Self {
            board: Board::generate(size, 0),
            distances: Vec::with_capacity(pairs),
            unique: DistanceSet::new(board::max_distance(size)),
        }
    }

    /// Decodes `id` and, if its pair distances are all distinct, returns the
    /// normalized board.
    pub(crate) fn canonical(&mut self, id: u64) -> Option<&Board> {
        self.board.assign(id);
        self.board.square_distances_into(&mut self.distances);
        if !self.unique.all_unique(&self.distances) {
            return None;
        }
        self.board.normalize();
        Some(&self.board)
    }
}
