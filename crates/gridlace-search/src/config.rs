/// The largest board size the drivers accept.
///
/// The id space of a size-`n` board has `n^(2n)` elements;
/// `10^20` no longer fits in a `u64`, so sizes stop at 9. Exhaustive scans
/// become impractical well below this bound.
pub const MAX_BOARD_SIZE: u8 = 9;

/// Parameters of one search run, passed explicitly into the drivers.
///
/// There is no process-wide configuration; callers build a value and hand it
/// to [`search_sequential`](crate::search_sequential) or
/// [`search_parallel`](crate::search_parallel).
///
/// # Examples
///
/// ```
/// use gridlace_search::SearchConfig;
///
/// let mut config = SearchConfig::new(3);
/// config.quit_after = Some(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Grid dimension, `1..=MAX_BOARD_SIZE`.
    pub board_size: u8,
    /// Stop after this many distinct solutions; `None` scans exhaustively.
    pub quit_after: Option<u64>,
}

impl SearchConfig {
    /// Creates an exhaustive-scan configuration for the given board size.
    #[must_use]
    pub fn new(board_size: u8) -> Self {
        Self {
            board_size,
            quit_after: None,
        }
    }

    /// Checks the configuration before any scanning starts.
    pub(crate) fn validate(&self) -> Result<(), SearchError> {
        if self.board_size == 0 {
            return Err(SearchError::BoardSizeTooSmall);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(SearchError::BoardSizeTooLarge {
                size: self.board_size,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    /// The default configuration scans the 3×3 board exhaustively.
    fn default() -> Self {
        Self::new(3)
    }
}

/// A configuration error detected before scanning.
///
/// The scan itself is pure computation and cannot fail; everything that can
/// go wrong is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The board size was zero.
    #[display("board size must be at least 1")]
    BoardSizeTooSmall,
    /// The board size's id space does not fit in a `u64`.
    #[display("board size {size} exceeds the supported maximum of 9")]
    BoardSizeTooLarge {
        /// The rejected size.
        size: u8,
    },
    /// The parallel driver was asked to run without workers.
    #[display("worker count must be at least 1")]
    NoWorkers,
}
