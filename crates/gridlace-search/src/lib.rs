//! Exhaustive search drivers for unique-distance boards.
//!
//! Both drivers walk the complete id space of a board size, keep the boards
//! whose pairwise squared distances are all distinct, and report one
//! representative per symmetry class by deduplicating on the canonical id
//! computed by [`Board::normalize`](gridlace_core::Board::normalize):
//!
//! - [`search_sequential`] scans on the calling thread.
//! - [`search_parallel`] shards the id space across worker threads with a
//!   bounded fan-in channel and a single aggregating consumer; its counts
//!   are identical to the sequential driver's.
//!
//! Solutions are handed to a caller-supplied callback; the drivers perform
//! no I/O themselves.
//!
//! # Examples
//!
//! ```
//! use gridlace_search::{SearchConfig, search_sequential};
//!
//! let mut config = SearchConfig::new(3);
//! config.quit_after = Some(1);
//! let found = search_sequential(&config, |board| {
//!     println!("first solution: {board}");
//! })?;
//! assert_eq!(found, 1);
//! # Ok::<(), gridlace_search::SearchError>(())
//! ```

pub use self::{
    config::{MAX_BOARD_SIZE, SearchConfig, SearchError},
    parallel::search_parallel,
    sequential::search_sequential,
};

mod config;
mod parallel;
mod scan;
mod sequential;
