use std::{
    collections::HashSet,
    ops::Range,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, SyncSender},
    },
    thread,
};

use gridlace_core::{Board, board};

use crate::{SearchConfig, SearchError, scan::Scanner};

/// Queued canonical ids per worker before senders block; bounds aggregator
/// lag without starving bursty producers.
const CHANNEL_DEPTH: usize = 16;

/// Scans the id space across `workers` threads and returns the number of
/// distinct solutions.
///
/// The id space is split into `workers` contiguous shards that cover it
/// completely (when the space does not divide evenly, the leading shards
/// take one extra id). Each worker owns its scan state and sends the
/// canonical ids of surviving boards over a bounded channel; the single
/// aggregator on the calling thread deduplicates, re-decodes each first
/// sighting for `on_solution` and counts. Results are identical to
/// [`search_sequential`](crate::search_sequential) for the same
/// configuration.
///
/// Reaching `quit_after` raises a stop flag that every worker polls once
/// per id; all workers are joined before the call returns.
///
/// # Errors
///
/// Returns a [`SearchError`] if the configuration is invalid or `workers`
/// is zero.
///
/// # Examples
///
/// ```
/// use gridlace_search::{SearchConfig, search_parallel};
///
/// let found = search_parallel(&SearchConfig::new(3), 4, |_| {})?;
/// assert_eq!(found, 5);
/// # Ok::<(), gridlace_search::SearchError>(())
/// ```
pub fn search_parallel<F>(
    config: &SearchConfig,
    workers: usize,
    mut on_solution: F,
) -> Result<u64, SearchError>
where
    F: FnMut(&Board),
{
    config.validate()?;
    if workers == 0 {
        return Err(SearchError::NoWorkers);
    }
    let size = config.board_size;
    let total = board::amount(size);
    let stop = AtomicBool::new(false);
    let (sender, receiver) = mpsc::sync_channel(workers * CHANNEL_DEPTH);

    thread::scope(|scope| {
        for (index, range) in shard_ranges(total, workers).enumerate() {
            let sender = sender.clone();
            let stop = &stop;
            scope.spawn(move || scan_shard(index, size, range, &sender, stop));
        }
        // The aggregator's loop ends when the last worker drops its sender.
        drop(sender);

        let mut seen = HashSet::new();
        let mut found = 0u64;
        let mut board = Board::generate(size, 0);
        for canonical_id in receiver {
            if !seen.insert(canonical_id) {
                continue;
            }
            found += 1;
            board.assign(canonical_id);
            on_solution(&board);
            if config.quit_after.is_some_and(|quit| found >= quit) {
                log::debug!("quit_after {found} reached, stopping workers");
                stop.store(true, Ordering::Relaxed);
                break;
            }
        }
        Ok(found)
    })
}

fn scan_shard(
    index: usize,
    size: u8,
    range: Range<u64>,
    results: &SyncSender<u64>,
    stop: &AtomicBool,
) {
    log::debug!(
        "worker {index}: scanning ids {}..{}",
        range.start,
        range.end
    );
    let mut scanner = Scanner::new(size);
    for id in range {
        if stop.load(Ordering::Relaxed) {
            log::debug!("worker {index}: stop requested");
            return;
        }
        if let Some(board) = scanner.canonical(id)
            && results.send(board.id()).is_err()
        {
            // The aggregator hung up after an early quit.
            return;
        }
    }
    log::debug!("worker {index}: shard exhausted");
}

/// Splits `[0, total)` into `workers` contiguous ranges covering every id;
/// the first `total % workers` ranges hold one id more than the rest.
fn shard_ranges(total: u64, workers: usize) -> impl Iterator<Item = Range<u64>> {
    let workers = workers as u64;
    let per = total / workers;
    let remainder = total % workers;
    (0..workers).map(move |index| {
        let start = index * per + index.min(remainder);
        let len = per + u64::from(index < remainder);
        start..start + len
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_sequential;

    #[test]
    fn test_shard_ranges_cover_the_space() {
        for (total, workers) in [(729, 4), (729, 1), (16, 5), (65536, 3), (10, 16)] {
            let ranges = shard_ranges(total, workers).collect::<Vec<_>>();
            assert_eq!(ranges.len(), workers, "{total}/{workers}");
            assert_eq!(ranges[0].start, 0);
            assert_eq!(ranges[ranges.len() - 1].end, total);
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "{total}/{workers}");
            }
            let lengths = ranges
                .iter()
                .map(|range| range.end - range.start)
                .collect::<Vec<_>>();
            let spread = lengths.iter().max().unwrap() - lengths.iter().min().unwrap();
            assert!(spread <= 1, "{total}/{workers}: {lengths:?}");
        }
    }

    #[test]
    fn test_matches_sequential_counts() {
        for size in 1..=3 {
            let sequential = search_sequential(&SearchConfig::new(size), |_| {}).unwrap();
            // Worker counts that do and do not divide amount(size).
            for workers in [1, 2, 4, 7] {
                let parallel = search_parallel(&SearchConfig::new(size), workers, |_| {}).unwrap();
                assert_eq!(parallel, sequential, "size {size}, {workers} workers");
            }
        }
    }

    #[test]
    fn test_matches_sequential_4x4() {
        // 65536 % 3 == 1: exercises the uneven tail shard.
        let found = search_parallel(&SearchConfig::new(4), 3, |_| {}).unwrap();
        assert_eq!(found, 23);
    }

    #[test]
    fn test_quit_after_stops_early() {
        let mut config = SearchConfig::new(4);
        config.quit_after = Some(3);
        let mut emitted = 0;
        let found = search_parallel(&config, 4, |_| emitted += 1).unwrap();
        assert_eq!(found, 3);
        assert_eq!(emitted, 3);
    }

    #[test]
    fn test_rejects_zero_workers() {
        let result = search_parallel(&SearchConfig::new(3), 0, |_| {});
        assert_eq!(result, Err(SearchError::NoWorkers));
    }

    #[test]
    fn test_rejects_zero_board_size() {
        let result = search_parallel(&SearchConfig::new(0), 4, |_| {});
        assert_eq!(result, Err(SearchError::BoardSizeTooSmall));
    }

    #[test]
    fn test_emits_canonical_boards() {
        let mut ids = HashSet::new();
        search_parallel(&SearchConfig::new(3), 2, |board| {
            let mut renormalized = board.clone();
            renormalized.normalize();
            assert_eq!(&renormalized, board);
            assert!(ids.insert(board.id()), "duplicate {board}");
        })
        .unwrap();
        assert_eq!(ids.len(), 5);
    }
}
