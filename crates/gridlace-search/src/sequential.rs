use std::collections::HashSet;

use gridlace_core::{Board, board};

use crate::{SearchConfig, SearchError, scan::Scanner};

/// Scans the whole id space on the calling thread and returns the number of
/// distinct solutions.
///
/// Every id in `[0, amount(board_size))` is decoded, filtered through the
/// uniqueness test and, if it survives, normalized. The first board of each
/// symmetry class is passed to `on_solution`; later members are dropped by
/// the canonical-id dedup. With `quit_after` set, the scan returns as soon
/// as that many distinct solutions have been found.
///
/// # Errors
///
/// Returns a [`SearchError`] if the configuration is invalid; the scan
/// itself cannot fail.
///
/// # Examples
///
/// ```
/// use gridlace_search::{SearchConfig, search_sequential};
///
/// let found = search_sequential(&SearchConfig::new(3), |board| {
///     println!("{board}");
/// })?;
/// assert_eq!(found, 5);
/// # Ok::<(), gridlace_search::SearchError>(())
/// ```
pub fn search_sequential<F>(config: &SearchConfig, mut on_solution: F) -> Result<u64, SearchError>
where
    F: FnMut(&Board),
{
    config.validate()?;
    let size = config.board_size;
    let mut scanner = Scanner::new(size);
    let mut seen = HashSet::new();
    let mut found = 0u64;

    for id in 0..board::amount(size) {
        let Some(board) = scanner.canonical(id) else {
            continue;
        };
        if !seen.insert(board.id()) {
            continue;
        }
        found += 1;
        on_solution(board);
        if config.quit_after.is_some_and(|quit| found >= quit) {
            break;
        }
    }
    Ok(found)
}
