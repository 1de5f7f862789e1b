/// Quote filtering
///
/// Game filter, then a plain case-insensitive search. No diacritic folding and
/// no sorting: quotes stay in catalog order.

use crate::catalog::QuoteRecord;
use crate::core::outcome::FilterOutcome;
use crate::core::view_state::QuoteViewState;
use tracing::trace;

/// Shown when no quote survives the filters
pub const EMPTY_QUOTES_MESSAGE: &str = "No quotes match your filters.";

/// Filter `records` for the given view state, preserving their order
pub fn filter_quotes<'a>(
    records: &'a [QuoteRecord],
    state: &QuoteViewState,
) -> FilterOutcome<'a, QuoteRecord> {
    // Only the emptiness check trims; the query itself is matched as typed
    let query = (!state.search_query.trim().is_empty()).then(|| state.search_query.to_lowercase());

    let result: Vec<&QuoteRecord> = records
        .iter()
        .filter(|quote| state.selected_games.is_empty() || state.selected_games.contains(&quote.game))
        .filter(|quote| query.as_deref().map_or(true, |q| matches_query(quote, q)))
        .collect();

    trace!(total = records.len(), visible = result.len(), "Filtered quotes");

    FilterOutcome::new(result, "quote", EMPTY_QUOTES_MESSAGE)
}

// `query` must already be lower-cased
fn matches_query(quote: &QuoteRecord, query: &str) -> bool {
    quote.quote.to_lowercase().contains(query)
        || quote.game.to_lowercase().contains(query)
        || quote.timestamp.to_lowercase().contains(query)
        || quote.number.to_string().contains(query)
}
