/// Core functionality modules
///
/// Search normalization, the command and quote filter pipelines, and the view
/// state that feeds them.

pub mod command_filter;
pub mod normalizer;
pub mod outcome;
pub mod quote_filter;
pub mod view_state;

pub use command_filter::{filter_commands, EMPTY_COMMANDS_MESSAGE};
pub use normalizer::normalize;
pub use outcome::FilterOutcome;
pub use quote_filter::{filter_quotes, EMPTY_QUOTES_MESSAGE};
pub use view_state::{
    AlphabeticalOrder, CommandAction, CommandViewState, QuoteAction, QuoteViewState, RoleSort,
};
