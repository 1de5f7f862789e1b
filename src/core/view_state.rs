/// View state for the commands and quotes pages
///
/// Each page owns exactly one state value. Transitions consume the old value
/// and hand back a new one; nothing is mutated behind the caller's back.

use crate::catalog::{CommandRecord, Permission};
use crate::core::command_filter::filter_commands;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Longest search query the search box accepts, in characters
pub const MAX_QUERY_LENGTH: usize = 50;

/// Direction of the name ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabeticalOrder {
    #[default]
    Asc,
    Desc,
}

impl AlphabeticalOrder {
    /// asc <-> desc
    pub fn toggled(self) -> Self {
        match self {
            AlphabeticalOrder::Asc => AlphabeticalOrder::Desc,
            AlphabeticalOrder::Desc => AlphabeticalOrder::Asc,
        }
    }
}

/// Three-state role ordering toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSort {
    #[default]
    Off,
    Asc,
    Desc,
}

impl RoleSort {
    /// off -> asc -> desc -> off
    pub fn next(self) -> Self {
        match self {
            RoleSort::Off => RoleSort::Asc,
            RoleSort::Asc => RoleSort::Desc,
            RoleSort::Desc => RoleSort::Off,
        }
    }
}

impl std::fmt::Display for RoleSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoleSort::Off => "off",
            RoleSort::Asc => "asc",
            RoleSort::Desc => "desc",
        };
        write!(f, "{}", s)
    }
}

/// Flip membership of `item`: insert it if absent, remove it if present.
///
/// Same as the symmetric difference of `set` with `{item}`.
pub fn toggle_member<T: Ord>(mut set: BTreeSet<T>, item: T) -> BTreeSet<T> {
    if !set.remove(&item) {
        set.insert(item);
    }
    set
}

fn clamp_query(query: &str) -> String {
    query.chars().take(MAX_QUERY_LENGTH).collect()
}

/// Everything the user can change on the commands page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommandViewState {
    pub alphabetical_order: AlphabeticalOrder,
    pub role_sort: RoleSort,
    /// Empty means "any permission"
    pub selected_permissions: BTreeSet<Permission>,
    /// Empty means "any tag"
    pub selected_tags: BTreeSet<String>,
    pub search_query: String,
    pub focused_id: Option<String>,
}

/// User actions on the commands page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    ToggleAlphabeticalOrder,
    CycleRoleSort,
    TogglePermission(Permission),
    ToggleTag(String),
    ClearPermissions,
    ClearTags,
    SetSearchQuery(String),
    SetFocused(String),
    /// Interaction happened outside the results region
    DismissFocus,
}

impl CommandViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn toggle_alphabetical_order(mut self) -> Self {
        self.alphabetical_order = self.alphabetical_order.toggled();
        self
    }

    #[must_use]
    pub fn cycle_role_sort(mut self) -> Self {
        self.role_sort = self.role_sort.next();
        self
    }

    #[must_use]
    pub fn toggle_permission(mut self, permission: Permission) -> Self {
        self.selected_permissions = toggle_member(self.selected_permissions, permission);
        self
    }

    #[must_use]
    pub fn toggle_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tags = toggle_member(self.selected_tags, tag.into());
        self
    }

    #[must_use]
    pub fn clear_permissions(mut self) -> Self {
        self.selected_permissions.clear();
        self
    }

    #[must_use]
    pub fn clear_tags(mut self) -> Self {
        self.selected_tags.clear();
        self
    }

    /// Replace the query. Anything past [`MAX_QUERY_LENGTH`] characters is dropped.
    #[must_use]
    pub fn set_search_query(mut self, query: &str) -> Self {
        self.search_query = clamp_query(query);
        self
    }

    /// Focus (expand) a command card.
    ///
    /// Picking the already-focused id un-focuses it. Ids that are unknown or
    /// point at a command without parameter groups leave the state untouched.
    #[must_use]
    pub fn set_focused(mut self, id: &str, records: &[CommandRecord]) -> Self {
        if self.focused_id.as_deref() == Some(id) {
            self.focused_id = None;
            return self;
        }

        match records.iter().find(|cmd| cmd.id == id) {
            Some(cmd) if cmd.is_focus_eligible() => {
                self.focused_id = Some(cmd.id.clone());
            }
            _ => debug!(id, "Ignoring focus on a command that can't expand"),
        }
        self
    }

    /// Clear focus no matter what is focused
    #[must_use]
    pub fn dismiss_focus(mut self) -> Self {
        self.focused_id = None;
        self
    }

    /// Apply one action, then drop the focus if the focused command got
    /// filtered out of the visible results.
    #[must_use]
    pub fn apply(self, action: CommandAction, records: &[CommandRecord]) -> Self {
        let next = match action {
            CommandAction::ToggleAlphabeticalOrder => self.toggle_alphabetical_order(),
            CommandAction::CycleRoleSort => self.cycle_role_sort(),
            CommandAction::TogglePermission(p) => self.toggle_permission(p),
            CommandAction::ToggleTag(t) => self.toggle_tag(t),
            CommandAction::ClearPermissions => self.clear_permissions(),
            CommandAction::ClearTags => self.clear_tags(),
            CommandAction::SetSearchQuery(q) => self.set_search_query(&q),
            CommandAction::SetFocused(id) => self.set_focused(&id, records),
            CommandAction::DismissFocus => self.dismiss_focus(),
        };
        next.reconcile_focus(records)
    }

    fn reconcile_focus(mut self, records: &[CommandRecord]) -> Self {
        let Some(focused) = self.focused_id.as_deref() else {
            return self;
        };

        let still_visible = filter_commands(records, &self)
            .iter()
            .any(|cmd| cmd.id == focused && cmd.is_focus_eligible());

        if !still_visible {
            debug!(id = focused, "Focused command filtered out, clearing focus");
            self.focused_id = None;
        }
        self
    }

    /// Whether any filter narrows the result
    pub fn has_active_filters(&self) -> bool {
        !self.selected_permissions.is_empty()
            || !self.selected_tags.is_empty()
            || !self.search_query.trim().is_empty()
    }
}

/// Everything the user can change on the quotes page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuoteViewState {
    /// Empty means "any game"
    pub selected_games: BTreeSet<String>,
    pub search_query: String,
}

/// User actions on the quotes page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteAction {
    ToggleGame(String),
    ClearGames,
    SetSearchQuery(String),
}

impl QuoteViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn toggle_game(mut self, game: impl Into<String>) -> Self {
        self.selected_games = toggle_member(self.selected_games, game.into());
        self
    }

    #[must_use]
    pub fn clear_games(mut self) -> Self {
        self.selected_games.clear();
        self
    }

    #[must_use]
    pub fn set_search_query(mut self, query: &str) -> Self {
        self.search_query = clamp_query(query);
        self
    }

    #[must_use]
    pub fn apply(self, action: QuoteAction) -> Self {
        match action {
            QuoteAction::ToggleGame(g) => self.toggle_game(g),
            QuoteAction::ClearGames => self.clear_games(),
            QuoteAction::SetSearchQuery(q) => self.set_search_query(&q),
        }
    }
}
