/// Command filtering and sorting
///
/// Runs the permission, tag and search filters in that order, then sorts the
/// survivors by role (when enabled) and name.

use crate::catalog::CommandRecord;
use crate::core::normalizer::{contains_normalized, locale_cmp, normalize};
use crate::core::outcome::FilterOutcome;
use crate::core::view_state::{AlphabeticalOrder, CommandViewState, RoleSort};
use std::cmp::Ordering;
use tracing::trace;

/// Shown when no command survives the filters
pub const EMPTY_COMMANDS_MESSAGE: &str = "No commands match your filters.";

/// Filter and sort `records` for the given view state.
///
/// Pure: the same records and state always give the same sequence.
pub fn filter_commands<'a>(
    records: &'a [CommandRecord],
    state: &CommandViewState,
) -> FilterOutcome<'a, CommandRecord> {
    let query = state.search_query.trim();
    let query = (!query.is_empty()).then(|| normalize(query));

    let mut result: Vec<&CommandRecord> = records
        .iter()
        .filter(|cmd| matches_permission(cmd, state))
        .filter(|cmd| matches_tags(cmd, state))
        .filter(|cmd| query.as_deref().map_or(true, |q| matches_query(cmd, q)))
        .collect();

    // sort_by is stable, so equal keys keep catalog order
    result.sort_by(|a, b| compare(a, b, state));

    trace!(
        total = records.len(),
        visible = result.len(),
        "Filtered commands"
    );

    FilterOutcome::new(result, "command", EMPTY_COMMANDS_MESSAGE)
}

fn matches_permission(cmd: &CommandRecord, state: &CommandViewState) -> bool {
    state.selected_permissions.is_empty() || state.selected_permissions.contains(&cmd.permission)
}

fn matches_tags(cmd: &CommandRecord, state: &CommandViewState) -> bool {
    state.selected_tags.is_empty()
        || cmd
            .command_groups()
            .iter()
            .any(|group| state.selected_tags.contains(group))
}

// `query` must already be normalized
fn matches_query(cmd: &CommandRecord, query: &str) -> bool {
    contains_normalized(&cmd.name, query)
        || cmd.aliases().iter().any(|alias| contains_normalized(alias, query))
        || contains_normalized(&cmd.description, query)
        || cmd
            .command_groups()
            .iter()
            .any(|group| contains_normalized(group, query))
}

fn compare(a: &CommandRecord, b: &CommandRecord, state: &CommandViewState) -> Ordering {
    let by_role = match state.role_sort {
        RoleSort::Off => Ordering::Equal,
        RoleSort::Asc => a.permission.priority().cmp(&b.permission.priority()),
        RoleSort::Desc => b.permission.priority().cmp(&a.permission.priority()),
    };

    by_role.then_with(|| match state.alphabetical_order {
        AlphabeticalOrder::Asc => locale_cmp(&a.name, &b.name),
        AlphabeticalOrder::Desc => locale_cmp(&b.name, &a.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ParameterGroup, Permission};

    fn cmd(id: &str, name: &str, permission: Permission) -> CommandRecord {
        CommandRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            permission,
            aliases: None,
            command_groups: None,
            parameter_groups: None,
        }
    }

    fn ids(outcome: &FilterOutcome<'_, CommandRecord>) -> Vec<String> {
        outcome.iter().map(|c| c.id.clone()).collect()
    }

    fn sample() -> Vec<CommandRecord> {
        let mut ban = cmd("ban", "Ban", Permission::Admin);
        ban.description = "Removes someone from the server".to_string();
        ban.aliases = Some(vec!["banish".to_string()]);
        ban.command_groups = Some(vec!["Moderation".to_string()]);
        ban.parameter_groups = Some(vec![ParameterGroup {
            name: "default".to_string(),
            parameters: vec![],
        }]);

        let mut help = cmd("help", "Help", Permission::User);
        help.description = "Lists every command".to_string();
        help.command_groups = Some(vec!["General".to_string()]);

        let mut cafe = cmd("cafe", "Café", Permission::User);
        cafe.description = "Orders a drink".to_string();
        cafe.command_groups = Some(vec!["Fun".to_string(), "General".to_string()]);

        let mut slow = cmd("slowmode", "Slowmode", Permission::Moderator);
        slow.description = "Throttles the chat".to_string();
        slow.aliases = Some(vec!["sm".to_string()]);
        slow.command_groups = Some(vec!["Moderation".to_string()]);

        vec![slow, help, ban, cafe]
    }

    #[test]
    fn test_no_filters_returns_all_sorted_by_name() {
        let records = sample();
        let state = CommandViewState::new();
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["ban", "cafe", "help", "slowmode"]);

        let state = state.toggle_alphabetical_order();
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["slowmode", "help", "cafe", "ban"]);
    }

    #[test]
    fn test_permission_filter_example() {
        let records = vec![
            cmd("a", "Ban", Permission::Admin),
            cmd("b", "Help", Permission::User),
        ];
        let state = CommandViewState::new().toggle_permission(Permission::Admin);
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["a"]);
    }

    #[test]
    fn test_permission_filter_keeps_only_selected() {
        let records = sample();
        let state = CommandViewState::new()
            .toggle_permission(Permission::User)
            .toggle_permission(Permission::Moderator);
        let outcome = filter_commands(&records, &state);

        assert_eq!(outcome.len(), 3);
        assert!(outcome
            .iter()
            .all(|c| state.selected_permissions.contains(&c.permission)));
    }

    #[test]
    fn test_tag_filter_any_match() {
        let records = sample();
        let state = CommandViewState::new().toggle_tag("Fun").toggle_tag("Moderation");
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["ban", "cafe", "slowmode"]);
    }

    #[test]
    fn test_tag_filter_skips_untagged() {
        let mut records = sample();
        records.push(cmd("ping", "Ping", Permission::User));
        let state = CommandViewState::new().toggle_tag("General");
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["cafe", "help"]);
    }

    #[test]
    fn test_search_matches_each_field() {
        let records = sample();
        let search = |q: &str| ids(&filter_commands(&records, &CommandViewState::new().set_search_query(q)));

        assert_eq!(search("HELP"), vec!["help"]);
        assert_eq!(search("banish"), vec!["ban"]);
        assert_eq!(search("throttles"), vec!["slowmode"]);
        assert_eq!(search("moderation"), vec!["ban", "slowmode"]);
        assert_eq!(search("sm"), vec!["slowmode"]);
    }

    #[test]
    fn test_search_ignores_diacritics_and_padding() {
        let records = sample();
        let state = CommandViewState::new().set_search_query("  cafe ");
        assert_eq!(ids(&filter_commands(&records, &state)), vec!["cafe"]);

        let state = CommandViewState::new().set_search_query("CAFÉ");
        assert_eq!(ids(&filter_commands(&records, &state)), vec!["cafe"]);
    }

    #[test]
    fn test_blank_search_is_no_filter() {
        let records = sample();
        let state = CommandViewState::new().set_search_query("   ");
        assert_eq!(filter_commands(&records, &state).len(), records.len());
    }

    #[test]
    fn test_role_sort_falls_back_to_name() {
        let records = vec![
            cmd("z", "Zap", Permission::User),
            cmd("m", "Mute", Permission::User),
            cmd("a", "Alpha", Permission::User),
        ];
        let state = CommandViewState::new().cycle_role_sort();
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["a", "m", "z"]);
    }

    #[test]
    fn test_name_order_is_locale_style() {
        let records: Vec<CommandRecord> = ["Ban", "ban", "_x", "8ball", "~z", "a b", "ab"]
            .iter()
            .enumerate()
            .map(|(i, name)| cmd(&i.to_string(), name, Permission::User))
            .collect();
        let outcome = filter_commands(&records, &CommandViewState::new());
        let names: Vec<&str> = outcome.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["_x", "~z", "8ball", "a b", "ab", "ban", "Ban"]);
    }

    #[test]
    fn test_role_sort_directions() {
        let records = sample();
        let asc = CommandViewState::new().cycle_role_sort();
        assert_eq!(
            ids(&filter_commands(&records, &asc)),
            vec!["cafe", "help", "slowmode", "ban"]
        );

        let desc = asc.cycle_role_sort();
        assert_eq!(
            ids(&filter_commands(&records, &desc)),
            vec!["ban", "slowmode", "cafe", "help"]
        );

        let desc_reverse_names = desc.toggle_alphabetical_order();
        assert_eq!(
            ids(&filter_commands(&records, &desc_reverse_names)),
            vec!["ban", "slowmode", "help", "cafe"]
        );
    }

    #[test]
    fn test_filters_compose() {
        let records = sample();
        let state = CommandViewState::new()
            .toggle_permission(Permission::User)
            .toggle_tag("General")
            .set_search_query("drink");
        let outcome = filter_commands(&records, &state);
        assert_eq!(ids(&outcome), vec!["cafe"]);
    }

    #[test]
    fn test_empty_result() {
        let records = sample();
        let state = CommandViewState::new().set_search_query("nothing like this");
        let outcome = filter_commands(&records, &state);
        assert!(outcome.is_empty());
        assert_eq!(outcome.empty_message(), EMPTY_COMMANDS_MESSAGE);
        assert_eq!(outcome.count_label(), "0 commands");
    }

    #[test]
    fn test_deterministic() {
        let records = sample();
        let state = CommandViewState::new().cycle_role_sort().set_search_query("e");
        assert_eq!(
            ids(&filter_commands(&records, &state)),
            ids(&filter_commands(&records, &state))
        );
    }
}
