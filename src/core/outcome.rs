/// Result of running a filter pipeline
///
/// An empty outcome is a normal state, not an error. Callers render
/// `empty_message()` in place of the list.

use std::ops::Deref;

/// Ordered records that survived filtering, borrowed from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a, T> {
    items: Vec<&'a T>,
    noun: &'static str,
    empty_message: &'static str,
}

impl<'a, T> FilterOutcome<'a, T> {
    pub(crate) fn new(items: Vec<&'a T>, noun: &'static str, empty_message: &'static str) -> Self {
        Self {
            items,
            noun,
            empty_message,
        }
    }

    /// Message to show when nothing matched
    pub fn empty_message(&self) -> &'static str {
        self.empty_message
    }

    /// "1 quote", "3 quotes", "0 commands"
    pub fn count_label(&self) -> String {
        let n = self.items.len();
        let plural = if n == 1 { "" } else { "s" };
        format!("{} {}{}", n, self.noun, plural)
    }

    /// Items paired with their 1-based display position
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a T)> + '_ {
        self.items.iter().copied().enumerate().map(|(i, item)| (i + 1, item))
    }
}

impl<'a, T> Deref for FilterOutcome<'a, T> {
    type Target = [&'a T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_pluralizes() {
        let values = [1, 2];
        let one = FilterOutcome::new(vec![&values[0]], "quote", "none");
        assert_eq!(one.count_label(), "1 quote");

        let two = FilterOutcome::new(values.iter().collect(), "quote", "none");
        assert_eq!(two.count_label(), "2 quotes");

        let zero: FilterOutcome<'_, i32> = FilterOutcome::new(vec![], "command", "none");
        assert_eq!(zero.count_label(), "0 commands");
        assert!(zero.is_empty());
    }

    #[test]
    fn test_numbered_starts_at_one() {
        let values = ["a", "b"];
        let outcome = FilterOutcome::new(values.iter().collect(), "item", "none");
        let numbered: Vec<(usize, &&str)> = outcome.numbered().collect();
        assert_eq!(numbered, vec![(1, &"a"), (2, &"b")]);
    }
}
