use super::Component;
use crate::view::Line;
use std::fmt::Display;

/// An item paired with its positional key
#[derive(Debug, PartialEq, Eq)]
pub struct KeyedItem<'a, T> {
    pub key: usize,
    pub item: &'a T,
}

/// Renders a sequence of items keyed by their index.
///
/// Keys are positions, not identities: inserting anywhere but the tail or
/// reordering gives an existing key to a different item.
pub struct List<T> {
    items: Vec<T>,
}

impl<T: Display> List<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keyed_items(&self) -> impl Iterator<Item = KeyedItem<'_, T>> {
        self.items
            .iter()
            .enumerate()
            .map(|(key, item)| KeyedItem { key, item })
    }
}

impl<T: Display> Component for List<T> {
    fn render(&self) -> Vec<Line> {
        self.keyed_items()
            .map(|entry| Line::body(format!("[{}] {}", entry.key, entry.item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_keys_are_positions(items in proptest::collection::vec(any::<String>(), 0..50)) {
            let len = items.len();
            let list = List::new(items);
            let keys: Vec<usize> = list.keyed_items().map(|e| e.key).collect();
            prop_assert_eq!(keys, (0..len).collect::<Vec<_>>());
            prop_assert_eq!(list.render().len(), len);
        }
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let list: List<String> = List::empty();
        assert!(list.is_empty());
        assert_eq!(list.render().len(), 0);
        assert_eq!(list.keyed_items().count(), 0);
    }

    #[test]
    fn test_keys_are_indices() {
        let list = List::new(vec!["apple", "banana", "cherry"]);
        let keys: Vec<usize> = list.keyed_items().map(|e| e.key).collect();
        assert_eq!(keys, vec![0, 1, 2]);

        let lines: Vec<String> = list.render().into_iter().map(|l| l.text).collect();
        assert_eq!(lines, vec!["[0] apple", "[1] banana", "[2] cherry"]);
    }

    #[test]
    fn test_head_insertion_reuses_keys() {
        let before = List::new(vec!["b", "c"]);
        let after = List::new(vec!["a", "b", "c"]);

        let key0_before = before.keyed_items().next().map(|e| *e.item);
        let key0_after = after.keyed_items().next().map(|e| *e.item);

        // Same key, different logical item
        assert_eq!(key0_before, Some("b"));
        assert_eq!(key0_after, Some("a"));
        assert_eq!(after.keyed_items().last().map(|e| e.key), Some(2));
    }

    #[test]
    fn test_list_has_no_actions() {
        let mut list = List::new(vec![1, 2]);
        assert!(!list.dispatch(crate::component::Action::Increment));
        assert_eq!(list.revision(), 0);
        assert!(list.render().iter().all(|line| line.hit.is_none()));
    }
}
