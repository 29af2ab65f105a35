use tracing::debug;

/// Holds a single value that is replaced, never mutated in place.
///
/// Every replacement bumps `revision`, which the view uses to decide whether
/// a re-render is due.
#[derive(Debug, Clone)]
pub struct StateCell<T> {
    value: T,
    revision: u64,
}

impl<T> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            revision: 0,
        }
    }

    /// Read the current value
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the held value with `next(&previous)`
    pub fn update<F>(&mut self, next: F)
    where
        F: FnOnce(&T) -> T,
    {
        let replacement = next(&self.value);
        self.value = replacement;
        self.revision += 1;
        debug!(revision = self.revision, "state replaced");
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_holds_initial_value() {
        let cell = StateCell::new(41);
        assert_eq!(*cell.get(), 41);
        assert_eq!(cell.revision(), 0);
    }

    #[test]
    fn test_update_derives_from_previous() {
        let mut cell = StateCell::new(String::from("a"));
        cell.update(|prev| format!("{prev}b"));
        cell.update(|prev| format!("{prev}c"));
        assert_eq!(cell.get(), "abc");
    }

    #[test]
    fn test_revision_counts_replacements() {
        let mut cell = StateCell::new(0u8);
        for _ in 0..7 {
            cell.update(|prev| *prev);
        }
        // Replacing with an equal value still counts as a replacement
        assert_eq!(cell.revision(), 7);
        assert_eq!(*cell.get(), 0);
    }

    #[test]
    fn test_default_cell() {
        let cell: StateCell<Vec<i32>> = StateCell::default();
        assert!(cell.get().is_empty());
        assert_eq!(cell.revision(), 0);
    }
}
