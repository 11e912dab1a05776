use crate::domain::model::Entry;

/// Ordered list of labelled amounts with chainable mutation.
///
/// Amounts are stored as given; the total is always recomputed from the
/// entries and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FluentAccumulator {
    entries: Vec<Entry>,
}

impl FluentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(&mut self, label: impl Into<String>, amount: f64) -> &mut Self {
        let entry = Entry::new(label, amount);
        tracing::debug!("Adding entry {} = {}", entry.label, entry.amount);
        self.entries.push(entry);
        self
    }

    /// 移除所有標籤完全相符（區分大小寫）的項目，找不到時不做任何事
    pub fn without_entry(&mut self, label: &str) -> &mut Self {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.label != label);
        let removed = before - self.entries.len();
        if removed == 0 {
            tracing::debug!("No entry labelled {:?} to remove", label);
        } else {
            tracing::debug!("Removed {} entries labelled {:?}", removed, label);
        }
        self
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn snapshot_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|entry| entry.label == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for FluentAccumulator {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Entry> for FluentAccumulator {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_total_is_zero() {
        let acc = FluentAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.total(), 0.0);
        assert!(acc.snapshot_entries().is_empty());
    }

    #[test]
    fn test_chained_and_separate_calls_match() {
        let mut chained = FluentAccumulator::new();
        chained.with_entry("x", 1.0).with_entry("y", 2.0);

        let mut separate = FluentAccumulator::new();
        separate.with_entry("x", 1.0);
        separate.with_entry("y", 2.0);

        assert_eq!(chained, separate);
        assert_eq!(chained.total(), 3.0);
    }

    #[test]
    fn test_without_entry_removes_every_match() {
        let mut acc = FluentAccumulator::new();
        acc.with_entry("Tea", 2.0)
            .with_entry("Milk", 1.0)
            .with_entry("Tea", 3.0)
            .without_entry("Tea");

        assert_eq!(acc.len(), 1);
        assert!(!acc.contains("Tea"));
        assert_eq!(acc.total(), 1.0);
    }

    #[test]
    fn test_without_entry_is_case_sensitive_noop() {
        let mut acc = FluentAccumulator::new();
        acc.with_entry("Apple", 1.5).without_entry("apple");
        assert_eq!(acc.len(), 1);
        assert_eq!(acc.total(), 1.5);
    }

    #[test]
    fn test_negative_amounts_are_accepted() {
        let mut acc = FluentAccumulator::new();
        acc.with_entry("Refund", -4.0).with_entry("Item", 10.0);
        assert_eq!(acc.total(), 6.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut acc = FluentAccumulator::new();
        acc.with_entry("Apple", 1.5);

        let mut snapshot = acc.snapshot_entries();
        snapshot[0].amount = 100.0;
        snapshot.push(Entry::new("Extra", 1.0));

        assert_eq!(acc.len(), 1);
        assert_eq!(acc.total(), 1.5);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut acc: FluentAccumulator =
            vec![Entry::new("a", 1.0), Entry::new("b", 2.0)].into_iter().collect();
        acc.extend(vec![Entry::new("c", 4.0)]);
        assert_eq!(acc.total(), 7.0);
        assert_eq!(acc.snapshot_entries()[2].label, "c");
    }
}
