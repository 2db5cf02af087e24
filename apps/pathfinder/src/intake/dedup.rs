/// Result of offering an item to a [`UniqueList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The item was blank after trimming.
    Empty,
    /// An identical entry is already in the list.
    Duplicate,
}

/// Insertion-ordered list of trimmed, non-empty strings with no duplicates.
///
/// Matching is exact and case-sensitive: "Data Structures" and
/// "data structures" are different entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueList {
    items: Vec<String>,
}

impl UniqueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list by offering every item in order, so blanks and repeats
    /// coming from untrusted input are dropped.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for item in items {
            list.insert(item.as_ref());
        }
        list
    }

    pub fn insert(&mut self, item: &str) -> AddOutcome {
        let item = item.trim();
        if item.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(item) {
            return AddOutcome::Duplicate;
        }
        self.items.push(item.to_string());
        AddOutcome::Added
    }

    /// Removes `item` if present. Returns whether anything was removed.
    pub fn remove(&mut self, item: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != item);
        self.items.len() != before
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
