use tracing::debug;

pub const DEFAULT_INTERESTS: [&str; 8] = [
    "Healthcare",
    "Technology",
    "Smart Home",
    "IoT",
    "Finance",
    "Education",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestCatalog {
    labels: Vec<String>,
}

impl InterestCatalog {
    pub fn new() -> Self {
        Self {
            labels: DEFAULT_INTERESTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_default(&self) -> bool {
        self.labels.iter().map(String::as_str).eq(DEFAULT_INTERESTS)
    }

    /// Empty or already-present labels (case-sensitive) are a no-op.
    pub fn add_label(&mut self, raw: &str) -> bool {
        let label = raw.trim();
        if label.is_empty() || self.contains(label) {
            debug!(label, "catalog: label rejected");
            return false;
        }
        self.labels.push(label.to_string());
        debug!(label, total = self.labels.len(), "catalog: label added");
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for InterestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
