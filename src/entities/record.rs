//! Ordered field map for one generated row

/// One fixture row: field name to display-ready value, in insertion
/// order. Rows are built once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (builder style). Field names are the import
    /// schema's static header names.
    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Look up a field value by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in insertion order
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(n, _)| *n).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
