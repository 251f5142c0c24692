//! Benchmark volume configuration

use serde::Serialize;

use crate::entities::EntityKind;

/// How many records to generate per entity kind.
///
/// Defaults size a mid-scale project: enough rows for the tool's cache
/// and validation passes to do real work, small enough to finish in
/// minutes on a laptop.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VolumeConfig {
    pub requirements: usize,
    pub components: usize,
    pub suppliers: usize,
    pub risks: usize,
    pub tests: usize,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            requirements: 500,
            components: 200,
            suppliers: 20,
            risks: 100,
            tests: 150,
        }
    }
}

impl VolumeConfig {
    /// Requested record count for one entity kind
    pub fn count_for(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Requirement => self.requirements,
            EntityKind::Component => self.components,
            EntityKind::Supplier => self.suppliers,
            EntityKind::Risk => self.risks,
            EntityKind::Test => self.tests,
        }
    }

    /// Total entity count across all kinds
    pub fn total(&self) -> usize {
        self.requirements + self.components + self.suppliers + self.risks + self.tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_every_kind() {
        let volumes = VolumeConfig::default();
        assert_eq!(volumes.total(), 500 + 200 + 20 + 100 + 150);
    }

    #[test]
    fn count_for_covers_every_kind() {
        let volumes = VolumeConfig {
            requirements: 1,
            components: 2,
            suppliers: 3,
            risks: 4,
            tests: 5,
        };
        let counts: Vec<_> = EntityKind::ALL
            .iter()
            .map(|k| volumes.count_for(*k))
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);
    }
}
