//! Fixture record types and per-kind generators
//!
//! One module per entity kind the target tool imports:
//! - [`requirement`] - design inputs/outputs
//! - [`component`] - BOM parts (make/buy)
//! - [`supplier`] - approved suppliers with contact info
//! - [`risk`] - design and process risks with FMEA scores
//! - [`test`] - verification and validation protocols
//!
//! Each module carries its import schema column order, a synthetic
//! generator, and the hand-curated baseline rows.

pub mod component;
pub mod record;
pub mod requirement;
pub mod risk;
pub mod supplier;
pub mod vocab;

use rand::Rng;
use serde::Serialize;

pub use record::Record;

/// The five artifact kinds the benchmark imports, in import order.
///
/// Risks and tests commonly reference requirements and components in
/// the tool's relational model, so imports run req → cmp → sup → risk →
/// test the way a correctly populated project would be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Requirement,
    Component,
    Supplier,
    Risk,
    Test,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Requirement,
        EntityKind::Component,
        EntityKind::Supplier,
        EntityKind::Risk,
        EntityKind::Test,
    ];

    /// Argument the tool's `import` subcommand expects
    pub fn import_arg(self) -> &'static str {
        match self {
            EntityKind::Requirement => "req",
            EntityKind::Component => "cmp",
            EntityKind::Supplier => "sup",
            EntityKind::Risk => "risk",
            EntityKind::Test => "test",
        }
    }

    /// Conventional fixture file name
    pub fn fixture_file(self) -> &'static str {
        match self {
            EntityKind::Requirement => "requirements.csv",
            EntityKind::Component => "components.csv",
            EntityKind::Supplier => "suppliers.csv",
            EntityKind::Risk => "risks.csv",
            EntityKind::Test => "tests.csv",
        }
    }

    /// Import schema column order for this kind
    pub fn csv_headers(self) -> &'static [&'static str] {
        match self {
            EntityKind::Requirement => requirement::CSV_HEADERS,
            EntityKind::Component => component::CSV_HEADERS,
            EntityKind::Supplier => supplier::CSV_HEADERS,
            EntityKind::Risk => risk::CSV_HEADERS,
            EntityKind::Test => test::CSV_HEADERS,
        }
    }

    /// Generate `count` synthetic records for this kind
    pub fn generate(self, count: usize, rng: &mut impl Rng) -> Vec<Record> {
        match self {
            EntityKind::Requirement => requirement::generate(count, rng),
            EntityKind::Component => component::generate(count, rng),
            EntityKind::Supplier => supplier::generate(count, rng),
            EntityKind::Risk => risk::generate(count, rng),
            EntityKind::Test => test::generate(count, rng),
        }
    }

    /// The hand-curated baseline rows for this kind
    pub fn baseline(self) -> Vec<Record> {
        match self {
            EntityKind::Requirement => requirement::baseline(),
            EntityKind::Component => component::baseline(),
            EntityKind::Supplier => supplier::baseline(),
            EntityKind::Risk => risk::baseline(),
            EntityKind::Test => test::baseline(),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Requirement => "requirement",
            EntityKind::Component => "component",
            EntityKind::Supplier => "supplier",
            EntityKind::Risk => "risk",
            EntityKind::Test => "test",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_import_order() {
        let args: Vec<_> = EntityKind::ALL.iter().map(|k| k.import_arg()).collect();
        assert_eq!(args, vec!["req", "cmp", "sup", "risk", "test"]);
    }

    #[test]
    fn every_kind_generates_schema_shaped_rows() {
        let mut rng = rand::rng();
        for kind in EntityKind::ALL {
            for rec in kind.generate(5, &mut rng) {
                assert_eq!(rec.keys(), kind.csv_headers());
            }
        }
    }

    #[test]
    fn zero_count_yields_empty_sequences() {
        let mut rng = rand::rng();
        for kind in EntityKind::ALL {
            assert!(kind.generate(0, &mut rng).is_empty());
        }
    }

    #[test]
    fn every_kind_has_baseline_rows() {
        for kind in EntityKind::ALL {
            let rows = kind.baseline();
            assert!(!rows.is_empty(), "no baseline rows for {kind}");
            for rec in &rows {
                assert_eq!(rec.keys(), kind.csv_headers());
            }
        }
    }
}
