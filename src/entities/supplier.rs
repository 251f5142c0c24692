//! Supplier fixture rows

use rand::Rng;

use crate::entities::record::Record;
use crate::entities::vocab::{self, pick};

/// Import schema column order for `import sup`
pub const CSV_HEADERS: &[&str] = &[
    "name",
    "short_name",
    "category",
    "contact_name",
    "contact_email",
    "contact_phone",
    "website",
    "tags",
];

/// Generate `count` synthetic supplier rows.
///
/// Short names derive from the sequence index; contact fields are
/// placeholders on `.example` domains and never resolve to real
/// endpoints.
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let n = i + 1;
            Record::new()
                .set("name", format!("Supplier Company {n}"))
                .set("short_name", format!("SUP{n:02}"))
                .set("category", *pick(rng, vocab::CMP_CATEGORIES))
                .set("contact_name", format!("Contact {n}"))
                .set("contact_email", format!("contact{n}@supplier{n}.example"))
                .set("contact_phone", format!("+1-555-{n:04}"))
                .set("website", format!("https://supplier{n}.example"))
                .set("tags", *pick(rng, vocab::CMP_CATEGORIES))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn sup(
    name: &str,
    short_name: &str,
    category: &str,
    contact_name: &str,
    contact_email: &str,
    contact_phone: &str,
    website: &str,
    tags: &str,
) -> Record {
    Record::new()
        .set("name", name)
        .set("short_name", short_name)
        .set("category", category)
        .set("contact_name", contact_name)
        .set("contact_email", contact_email)
        .set("contact_phone", contact_phone)
        .set("website", website)
        .set("tags", tags)
}

/// Curated suppliers for the baseline linear-actuator project
pub fn baseline() -> Vec<Record> {
    vec![
        sup(
            "Precision Motion Systems",
            "PMS",
            "drivetrain",
            "Mike Chen",
            "mchen@precisionmotion.example",
            "+1-555-0101",
            "https://precisionmotion.example",
            "motors,screws,bearings",
        ),
        sup(
            "Allied Sealing Technologies",
            "AST",
            "sealing",
            "Sarah Johnson",
            "sjohnson@alliedsealing.example",
            "+1-555-0102",
            "https://alliedsealing.example",
            "seals,orings",
        ),
        sup(
            "Global Electronics Supply",
            "GES",
            "electronics",
            "David Park",
            "dpark@globalelec.example",
            "+1-555-0103",
            "https://globalelec.example",
            "electronics,connectors,sensors",
        ),
        sup(
            "MetalWorks CNC",
            "MWCNC",
            "machining",
            "Tom Williams",
            "twilliams@metalworkscnc.example",
            "+1-555-0104",
            "https://metalworkscnc.example",
            "machining,make",
        ),
        sup(
            "FastenerWorld",
            "FW",
            "fasteners",
            "Lisa Brown",
            "lbrown@fastenerworld.example",
            "+1-555-0105",
            "https://fastenerworld.example",
            "fasteners,hardware",
        ),
    ]
}
