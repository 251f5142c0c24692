//! Component fixture rows

use rand::Rng;

use crate::entities::record::Record;
use crate::entities::vocab::{self, pick};

/// Import schema column order for `import cmp`
pub const CSV_HEADERS: &[&str] = &[
    "part_number",
    "title",
    "make_buy",
    "category",
    "description",
    "material",
    "finish",
    "mass",
    "cost",
    "tags",
];

/// Generate `count` synthetic component rows.
///
/// Part numbers carry a sequential suffix, so they are unique within a
/// batch by construction.
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let adj = *pick(rng, vocab::ADJECTIVES);
            let noun = *pick(rng, vocab::NOUNS_CMP);
            let make_buy = *pick(rng, vocab::MAKE_BUY);
            let category = *pick(rng, vocab::CMP_CATEGORIES);
            Record::new()
                .set("part_number", format!("PN-{:04}", i + 1))
                .set("title", format!("{adj} {noun} {}", i + 1))
                .set("make_buy", make_buy)
                .set("category", category)
                .set("description", format!("{adj} {noun} for system assembly"))
                .set("material", "Various")
                .set("finish", "Standard")
                .set("mass", format!("{:.3}", rng.random_range(0.01..=2.0)))
                .set("cost", format!("{:.2}", rng.random_range(0.50..=150.0)))
                .set("tags", format!("{category},{make_buy}"))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn cmp(
    part_number: &str,
    title: &str,
    make_buy: &str,
    category: &str,
    description: &str,
    material: &str,
    finish: &str,
    mass: &str,
    cost: &str,
    tags: &str,
) -> Record {
    Record::new()
        .set("part_number", part_number)
        .set("title", title)
        .set("make_buy", make_buy)
        .set("category", category)
        .set("description", description)
        .set("material", material)
        .set("finish", finish)
        .set("mass", mass)
        .set("cost", cost)
        .set("tags", tags)
}

/// Curated components for the baseline linear-actuator project
pub fn baseline() -> Vec<Record> {
    vec![
        // Make parts
        cmp(
            "LA-HSG-001",
            "Main Housing",
            "make",
            "mechanical",
            "Extruded aluminum housing with machined features",
            "6063-T6 Aluminum",
            "Clear anodize",
            "0.850",
            "45.00",
            "structural,machined",
        ),
        cmp(
            "LA-CAP-001",
            "Front End Cap",
            "make",
            "mechanical",
            "Machined end cap with seal groove and bearing bore",
            "6061-T6 Aluminum",
            "Clear anodize",
            "0.120",
            "18.00",
            "structural,machined",
        ),
        cmp(
            "LA-CAP-002",
            "Rear End Cap",
            "make",
            "mechanical",
            "Machined end cap with motor mount and bearing bore",
            "6061-T6 Aluminum",
            "Clear anodize",
            "0.180",
            "22.00",
            "structural,machined",
        ),
        cmp(
            "LA-ROD-001",
            "Extension Rod",
            "make",
            "mechanical",
            "Ground and chrome plated piston rod",
            "1045 Steel",
            "Hard chrome",
            "0.340",
            "35.00",
            "precision,ground",
        ),
        cmp(
            "LA-NUT-001",
            "Lead Screw Nut",
            "make",
            "mechanical",
            "Bronze lead screw nut with anti-backlash feature",
            "C93200 Bronze",
            "As machined",
            "0.085",
            "28.00",
            "precision,wear",
        ),
        // Buy parts - mechanical
        cmp(
            "LA-SCR-001",
            "Lead Screw",
            "buy",
            "mechanical",
            "Precision ground lead screw Tr16x5",
            "1045 Steel hardened",
            "Black oxide",
            "0.420",
            "65.00",
            "precision,drivetrain",
        ),
        cmp(
            "LA-BRG-001",
            "Front Bearing",
            "buy",
            "mechanical",
            "Angular contact bearing 6002-2RS",
            "52100 Steel",
            "Standard",
            "0.032",
            "8.50",
            "bearing,precision",
        ),
        cmp(
            "LA-BRG-002",
            "Rear Bearing",
            "buy",
            "mechanical",
            "Deep groove bearing 6003-2RS",
            "52100 Steel",
            "Standard",
            "0.042",
            "6.50",
            "bearing,support",
        ),
        cmp(
            "LA-SEL-001",
            "Rod Seal",
            "buy",
            "mechanical",
            "Double-lip rod seal 16x24x7",
            "NBR rubber",
            "Standard",
            "0.008",
            "3.25",
            "seal,wear",
        ),
        cmp(
            "LA-SEL-002",
            "Dust Wiper",
            "buy",
            "mechanical",
            "Polyurethane dust wiper 16x22x4",
            "Polyurethane",
            "Standard",
            "0.004",
            "1.85",
            "seal,protection",
        ),
        // Buy parts - electrical
        cmp(
            "LA-MOT-001",
            "BLDC Motor",
            "buy",
            "electrical",
            "NEMA 23 brushless DC motor 24V 0.6Nm",
            "Various",
            "Black powder coat",
            "0.580",
            "85.00",
            "motor,drivetrain",
        ),
        cmp(
            "LA-ENC-001",
            "Rotary Encoder",
            "buy",
            "electrical",
            "Incremental encoder 1000 PPR",
            "Various",
            "Standard",
            "0.045",
            "28.00",
            "sensor,feedback",
        ),
        cmp(
            "LA-DRV-001",
            "Motor Driver",
            "buy",
            "electrical",
            "BLDC motor driver module 24V 10A",
            "PCB assembly",
            "Conformal coat",
            "0.065",
            "42.00",
            "electronics,control",
        ),
        cmp(
            "LA-LIM-001",
            "Limit Switch",
            "buy",
            "electrical",
            "Micro limit switch with lever",
            "Various",
            "Standard",
            "0.012",
            "2.80",
            "sensor,safety",
        ),
        cmp(
            "LA-CON-001",
            "Power Connector",
            "buy",
            "electrical",
            "M12 4-pin power connector IP67",
            "Brass/plastic",
            "Nickel plate",
            "0.025",
            "8.50",
            "connector,interface",
        ),
        // Fasteners
        cmp(
            "LA-FST-001",
            "End Cap Screws",
            "buy",
            "fastener",
            "M4x12 socket head cap screw A2-70",
            "Stainless steel",
            "Passivated",
            "0.003",
            "0.08",
            "fastener,assembly",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_exactly_the_requested_count() {
        let mut rng = rand::rng();
        assert!(generate(0, &mut rng).is_empty());
        assert_eq!(generate(40, &mut rng).len(), 40);
    }

    #[test]
    fn rows_carry_exactly_the_schema_fields_in_order() {
        let mut rng = rand::rng();
        for rec in generate(10, &mut rng) {
            assert_eq!(rec.keys(), CSV_HEADERS);
        }
    }

    #[test]
    fn mass_and_cost_stay_in_range() {
        let mut rng = rand::rng();
        for rec in generate(100, &mut rng) {
            let mass: f64 = rec.field("mass").unwrap().parse().unwrap();
            let cost: f64 = rec.field("cost").unwrap().parse().unwrap();
            assert!((0.01..=2.0).contains(&mass), "mass {mass} out of range");
            assert!((0.50..=150.0).contains(&cost), "cost {cost} out of range");
        }
    }

    #[test]
    fn part_numbers_are_unique_per_batch() {
        let mut rng = rand::rng();
        let records = generate(50, &mut rng);
        let numbers: HashSet<_> = records
            .iter()
            .map(|r| r.field("part_number").unwrap().to_string())
            .collect();
        assert_eq!(numbers.len(), records.len());
    }

    #[test]
    fn make_buy_stays_in_vocabulary() {
        let mut rng = rand::rng();
        for rec in generate(50, &mut rng) {
            let mb = rec.field("make_buy").unwrap();
            assert!(mb == "make" || mb == "buy");
        }
    }

    #[test]
    fn baseline_rows_match_the_import_schema() {
        let rows = baseline();
        assert!(!rows.is_empty());
        for rec in &rows {
            assert_eq!(rec.keys(), CSV_HEADERS);
        }
    }
}
