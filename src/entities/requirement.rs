//! Requirement fixture rows

use rand::Rng;

use crate::entities::record::Record;
use crate::entities::vocab::{self, pick};

/// Import schema column order for `import req`
pub const CSV_HEADERS: &[&str] = &[
    "title",
    "type",
    "priority",
    "status",
    "category",
    "text",
    "rationale",
    "tags",
];

/// Generate `count` synthetic requirement rows
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let adj = *pick(rng, vocab::ADJECTIVES);
            let noun = *pick(rng, vocab::NOUNS_REQ);
            let category = *pick(rng, vocab::CATEGORIES);
            Record::new()
                .set("title", format!("{adj} {noun} Requirement {}", i + 1))
                .set("type", *pick(rng, vocab::REQ_TYPES))
                .set("priority", *pick(rng, vocab::PRIORITIES))
                .set("status", *pick(rng, vocab::STATUSES))
                .set("category", category)
                .set(
                    "text",
                    format!(
                        "The system shall meet {} requirements for {category} performance.",
                        noun.to_lowercase()
                    ),
                )
                .set(
                    "rationale",
                    format!("Required for {category} compliance and system performance."),
                )
                .set(
                    "tags",
                    format!("{category},{}", pick(rng, vocab::PRIORITIES)),
                )
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn req(
    title: &str,
    req_type: &str,
    priority: &str,
    status: &str,
    category: &str,
    text: &str,
    rationale: &str,
    tags: &str,
) -> Record {
    Record::new()
        .set("title", title)
        .set("type", req_type)
        .set("priority", priority)
        .set("status", status)
        .set("category", category)
        .set("text", text)
        .set("rationale", rationale)
        .set("tags", tags)
}

/// Curated requirements for the baseline linear-actuator project
pub fn baseline() -> Vec<Record> {
    vec![
        // Performance
        req(
            "Stroke Length",
            "input",
            "critical",
            "approved",
            "performance",
            "The actuator shall have a stroke length of 150mm ± 1mm",
            "Required for full range of motion in target application",
            "mechanical,critical",
        ),
        req(
            "Maximum Force",
            "input",
            "critical",
            "approved",
            "performance",
            "The actuator shall produce a minimum of 500N continuous force",
            "Load requirements from customer specification",
            "mechanical,force",
        ),
        req(
            "Speed Range",
            "input",
            "high",
            "approved",
            "performance",
            "The actuator shall achieve speeds from 5mm/s to 50mm/s",
            "Variable speed required for different operating modes",
            "mechanical,speed",
        ),
        req(
            "Positioning Accuracy",
            "input",
            "high",
            "approved",
            "performance",
            "Position repeatability shall be ±0.1mm",
            "Precision positioning required for automation application",
            "mechanical,precision",
        ),
        req(
            "Duty Cycle",
            "input",
            "medium",
            "approved",
            "performance",
            "The actuator shall operate at 25% duty cycle minimum",
            "Industrial application requires sustained operation",
            "electrical,thermal",
        ),
        // Environmental
        req(
            "Operating Temperature",
            "input",
            "high",
            "approved",
            "environmental",
            "The actuator shall operate from -20°C to +50°C ambient",
            "Industrial environment temperature range",
            "environmental,thermal",
        ),
        req(
            "IP Rating",
            "input",
            "high",
            "approved",
            "environmental",
            "The actuator shall meet IP65 ingress protection",
            "Protection against dust and water jets required",
            "environmental,sealing",
        ),
        req(
            "Vibration Resistance",
            "input",
            "medium",
            "approved",
            "environmental",
            "The actuator shall withstand 2G vibration 10-500Hz",
            "Mounted on vibrating machinery",
            "environmental,mechanical",
        ),
        req(
            "EMC Compliance",
            "input",
            "medium",
            "approved",
            "environmental",
            "The actuator shall comply with EN 61000-6-2 and EN 61000-6-4",
            "Required for CE marking",
            "electrical,regulatory",
        ),
        // Electrical
        req(
            "Input Voltage",
            "input",
            "critical",
            "approved",
            "electrical",
            "The actuator shall operate from 24VDC ±10%",
            "Standard industrial control voltage",
            "electrical,power",
        ),
        req(
            "Power Consumption",
            "input",
            "medium",
            "approved",
            "electrical",
            "Maximum power consumption shall not exceed 150W",
            "Power budget constraint from system design",
            "electrical,power",
        ),
        req(
            "Control Interface",
            "input",
            "high",
            "approved",
            "electrical",
            "The actuator shall provide RS-485 Modbus RTU interface",
            "Integration with industrial PLCs",
            "electrical,interface",
        ),
        // Mechanical
        req(
            "Mounting Interface",
            "input",
            "medium",
            "approved",
            "mechanical",
            "The actuator shall have ISO 15552 compliant mounting",
            "Standard mounting for easy integration",
            "mechanical,interface",
        ),
        req(
            "Weight Limit",
            "input",
            "low",
            "approved",
            "mechanical",
            "Total actuator weight shall not exceed 3.5kg",
            "Installation handling requirement",
            "mechanical,weight",
        ),
        // Safety
        req(
            "Overload Protection",
            "input",
            "critical",
            "approved",
            "safety",
            "The actuator shall detect and respond to overload within 100ms",
            "Prevent damage from obstruction or jamming",
            "safety,protection",
        ),
        req(
            "Limit Switches",
            "input",
            "high",
            "approved",
            "safety",
            "The actuator shall have adjustable end-of-travel limits",
            "Prevent mechanical over-travel damage",
            "safety,mechanical",
        ),
        // Reliability
        req(
            "Design Life",
            "input",
            "high",
            "approved",
            "reliability",
            "The actuator shall achieve 1 million full stroke cycles minimum",
            "5-year service life at expected usage rate",
            "reliability,life",
        ),
        // Derived outputs
        req(
            "Motor Selection",
            "output",
            "high",
            "approved",
            "electrical",
            "Motor shall be NEMA 23 brushless DC, minimum 0.5Nm continuous torque",
            "Derived from force and speed requirements",
            "electrical,motor",
        ),
        req(
            "Lead Screw Pitch",
            "output",
            "high",
            "approved",
            "mechanical",
            "Lead screw pitch shall be 5mm for optimal speed/force tradeoff",
            "Calculated from speed and force requirements",
            "mechanical,drivetrain",
        ),
        req(
            "Seal Design",
            "output",
            "high",
            "approved",
            "mechanical",
            "Rod seal shall be double-lip NBR with dust wiper",
            "Required for IP65 rating at operating temperature",
            "mechanical,sealing",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exactly_the_requested_count() {
        let mut rng = rand::rng();
        assert!(generate(0, &mut rng).is_empty());
        assert_eq!(generate(25, &mut rng).len(), 25);
    }

    #[test]
    fn rows_carry_exactly_the_schema_fields_in_order() {
        let mut rng = rand::rng();
        for rec in generate(10, &mut rng) {
            assert_eq!(rec.keys(), CSV_HEADERS);
        }
    }

    #[test]
    fn enumerated_fields_stay_in_vocabulary() {
        let mut rng = rand::rng();
        for rec in generate(50, &mut rng) {
            assert!(vocab::REQ_TYPES.contains(&rec.field("type").unwrap()));
            assert!(vocab::PRIORITIES.contains(&rec.field("priority").unwrap()));
            assert!(vocab::STATUSES.contains(&rec.field("status").unwrap()));
            assert!(vocab::CATEGORIES.contains(&rec.field("category").unwrap()));
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
