//! Risk fixture rows

use rand::Rng;

use crate::entities::record::Record;
use crate::entities::vocab::{self, pick};

/// Import schema column order for `import risk`
pub const CSV_HEADERS: &[&str] = &[
    "title",
    "type",
    "category",
    "description",
    "failure_mode",
    "cause",
    "effect",
    "severity",
    "occurrence",
    "detection",
    "tags",
];

/// Generate `count` synthetic risk rows.
///
/// Severity, occurrence and detection are 1-10 scores; the tool derives
/// RPN from them on import, the harness never does.
pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let noun = *pick(rng, vocab::NOUNS_RISK);
            let category = *pick(rng, vocab::CATEGORIES);
            let risk_type = *pick(rng, vocab::RISK_TYPES);
            Record::new()
                .set("title", format!("{noun} Risk {}", i + 1))
                .set("type", risk_type)
                .set("category", category)
                .set(
                    "description",
                    format!("Potential {} in {category} subsystem", noun.to_lowercase()),
                )
                .set("failure_mode", format!("{noun} during operation"))
                .set(
                    "cause",
                    format!("Design or process deficiency in {category} area"),
                )
                .set(
                    "effect",
                    format!(
                        "System {} leading to performance degradation",
                        noun.to_lowercase()
                    ),
                )
                .set("severity", rng.random_range(1u32..=10).to_string())
                .set("occurrence", rng.random_range(1u32..=10).to_string())
                .set("detection", rng.random_range(1u32..=10).to_string())
                .set("tags", format!("{category},{risk_type}"))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn risk(
    title: &str,
    risk_type: &str,
    category: &str,
    description: &str,
    failure_mode: &str,
    cause: &str,
    effect: &str,
    severity: u32,
    occurrence: u32,
    detection: u32,
    tags: &str,
) -> Record {
    Record::new()
        .set("title", title)
        .set("type", risk_type)
        .set("category", category)
        .set("description", description)
        .set("failure_mode", failure_mode)
        .set("cause", cause)
        .set("effect", effect)
        .set("severity", severity.to_string())
        .set("occurrence", occurrence.to_string())
        .set("detection", detection.to_string())
        .set("tags", tags)
}

/// Curated risks for the baseline linear-actuator project
pub fn baseline() -> Vec<Record> {
    vec![
        // Design risks
        risk(
            "Motor Overheating",
            "design",
            "thermal",
            "Motor may overheat under continuous high-load operation",
            "Thermal shutdown or winding damage during extended operation",
            "Insufficient heat dissipation path from motor to housing",
            "System shutdown, potential motor damage, warranty returns",
            7,
            4,
            5,
            "thermal,motor",
        ),
        risk(
            "Lead Screw Wear",
            "design",
            "wear",
            "Accelerated wear on lead screw nut interface",
            "Excessive backlash and positioning error over time",
            "Inadequate lubrication or contamination ingress",
            "Degraded positioning accuracy, shortened service life",
            6,
            5,
            6,
            "wear,drivetrain",
        ),
        risk(
            "Seal Failure",
            "design",
            "sealing",
            "Rod seal may fail under extreme temperature cycling",
            "Seal extrusion or hardening leading to leakage",
            "Temperature cycling beyond seal material limits",
            "Loss of IP65 rating, contamination ingress",
            8,
            3,
            4,
            "sealing,environmental",
        ),
        risk(
            "Encoder Miscounting",
            "design",
            "electrical",
            "Encoder may miscount under EMI conditions",
            "Position feedback errors and drift",
            "Insufficient EMI shielding on encoder signals",
            "Positioning errors, potential safety issue",
            7,
            3,
            5,
            "electrical,emc",
        ),
        risk(
            "Bearing Preload Loss",
            "design",
            "mechanical",
            "Angular contact bearing preload may change with temperature",
            "Increased axial play or excessive preload",
            "Differential thermal expansion in bearing assembly",
            "Reduced life, noise, or binding",
            5,
            4,
            6,
            "mechanical,bearings",
        ),
        // Process risks
        risk(
            "Housing Bore Tolerance",
            "process",
            "machining",
            "Housing bore may go out of tolerance",
            "Bore diameter or concentricity out of specification",
            "Tool wear, thermal growth, or setup error",
            "Bearing fit issues, assembly problems",
            6,
            4,
            3,
            "machining,dimensional",
        ),
        risk(
            "Wrong Fastener Torque",
            "process",
            "assembly",
            "Fasteners may be under or over-torqued",
            "Loose or stripped fasteners",
            "Operator error or uncalibrated tools",
            "Assembly loosening in service or stripped threads",
            6,
            4,
            5,
            "assembly,fastener",
        ),
        risk(
            "Seal Installation Damage",
            "process",
            "assembly",
            "Seals may be damaged during installation",
            "Cut, twisted, or improperly seated seal",
            "Sharp edges, improper technique, or missing lubrication",
            "Immediate or premature seal failure",
            7,
            4,
            5,
            "assembly,sealing",
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
        assert_eq!(generate(30, &mut rng).len(), 30);
    }

    #[test]
    fn rows_carry_exactly_the_schema_fields_in_order() {
        let mut rng = rand::rng();
        for rec in generate(10, &mut rng) {
            assert_eq!(rec.keys(), CSV_HEADERS);
        }
    }

    #[test]
    fn fmea_scores_stay_in_one_to_ten() {
        let mut rng = rand::rng();
        for rec in generate(100, &mut rng) {
            for field in ["severity", "occurrence", "detection"] {
                let score: u32 = rec.field(field).unwrap().parse().unwrap();
                assert!((1..=10).contains(&score), "{field} {score} out of range");
            }
        }
    }

    #[test]
    fn risk_type_stays_in_vocabulary() {
        let mut rng = rand::rng();
        for rec in generate(50, &mut rng) {
            assert!(vocab::RISK_TYPES.contains(&rec.field("type").unwrap()));
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
