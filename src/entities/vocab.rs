//! Fixed vocabularies for synthetic fixture generation
//!
//! Pools are small so generated titles repeat across rows the way a
//! real project's do; content is varied but deliberately non-unique.

use rand::Rng;

pub const CATEGORIES: &[&str] = &[
    "performance",
    "safety",
    "environmental",
    "electrical",
    "mechanical",
    "thermal",
    "reliability",
    "interface",
];

pub const PRIORITIES: &[&str] = &["critical", "high", "medium", "low"];
pub const STATUSES: &[&str] = &["draft", "approved", "review"];
pub const REQ_TYPES: &[&str] = &["input", "output"];
pub const RISK_TYPES: &[&str] = &["design", "process"];
pub const TEST_TYPES: &[&str] = &["verification", "validation"];
pub const TEST_LEVELS: &[&str] = &["unit", "integration", "system", "acceptance"];
pub const TEST_METHODS: &[&str] = &["test", "inspection", "analysis", "demonstration"];

/// Weighted 1:3 toward buy
pub const MAKE_BUY: &[&str] = &["make", "buy", "buy", "buy"];
pub const CMP_CATEGORIES: &[&str] = &["mechanical", "electrical", "fastener", "consumable"];

pub const ADJECTIVES: &[&str] = &[
    "Primary",
    "Secondary",
    "Auxiliary",
    "Main",
    "Critical",
    "Standard",
    "Enhanced",
    "Advanced",
    "Basic",
    "Core",
];

pub const NOUNS_REQ: &[&str] = &[
    "Temperature",
    "Pressure",
    "Speed",
    "Force",
    "Voltage",
    "Current",
    "Power",
    "Torque",
    "Flow",
    "Position",
    "Accuracy",
    "Repeatability",
    "Response",
    "Bandwidth",
    "Efficiency",
    "Life",
    "Weight",
    "Size",
    "Cost",
    "Noise",
];

pub const NOUNS_CMP: &[&str] = &[
    "Housing",
    "Bracket",
    "Shaft",
    "Bearing",
    "Seal",
    "Motor",
    "Sensor",
    "Controller",
    "Connector",
    "Cable",
    "Screw",
    "Nut",
    "Washer",
    "Spring",
    "Plate",
    "Cover",
    "Frame",
    "Mount",
    "Clip",
    "Gasket",
];

pub const NOUNS_RISK: &[&str] = &[
    "Failure",
    "Degradation",
    "Wear",
    "Corrosion",
    "Fatigue",
    "Overload",
    "Misalignment",
    "Contamination",
    "Overheating",
    "Short Circuit",
    "Leakage",
    "Vibration",
    "Noise",
    "Drift",
    "Interference",
];

/// Uniform draw from a non-empty pool
pub fn pick<'a, T>(rng: &mut impl Rng, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_stays_inside_the_pool() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let choice = pick(&mut rng, PRIORITIES);
            assert!(PRIORITIES.contains(choice));
        }
    }
}
