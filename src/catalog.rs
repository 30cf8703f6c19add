//! Static reference data, loaded at compile time and never mutated.
//!
//! The record kind is an explicit variant chosen when the table is built,
//! not inferred at render time from which optional fields happen to be
//! present.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnatomyEntry {
    Component {
        name: &'static str,
        role: &'static str,
    },
    Gland {
        name: &'static str,
        role: &'static str,
        hormones: &'static [&'static str],
    },
}

impl AnatomyEntry {
    pub fn name(&self) -> &'static str {
        match self {
            AnatomyEntry::Component { name, .. } => name,
            AnatomyEntry::Gland { name, .. } => name,
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            AnatomyEntry::Component { role, .. } => role,
            AnatomyEntry::Gland { role, .. } => role,
        }
    }
}

#[derive(Debug)]
pub struct BodySystem {
    pub name: &'static str,
    pub summary: &'static str,
    pub entries: &'static [AnatomyEntry],
}

pub const SYSTEMS: &[BodySystem] = &[
    BodySystem {
        name: "cardiovascular",
        summary: "Circulates blood, oxygen and nutrients through the body.",
        entries: &[
            AnatomyEntry::Component {
                name: "heart",
                role: "Four-chambered pump driving circulation.",
            },
            AnatomyEntry::Component {
                name: "arteries",
                role: "Carry oxygenated blood away from the heart.",
            },
            AnatomyEntry::Component {
                name: "veins",
                role: "Return deoxygenated blood to the heart.",
            },
        ],
    },
    BodySystem {
        name: "respiratory",
        summary: "Exchanges oxygen and carbon dioxide with the air.",
        entries: &[
            AnatomyEntry::Component {
                name: "lungs",
                role: "Primary site of gas exchange.",
            },
            AnatomyEntry::Component {
                name: "diaphragm",
                role: "Muscle driving the breathing cycle.",
            },
        ],
    },
    BodySystem {
        name: "endocrine",
        summary: "Regulates metabolism, growth and mood through hormones.",
        entries: &[
            AnatomyEntry::Gland {
                name: "thyroid",
                role: "Controls metabolic rate.",
                hormones: &["thyroxine", "triiodothyronine", "calcitonin"],
            },
            AnatomyEntry::Gland {
                name: "adrenal",
                role: "Drives the stress response.",
                hormones: &["cortisol", "adrenaline", "aldosterone"],
            },
            AnatomyEntry::Gland {
                name: "pineal",
                role: "Regulates the sleep-wake cycle.",
                hormones: &["melatonin"],
            },
        ],
    },
];

pub fn find_system(name: &str) -> Option<&'static BodySystem> {
    SYSTEMS
        .iter()
        .find(|system| system.name.eq_ignore_ascii_case(name))
}

pub fn find_entry(name: &str) -> Option<&'static AnatomyEntry> {
    SYSTEMS
        .iter()
        .flat_map(|system| system.entries.iter())
        .find(|entry| entry.name().eq_ignore_ascii_case(name))
}
