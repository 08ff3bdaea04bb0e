//! Score banding: maps a numeric score to a presentation tier.
//!
//! Two threshold policies coexist on purpose. The headline scale drives the
//! summary badge and the category headers; the ATS scale drives the
//! ATS-compatibility panel. The two displays use different cut points, so
//! the scale is an explicit parameter instead of a hardcoded threshold.
//!
//! Headline scale:
//! - score > 74 is Strong, labelled "Strong"
//! - score > 39 is Moderate, labelled "Cool Start"
//! - anything lower is Weak, labelled "Needs Work"
//!
//! ATS scale:
//! - score > 74 is Strong, icon `ats-good`
//! - score > 49 is Moderate, icon `ats-warning`
//! - anything lower is Weak, icon `ats-bad`
//!
//! `classify` is total: scores are clamped to the 0..=100 display range
//! before the table lookup, so an out-of-range score can never fail a
//! render. Equal inputs always produce equal outputs.

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Types
// ──────────────────────────────────────────────

/// A discrete presentation bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Strong,
    Moderate,
    Weak,
}

/// The resolved presentation for a score under one scale: the tier identity
/// plus the tokens a display needs to show it. Labels exist on the headline
/// scale only; the ATS panel communicates through its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPresentation {
    pub tier: Tier,
    pub label: Option<&'static str>,
    pub icon: &'static str,
    pub color_class: &'static str,
}

/// Named banding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Summary badge and category headers.
    Headline,
    /// ATS-compatibility panel.
    Ats,
}

/// One row of a banding table: the lowest clamped score inside the band.
struct Band {
    min: i64,
    presentation: TierPresentation,
}

// ──────────────────────────────────────────────
// Threshold tables
// ──────────────────────────────────────────────

const HEADLINE_BANDS: [Band; 3] = [
    Band {
        min: 75,
        presentation: TierPresentation {
            tier: Tier::Strong,
            label: Some("Strong"),
            icon: "check",
            color_class: "text-green-600",
        },
    },
    Band {
        min: 40,
        presentation: TierPresentation {
            tier: Tier::Moderate,
            label: Some("Cool Start"),
            icon: "warning",
            color_class: "text-yellow-600",
        },
    },
    Band {
        min: 0,
        presentation: TierPresentation {
            tier: Tier::Weak,
            label: Some("Needs Work"),
            icon: "cross",
            color_class: "text-red-600",
        },
    },
];

const ATS_BANDS: [Band; 3] = [
    Band {
        min: 75,
        presentation: TierPresentation {
            tier: Tier::Strong,
            label: None,
            icon: "ats-good",
            color_class: "text-green-600",
        },
    },
    Band {
        min: 50,
        presentation: TierPresentation {
            tier: Tier::Moderate,
            label: None,
            icon: "ats-warning",
            color_class: "text-yellow-600",
        },
    },
    Band {
        min: 0,
        presentation: TierPresentation {
            tier: Tier::Weak,
            label: None,
            icon: "ats-bad",
            color_class: "text-red-600",
        },
    },
];

// ──────────────────────────────────────────────
// Classification
// ──────────────────────────────────────────────

/// Maps a score to its presentation under the given scale.
///
/// Pure and total: clamps to 0..=100 first, then walks the table from the
/// highest band down. The last band's `min` is 0, so the walk always lands
/// on a row.
pub fn classify(scale: Scale, score: i64) -> TierPresentation {
    let table = match scale {
        Scale::Headline => &HEADLINE_BANDS,
        Scale::Ats => &ATS_BANDS,
    };
    let clamped = score.clamp(0, 100);
    table
        .iter()
        .find(|band| clamped >= band.min)
        .unwrap_or(&table[2])
        .presentation
}

/// Classifies under the headline scale (summary badge, category headers).
pub fn classify_headline(score: i64) -> TierPresentation {
    classify(Scale::Headline, score)
}

/// Classifies under the ATS scale (ATS-compatibility panel).
pub fn classify_ats(score: i64) -> TierPresentation {
    classify(Scale::Ats, score)
}
