use serde::Serialize;

use crate::banding::{classify_ats, Tier, TierPresentation};
use crate::models::{AtsReport, TipKind};
use crate::review::sections::tip_icon;

// Static copy of the ATS panel. The panel explains itself; the stored
// record only contributes the score and the suggestion lines.
pub const ATS_HEADING: &str = "ATS Score";
pub const ATS_SUBHEADING: &str = "Applicant Tracking System Compatibility";
pub const ATS_DESCRIPTION: &str = "This score indicates how well your resume will perform \
     when processed by Applicant Tracking Systems (ATS) used by employers to screen candidates.";
pub const ATS_CLOSING: &str = "Improving your ATS compatibility can significantly increase \
     your chances of getting past initial resume screenings.";

/// One suggestion line prepared for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsSuggestionView {
    pub kind: TipKind,
    pub icon: &'static str,
    pub tip: String,
}

/// The ATS-compatibility panel. Banded on the ATS scale, not the headline
/// scale, so its cut points differ from the badges around it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsPanel {
    pub score: i64,
    pub tier: Tier,
    pub icon: &'static str,
    pub score_color_class: &'static str,
    pub gradient_class: &'static str,
    pub suggestions: Vec<AtsSuggestionView>,
}

pub fn build_ats_panel(report: &AtsReport) -> AtsPanel {
    let TierPresentation {
        tier,
        icon,
        color_class,
        ..
    } = classify_ats(report.score);
    AtsPanel {
        score: report.score,
        tier,
        icon,
        score_color_class: color_class,
        gradient_class: gradient_class(tier),
        suggestions: report
            .suggestions
            .iter()
            .map(|suggestion| AtsSuggestionView {
                kind: suggestion.kind,
                icon: tip_icon(suggestion.kind),
                tip: suggestion.tip.clone(),
            })
            .collect(),
    }
}

fn gradient_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "from-green-100",
        Tier::Moderate => "from-yellow-100",
        Tier::Weak => "from-red-100",
    }
}
