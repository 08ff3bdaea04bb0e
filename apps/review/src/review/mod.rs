// Review assembly: turns a validated analysis plus the disclosure state
// into the view models the page renders, banded through the scoring tiers.

pub mod ats;
pub mod render;
pub mod sections;

// Re-export the public API consumed by the binary.
pub use ats::{build_ats_panel, AtsPanel};
pub use render::render_text;
pub use sections::{build_sections, score_badge, CategorySection, ScoreBadge};

use serde::Serialize;

use crate::disclosure::{DisclosureController, GroupHandle};
use crate::errors::ReviewError;
use crate::models::Analysis;

/// Everything the review page shows, in display order: the summary banner,
/// the ATS panel, then the four collapsible category sections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub overall: ScoreBadge,
    pub ats: AtsPanel,
    pub sections: Vec<CategorySection>,
}

/// Assembles the full review view. Fails only if `group` is not a live
/// disclosure group.
pub fn assemble_review(
    company_name: Option<String>,
    job_title: Option<String>,
    analysis: &Analysis,
    controller: &DisclosureController,
    group: GroupHandle,
) -> Result<ReviewView, ReviewError> {
    Ok(ReviewView {
        company_name,
        job_title,
        overall: score_badge(analysis.overall_score),
        ats: build_ats_panel(&analysis.ats),
        sections: build_sections(&analysis.feedback, controller, group)?,
    })
}
