use serde::Serialize;

use crate::banding::{classify_headline, Tier, TierPresentation};
use crate::disclosure::{DisclosureController, GroupHandle};
use crate::errors::ReviewError;
use crate::models::{Category, CategorySlot, Feedback, TipKind};

/// Score badge shown in the summary banner and on every category header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBadge {
    pub score: i64,
    pub tier: Tier,
    pub label: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
    pub background_class: &'static str,
}

/// Resolves a score into its headline badge.
pub fn score_badge(score: i64) -> ScoreBadge {
    let TierPresentation {
        tier,
        label,
        icon,
        color_class,
    } = classify_headline(score);
    ScoreBadge {
        score,
        tier,
        // Headline bands always carry a label.
        label: label.unwrap_or_default(),
        icon,
        color_class,
        background_class: badge_background(tier),
    }
}

fn badge_background(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "bg-badge-green",
        Tier::Moderate => "bg-badge-yellow",
        Tier::Weak => "bg-badge-red",
    }
}

/// Icon token for a tip or suggestion line.
pub fn tip_icon(kind: TipKind) -> &'static str {
    match kind {
        TipKind::Positive => "check",
        TipKind::Improvement => "warning",
    }
}

fn explanation_box_class(kind: TipKind) -> &'static str {
    match kind {
        TipKind::Positive => "bg-green-50 border-green-100",
        TipKind::Improvement => "bg-yellow-50 border-yellow-100",
    }
}

/// A tip prepared for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipView {
    pub kind: TipKind,
    pub icon: &'static str,
    pub summary: String,
    pub explanation: String,
    pub box_class: &'static str,
}

/// One collapsible category panel: header data plus its tips. `open` is the
/// disclosure state at assembly time; collapsed panels still carry their
/// tips so a re-render after a toggle needs no new data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub section_id: &'static str,
    pub title: &'static str,
    pub badge: ScoreBadge,
    pub open: bool,
    pub tips: Vec<TipView>,
}

/// Builds the four category sections in display order, asking the
/// disclosure controller which panels are currently open.
pub fn build_sections(
    feedback: &Feedback,
    controller: &DisclosureController,
    group: GroupHandle,
) -> Result<Vec<CategorySection>, ReviewError> {
    let mut sections = Vec::with_capacity(CategorySlot::ALL.len());
    for (slot, category) in feedback.categories() {
        let section_id = slot.section_id();
        sections.push(CategorySection {
            section_id,
            title: slot.display_title(),
            badge: score_badge(category.score),
            open: controller.is_open(group, section_id)?,
            tips: tip_views(category),
        });
    }
    Ok(sections)
}

fn tip_views(category: &Category) -> Vec<TipView> {
    category
        .tips
        .iter()
        .map(|tip| TipView {
            kind: tip.kind,
            icon: tip_icon(tip.kind),
            summary: tip.summary.clone(),
            explanation: tip.explanation.clone(),
            box_class: explanation_box_class(tip.kind),
        })
        .collect()
}
