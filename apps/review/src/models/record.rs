use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ReviewError;
use crate::models::feedback::{Feedback, FeedbackDraft, TipKind};

/// One ATS suggestion line. Unlike category tips these carry no long
/// explanation, just the line itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsSuggestion {
    #[serde(alias = "type")]
    pub kind: TipKind,
    pub tip: String,
}

/// The ATS-compatibility section of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: i64,
    #[serde(default)]
    pub suggestions: Vec<AtsSuggestion>,
}

/// The analyzer's full output as stored in a resume record, before
/// validation. The ATS section and any category slot may be absent; those
/// are upstream contract violations surfaced by `materialize`, not states
/// the renderer tolerates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDraft {
    pub overall_score: i64,
    #[serde(default, alias = "ATS")]
    pub ats: Option<AtsReport>,
    #[serde(flatten)]
    pub feedback: FeedbackDraft,
}

impl AnalysisDraft {
    /// Promotes the draft to a validated `Analysis`. Category slots are
    /// checked first, in display order, then the ATS section.
    pub fn materialize(self) -> Result<Analysis, ReviewError> {
        let feedback = self.feedback.materialize()?;
        let ats = self.ats.ok_or(ReviewError::MissingAts)?;
        Ok(Analysis {
            overall_score: self.overall_score,
            ats,
            feedback,
        })
    }
}

/// A validated analysis: every section present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub overall_score: i64,
    pub ats: AtsReport,
    pub feedback: Feedback,
}

/// A stored resume record as the key-value backend returns it, minus the
/// upload-flow fields (file keys, image paths) this renderer has no use for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub feedback: AnalysisDraft,
}
