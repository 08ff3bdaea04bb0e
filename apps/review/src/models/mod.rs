// Stored-record data model: analyzer feedback, the ATS report, and the
// resume record envelope the key-value backend hands us.

pub mod feedback;
pub mod record;

// Re-export the types consumed by the review assembly and the binary.
pub use feedback::{Category, CategorySlot, Feedback, FeedbackDraft, Tip, TipKind};
pub use record::{Analysis, AnalysisDraft, AtsReport, AtsSuggestion, ResumeRecord};
