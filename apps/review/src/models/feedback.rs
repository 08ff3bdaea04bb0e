#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ReviewError;

/// Whether a tip praises something the resume already does well or asks for
/// a change. The aliases accept records written by the legacy analyzer,
/// which used "good"/"improve".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    #[serde(alias = "good")]
    Positive,
    #[serde(alias = "improve")]
    Improvement,
}

/// A single piece of analyzer feedback inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(alias = "type")]
    pub kind: TipKind,
    /// Short one-line version shown on the tip row.
    #[serde(alias = "tip")]
    pub summary: String,
    /// Longer version shown in the explanation box when the section is open.
    pub explanation: String,
}

/// One scored feedback category. Tip order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub score: i64,
    #[serde(default)]
    pub tips: Vec<Tip>,
}

/// The four fixed category slots of a feedback record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySlot {
    ToneAndStyle,
    Content,
    Structure,
    Skills,
}

impl CategorySlot {
    pub const ALL: [CategorySlot; 4] = [
        CategorySlot::ToneAndStyle,
        CategorySlot::Content,
        CategorySlot::Structure,
        CategorySlot::Skills,
    ];

    /// Field name of the slot in the stored analysis JSON.
    pub fn field_name(&self) -> &'static str {
        match self {
            CategorySlot::ToneAndStyle => "toneAndStyle",
            CategorySlot::Content => "content",
            CategorySlot::Structure => "structure",
            CategorySlot::Skills => "skills",
        }
    }

    /// Section id the disclosure group correlates headers and content by.
    pub fn section_id(&self) -> &'static str {
        match self {
            CategorySlot::ToneAndStyle => "tone-style",
            CategorySlot::Content => "content",
            CategorySlot::Structure => "structure",
            CategorySlot::Skills => "skills",
        }
    }

    /// Fixed header title for the category panel. Deliberately not taken
    /// from the stored `Category::title`, which upstream analyzers fill
    /// inconsistently.
    pub fn display_title(&self) -> &'static str {
        match self {
            CategorySlot::ToneAndStyle => "Tone & Style",
            CategorySlot::Content => "Content",
            CategorySlot::Structure => "Structure",
            CategorySlot::Skills => "Skills",
        }
    }
}

impl fmt::Display for CategorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A validated feedback record: all four category slots are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub tone_and_style: Category,
    pub content: Category,
    pub structure: Category,
    pub skills: Category,
}

impl Feedback {
    pub fn category(&self, slot: CategorySlot) -> &Category {
        match slot {
            CategorySlot::ToneAndStyle => &self.tone_and_style,
            CategorySlot::Content => &self.content,
            CategorySlot::Structure => &self.structure,
            CategorySlot::Skills => &self.skills,
        }
    }

    /// The categories in display order, paired with their slots.
    pub fn categories(&self) -> [(CategorySlot, &Category); 4] {
        CategorySlot::ALL.map(|slot| (slot, self.category(slot)))
    }
}

/// Wire-shaped feedback before validation: any slot may be absent, because
/// stored records come from analyzers we do not control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    #[serde(default)]
    pub tone_and_style: Option<Category>,
    #[serde(default)]
    pub content: Option<Category>,
    #[serde(default)]
    pub structure: Option<Category>,
    #[serde(default)]
    pub skills: Option<Category>,
}

impl FeedbackDraft {
    /// Promotes the draft to a validated `Feedback`, failing on the first
    /// absent slot in display order.
    pub fn materialize(self) -> Result<Feedback, ReviewError> {
        Ok(Feedback {
            tone_and_style: require(CategorySlot::ToneAndStyle, self.tone_and_style)?,
            content: require(CategorySlot::Content, self.content)?,
            structure: require(CategorySlot::Structure, self.structure)?,
            skills: require(CategorySlot::Skills, self.skills)?,
        })
    }
}

fn require(slot: CategorySlot, category: Option<Category>) -> Result<Category, ReviewError> {
    category.ok_or(ReviewError::MissingCategory(slot))
}
