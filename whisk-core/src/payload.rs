//! Transport form of a draft, shaped for a multipart submission.

use serde::Serialize;

use crate::draft::RecipeDraft;
use crate::error::PayloadError;

/// One named text field of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadField {
    pub name: &'static str,
    pub value: String,
}

/// The binary image part of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePart {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Submission payload: ordered text fields plus at most one binary image
/// part. The draft id, when present, is never included.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPayload {
    pub fields: Vec<PayloadField>,
    pub image: Option<ImagePart>,
}

impl DraftPayload {
    /// Build the submission payload for a draft.
    ///
    /// The three collections are JSON-encoded into their own text fields,
    /// scalars are written in decimal, and an attached image rides along as
    /// the one binary part, never re-encoded.
    pub fn from_draft(draft: &RecipeDraft) -> Result<Self, PayloadError> {
        let fields = vec![
            text_field("name", draft.name().to_string()),
            text_field("description", draft.description().to_string()),
            text_field("ingredients", encode("ingredients", draft.ingredients())?),
            text_field("instructions", encode("instructions", draft.instructions())?),
            text_field("prepTime", draft.prep_time().to_string()),
            text_field("cookTime", draft.cook_time().to_string()),
            text_field("totalTime", draft.total_time().to_string()),
            text_field("servings", draft.servings().to_string()),
            text_field("owner", draft.owner().to_string()),
            text_field("tags", encode("tags", draft.tags())?),
        ];
        let image = draft.image().map(|image| ImagePart {
            content_type: image.content_type.clone(),
            bytes: image.data.clone(),
        });
        Ok(Self { fields, image })
    }

    /// Value of a named text field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

fn text_field(name: &'static str, value: String) -> PayloadField {
    PayloadField { name, value }
}

/// JSON-encode one collection field.
fn encode<T: Serialize>(field: &'static str, value: &T) -> Result<String, PayloadError> {
    serde_json::to_string(value).map_err(|source| PayloadError::Encoding { field, source })
}
