//! The working copy of a recipe under creation or editing.

use base64::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ingredients::IngredientList;
use crate::instructions::InstructionList;
use crate::tags::TagList;

/// Raw image payload attached to a draft. The bytes are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeImage {
    /// MIME type, e.g. `image/png`.
    pub content_type: String,
    pub data: Vec<u8>,
}

impl RecipeImage {
    /// `data:` URL for previewing the image without a server round trip.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            BASE64_STANDARD.encode(&self.data)
        )
    }
}

/// A recipe being authored or edited. All times are minutes.
///
/// `total_time` always equals `prep_time + cook_time` after a prep or cook
/// change; the setters recompute it in the same call, so the three are never
/// observable out of sync.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    /// Present only on drafts opened from a persisted recipe. Stays out of
    /// the submission payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    name: String,
    description: String,
    ingredients: IngredientList,
    instructions: InstructionList,
    prep_time: u32,
    cook_time: u32,
    total_time: u32,
    servings: u32,
    owner: String,
    tags: TagList,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<RecipeImage>,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<Uuid>) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: &str) {
        self.owner = owner.to_string();
    }

    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    /// Set preparation minutes. `total_time` is recomputed in the same
    /// call, saturating at `u32::MAX`.
    pub fn set_prep_time(&mut self, minutes: u32) {
        self.prep_time = minutes;
        self.total_time = self.prep_time.saturating_add(self.cook_time);
    }

    pub fn cook_time(&self) -> u32 {
        self.cook_time
    }

    /// Set cooking minutes. `total_time` is recomputed in the same call,
    /// saturating at `u32::MAX`.
    pub fn set_cook_time(&mut self, minutes: u32) {
        self.cook_time = minutes;
        self.total_time = self.prep_time.saturating_add(self.cook_time);
    }

    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    /// Set total minutes directly, as the form's total field allows. The
    /// next prep or cook change recomputes it.
    pub fn set_total_time(&mut self, minutes: u32) {
        self.total_time = minutes;
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn set_servings(&mut self, servings: u32) {
        self.servings = servings;
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn ingredients_mut(&mut self) -> &mut IngredientList {
        &mut self.ingredients
    }

    pub fn instructions(&self) -> &InstructionList {
        &self.instructions
    }

    pub fn instructions_mut(&mut self) -> &mut InstructionList {
        &mut self.instructions
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagList {
        &mut self.tags
    }

    pub fn image(&self) -> Option<&RecipeImage> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: RecipeImage) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }
}
