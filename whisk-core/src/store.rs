//! Draft editing session.

use crate::draft::{RecipeDraft, RecipeImage};
use crate::error::{DraftError, PayloadError};
use crate::ingredients::Ingredient;
use crate::instructions::StepEditor;
use crate::payload::DraftPayload;

/// Owns the working draft for one editing session.
///
/// Every edit goes through here: scalar fields, the three lists, and the
/// single-slot instruction editor. `reset` returns to the draft the session
/// started from.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    base: RecipeDraft,
    draft: RecipeDraft,
    editor: StepEditor,
}

impl DraftStore {
    /// Start a session on a blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session: edit `base` if given, otherwise start blank.
    ///
    /// Replaces whatever the store held, including any open step edit.
    pub fn initialize(&mut self, base: Option<RecipeDraft>) {
        let base = base.unwrap_or_default();
        tracing::debug!("Draft session initialized (editing: {})", base.id().is_some());
        self.draft = base.clone();
        self.base = base;
        self.editor.cancel();
    }

    /// The working draft.
    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Throw away all edits and return to the session's starting draft.
    pub fn reset(&mut self) {
        tracing::debug!("Draft session reset");
        self.draft = self.base.clone();
        self.editor.cancel();
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.set_name(name);
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.set_description(description);
    }

    pub fn set_owner(&mut self, owner: &str) {
        self.draft.set_owner(owner);
    }

    /// Set preparation minutes; the total updates in the same call.
    pub fn set_prep_time(&mut self, minutes: u32) {
        self.draft.set_prep_time(minutes);
    }

    /// Set cooking minutes; the total updates in the same call.
    pub fn set_cook_time(&mut self, minutes: u32) {
        self.draft.set_cook_time(minutes);
    }

    pub fn set_total_time(&mut self, minutes: u32) {
        self.draft.set_total_time(minutes);
    }

    pub fn set_servings(&mut self, servings: u32) {
        self.draft.set_servings(servings);
    }

    pub fn set_image(&mut self, image: RecipeImage) {
        self.draft.set_image(image);
    }

    pub fn clear_image(&mut self) {
        self.draft.clear_image();
    }

    /// Add an ingredient; fails if its name is already present in any casing.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<(), DraftError> {
        self.draft.ingredients_mut().add(ingredient)
    }

    /// Remove the ingredient with exactly this name, if present.
    pub fn remove_ingredient(&mut self, name: &str) {
        self.draft.ingredients_mut().remove(name);
    }

    /// Append an instruction step. Blank text is ignored.
    pub fn add_instruction(&mut self, text: &str) {
        self.draft.instructions_mut().add(text);
    }

    /// Replace the text of an existing step.
    pub fn edit_instruction(&mut self, step: u32, text: &str) -> Result<(), DraftError> {
        self.draft.instructions_mut().edit(step, text)
    }

    /// Delete the last instruction step. Anything else is rejected.
    pub fn delete_instruction(&mut self, step: u32) -> Result<(), DraftError> {
        self.draft.instructions_mut().delete(step)
    }

    /// Open a step in the single-slot editor.
    pub fn begin_edit(&mut self, step: u32) -> Result<(), DraftError> {
        self.editor.begin(self.draft.instructions(), step)
    }

    /// Update the open edit's working text. Ignored when no edit is open.
    pub fn set_pending_text(&mut self, text: &str) {
        self.editor.set_pending_text(text);
    }

    /// Commit the open edit back to its step. A no-op when nothing is open.
    pub fn save_edit(&mut self) -> Result<(), DraftError> {
        self.editor.save(self.draft.instructions_mut())
    }

    /// Abandon the open edit, if any.
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    pub fn editing_step(&self) -> Option<u32> {
        self.editor.editing_step()
    }

    pub fn pending_text(&self) -> Option<&str> {
        self.editor.pending_text()
    }

    /// Add a tag. Empty or already-present tags are ignored.
    pub fn add_tag(&mut self, tag: &str) {
        self.draft.tags_mut().add(tag);
    }

    /// Remove every occurrence of a tag.
    pub fn remove_tag(&mut self, tag: &str) {
        self.draft.tags_mut().remove(tag);
    }

    /// Serialize the working draft for submission.
    pub fn serialize(&self) -> Result<DraftPayload, PayloadError> {
        DraftPayload::from_draft(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_starts_blank() {
        let store = DraftStore::new();
        assert_eq!(store.draft().name(), "");
        assert_eq!(store.editing_step(), None);
    }

    #[test]
    fn test_initialize_with_base_seeds_draft() {
        let mut base = RecipeDraft::new();
        base.set_name("Chili");
        let mut store = DraftStore::new();
        store.initialize(Some(base));
        assert_eq!(store.draft().name(), "Chili");
    }

    #[test]
    fn test_initialize_without_base_clears_draft() {
        let mut store = DraftStore::new();
        store.set_name("Scratch");
        store.initialize(None);
        assert_eq!(store.draft().name(), "");
    }

    #[test]
    fn test_reset_restores_base_draft() {
        let mut base = RecipeDraft::new();
        base.set_name("Chili");
        base.set_prep_time(15);
        let mut store = DraftStore::new();
        store.initialize(Some(base));

        store.set_name("Chili con carne");
        store.set_prep_time(45);
        store.add_tag("spicy");
        store.reset();

        assert_eq!(store.draft().name(), "Chili");
        assert_eq!(store.draft().prep_time(), 15);
        assert!(store.draft().tags().is_empty());
    }

    #[test]
    fn test_reset_in_create_mode_restores_blank() {
        let mut store = DraftStore::new();
        store.set_name("Scratch");
        store.add_instruction("Mix");
        store.reset();
        assert_eq!(store.draft().name(), "");
        assert!(store.draft().instructions().is_empty());
    }

    #[test]
    fn test_reset_abandons_open_edit() {
        let mut store = DraftStore::new();
        store.add_instruction("Mix");
        store.begin_edit(1).unwrap();
        store.reset();
        assert_eq!(store.editing_step(), None);
    }

    #[test]
    fn test_time_fields_stay_consistent() {
        let mut store = DraftStore::new();
        store.set_prep_time(10);
        store.set_cook_time(20);
        assert_eq!(store.draft().total_time(), 30);
        store.set_cook_time(25);
        assert_eq!(store.draft().total_time(), 35);
    }

    #[test]
    fn test_edit_session_through_store() {
        let mut store = DraftStore::new();
        store.add_instruction("Mix");
        store.begin_edit(1).unwrap();
        assert_eq!(store.pending_text(), Some("Mix"));
        store.set_pending_text("Mix thoroughly");
        store.save_edit().unwrap();
        assert_eq!(store.draft().instructions().get(1), Some("Mix thoroughly"));
        assert_eq!(store.editing_step(), None);
    }

    #[test]
    fn test_ingredient_and_tag_delegation() {
        let mut store = DraftStore::new();
        store
            .add_ingredient(Ingredient {
                name: "salt".to_string(),
                amount: 1.0,
                unit: crate::ingredients::Unit::Teaspoon,
            })
            .unwrap();
        store.add_tag("dinner");
        store.add_tag("dinner");
        store.remove_ingredient("salt");
        assert!(store.draft().ingredients().is_empty());
        assert_eq!(store.draft().tags().len(), 1);
    }
}
