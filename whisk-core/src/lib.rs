pub mod color;
pub mod contrast;
pub mod draft;
pub mod error;
pub mod ingredients;
pub mod instructions;
pub mod payload;
pub mod store;
pub mod tags;

pub use color::{tag_color, DEFAULT_TAG_COLOR};
pub use contrast::{readable_text_color, TEXT_BLACK, TEXT_WHITE};
pub use draft::{RecipeDraft, RecipeImage};
pub use error::{ColorError, DraftError, PayloadError};
pub use ingredients::{Ingredient, IngredientList, Unit};
pub use instructions::{EditState, InstructionList, StepEditor};
pub use payload::{DraftPayload, ImagePart, PayloadField};
pub use store::DraftStore;
pub use tags::TagList;
