use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Ingredient already present: {0}")]
    DuplicateIngredient(String),

    #[error("No instruction step {0}")]
    UnknownStep(u32),

    #[error("Only the last step ({last}) can be deleted, not step {step}")]
    InvalidStepDeletion { step: u32, last: u32 },

    #[error("Instruction steps must run 1, 2, ...: expected step {expected}, found {found}")]
    NonContiguousSteps { expected: u32, found: u32 },

    #[error("Tag already present: {0}")]
    DuplicateTag(String),

    #[error("Tags cannot be empty")]
    EmptyTag,
}

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Malformed hex color: {0}")]
    MalformedColor(String),
}

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Failed to encode field {field}: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
