use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BubbleError {
    #[error("Mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("Radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("Bubble label may not be empty")]
    EmptyLabel,
    #[error("A bubble labeled `{0}` already exists")]
    DuplicateLabel(String),
    /// Two centers coincide, so no collision normal exists.
    #[error("Bubbles `{a}` and `{b}` share the same center")]
    DegenerateCollision { a: String, b: String },
    #[error("Invalid simulator configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("Failed to set up the window: {0}")]
    Window(String),
}
