use crate::domain::AppError;

/// Source of the integration-slot count for the integrate phase.
///
/// The slot count is owned by the external executable's build step; the
/// production adapter reads it from the scratch directory, while tests
/// substitute a fixed value.
pub trait SlotCount {
    /// Number of integration jobs the build step produced.
    fn count(&self) -> Result<usize, AppError>;
}
