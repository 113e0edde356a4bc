use crate::value::ValueKind;

/// Render the expected/actual side of a mismatch. `None` means the side
/// holds no value at that position (missing required / excess value).
fn side(kind: &Option<ValueKind>) -> String {
    match kind {
        Some(k) => k.to_string(),
        None => "nothing".to_string(),
    }
}

/// Validation and access failures for shaped records.
///
/// Both are local failures surfaced immediately to the caller. No retry,
/// no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Value count or a per-position kind disagrees with the shape.
    #[error("shape mismatch at position {position}: expected {}, got {}", side(.expected), side(.actual))]
    ShapeMismatch {
        position: usize,
        expected: Option<ValueKind>,
        actual: Option<ValueKind>,
    },

    /// Access past the values a record actually holds.
    #[error("position {position} out of range (record holds {len} values)")]
    OutOfRange { position: usize, len: usize },
}
