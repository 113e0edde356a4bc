use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

// ═══════════════════════════════════════════════════════════════
//  Slot
// ═══════════════════════════════════════════════════════════════

/// One declared position in a shape.
///
/// `optional` only relaxes length at the tail: an optional slot followed
/// by a required one must still be populated (kind-checked as usual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub kind: ValueKind,
    #[serde(default)]
    pub optional: bool,
}

impl Slot {
    /// Shortcut: slot that must be populated.
    pub fn required(kind: ValueKind) -> Self {
        Self { kind, optional: false }
    }

    /// Shortcut: slot that may be absent.
    pub fn optional(kind: ValueKind) -> Self {
        Self { kind, optional: true }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Shape
// ═══════════════════════════════════════════════════════════════

/// Positional shape of a record.
///
/// Slot index IS the value position. `rest` is the kind applied to every
/// position past the declared slots, unbounded count. Without `rest`,
/// the declared slots are also the maximum length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub slots: Vec<Slot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<ValueKind>,
}

impl Shape {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots, rest: None }
    }

    /// Fixed prefix plus a repeatable trailing kind.
    pub fn with_rest(slots: Vec<Slot>, rest: ValueKind) -> Self {
        Self { slots, rest: Some(rest) }
    }

    /// No fixed prefix at all: any length, one kind everywhere.
    /// The degenerate "plain array" shape.
    pub fn uniform(kind: ValueKind) -> Self {
        Self { slots: Vec::new(), rest: Some(kind) }
    }

    /// Number of declared slots.
    pub fn fixed_len(&self) -> usize {
        self.slots.len()
    }

    /// Smallest accepted value count: position after the last required slot.
    pub fn min_len(&self) -> usize {
        self.slots
            .iter()
            .rposition(|s| !s.optional)
            .map_or(0, |i| i + 1)
    }

    /// Declared kind at `position`: slot kind, else rest kind.
    pub fn kind_at(&self, position: usize) -> Option<ValueKind> {
        self.slots
            .get(position)
            .map(|s| s.kind)
            .or(self.rest)
    }

    pub fn has_rest(&self) -> bool {
        self.rest.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_skips_trailing_optionals_only() {
        let shape = Shape::new(vec![
            Slot::required(ValueKind::Int64),
            Slot::optional(ValueKind::Text),
            Slot::required(ValueKind::Text),
            Slot::optional(ValueKind::Text),
        ]);
        // Optional at index 1 sits before a required slot, so it still counts
        // toward the mandatory prefix.
        assert_eq!(shape.min_len(), 3);
        assert_eq!(shape.fixed_len(), 4);
    }

    #[test]
    fn uniform_has_no_fixed_prefix() {
        let shape = Shape::uniform(ValueKind::Float64);
        assert!(shape.has_rest());
        assert_eq!(shape.min_len(), 0);
        assert_eq!(shape.fixed_len(), 0);
        assert_eq!(shape.kind_at(0), Some(ValueKind::Float64));
        assert_eq!(shape.kind_at(17), Some(ValueKind::Float64));
    }

    #[test]
    fn kind_at_falls_back_to_rest() {
        let shape = Shape::with_rest(
            vec![Slot::required(ValueKind::Text)],
            ValueKind::Int64,
        );
        assert_eq!(shape.kind_at(0), Some(ValueKind::Text));
        assert_eq!(shape.kind_at(1), Some(ValueKind::Int64));

        let no_rest = Shape::new(vec![Slot::required(ValueKind::Text)]);
        assert!(!no_rest.has_rest());
        assert_eq!(no_rest.kind_at(1), None);
    }
}
