use std::sync::Arc;

use crate::error::ShapeError;
use crate::shape::Shape;
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════
//  ShapedRecord
// ═══════════════════════════════════════════════════════════════

/// Immutable positional record, validated against its shape once at
/// construction. After `new` succeeds, every position is guaranteed to
/// hold its declared kind.
///
/// The shape is shared via `Arc`: one shape typically describes many
/// records.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRecord {
    shape: Arc<Shape>,
    values: Vec<Value>,
}

impl ShapedRecord {
    /// Validate `values` against `shape`.
    ///
    /// Walks positions in order and reports the first disagreement:
    /// a kind mismatch, an excess value (no rest kind), or a missing
    /// required value.
    pub fn new(values: Vec<Value>, shape: Arc<Shape>) -> Result<Self, ShapeError> {
        for (position, value) in values.iter().enumerate() {
            match shape.kind_at(position) {
                Some(expected) if expected == value.kind() => {}
                Some(expected) => {
                    return Err(ShapeError::ShapeMismatch {
                        position,
                        expected: Some(expected),
                        actual: Some(value.kind()),
                    });
                }
                None => {
                    return Err(ShapeError::ShapeMismatch {
                        position,
                        expected: None,
                        actual: Some(value.kind()),
                    });
                }
            }
        }

        if values.len() < shape.min_len() {
            return Err(ShapeError::ShapeMismatch {
                position: values.len(),
                expected: shape.kind_at(values.len()),
                actual: None,
            });
        }

        Ok(Self { shape, values })
    }

    /// Value at `position`. Positions past the held values fail with
    /// `OutOfRange`. A declared-but-absent optional slot has no value.
    pub fn get(&self, position: usize) -> Result<&Value, ShapeError> {
        self.values.get(position).ok_or(ShapeError::OutOfRange {
            position,
            len: self.values.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}
