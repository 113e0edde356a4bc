use std::sync::Arc;

use rowshape_api::{PayStub, Shape, ShapedRecord, Slot, Value, ValueKind};

use super::error::PayReportError;

// ═══════════════════════════════════════════════════════════════
//  Shapes
// ═══════════════════════════════════════════════════════════════

/// Staff account: id, surname, email, optional role.
pub fn staff_shape() -> Arc<Shape> {
    Arc::new(Shape::new(vec![
        Slot::required(ValueKind::Int64),
        Slot::required(ValueKind::Text),
        Slot::required(ValueKind::Text),
        Slot::optional(ValueKind::Text),
    ]))
}

/// Response pair: body text, then status code.
pub fn response_shape() -> Arc<Shape> {
    Arc::new(Shape::new(vec![
        Slot::required(ValueKind::Text),
        Slot::required(ValueKind::Int64),
    ]))
}

// ═══════════════════════════════════════════════════════════════
//  Fixtures
// ═══════════════════════════════════════════════════════════════

pub fn staff() -> Result<Vec<ShapedRecord>, PayReportError> {
    let shape = staff_shape();
    let rows = [
        vec![Value::Int64(0), Value::text("Adankwo"), Value::text("adankwo.e@")],
        vec![Value::Int64(1), Value::text("Kanokwan"), Value::text("kanokwan.s@")],
        vec![
            Value::Int64(2),
            Value::text("Aneurin"),
            Value::text("aneurin.s@"),
            Value::text("Supervisor"),
        ],
    ];

    let mut staff = Vec::with_capacity(rows.len());
    for values in rows {
        staff.push(ShapedRecord::new(values, shape.clone())?);
    }
    Ok(staff)
}

/// Stubs carry one amount per elapsed month, so tails differ in length.
pub fn pay_stubs(staff: &[ShapedRecord]) -> Vec<PayStub> {
    vec![
        PayStub::new(staff[0].clone(), vec![250]),
        PayStub::new(staff[1].clone(), vec![250, 260]),
        PayStub::new(staff[0].clone(), vec![300, 300, 300]),
    ]
}
