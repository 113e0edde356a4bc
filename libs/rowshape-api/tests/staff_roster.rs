//! End-to-end exercise of the public surface: a staff roster of shaped
//! records, pay stubs over it, and positional sums across stubs.

use std::sync::Arc;

use rowshape_api::{
    PayStub, Shape, ShapeError, ShapedRecord, Slot, Value, ValueKind, pay_for_employee, sum_at,
};

fn staff_shape() -> Arc<Shape> {
    Arc::new(Shape::new(vec![
        Slot::required(ValueKind::Int64),
        Slot::required(ValueKind::Text),
        Slot::required(ValueKind::Text),
        Slot::optional(ValueKind::Text),
    ]))
}

fn roster() -> Vec<ShapedRecord> {
    let shape = staff_shape();
    [
        vec![Value::Int64(0), Value::text("Adankwo"), Value::text("adankwo.e@")],
        vec![Value::Int64(1), Value::text("Kanokwan"), Value::text("kanokwan.s@")],
        vec![
            Value::Int64(2),
            Value::text("Aneurin"),
            Value::text("aneurin.s@"),
            Value::text("Supervisor"),
        ],
    ]
    .into_iter()
    .map(|values| ShapedRecord::new(values, shape.clone()).unwrap())
    .collect()
}

#[test]
fn roster_validates_and_reads_back() {
    let staff = roster();

    assert_eq!(staff[0].get(1).unwrap().as_text(), Some("Adankwo"));
    assert_eq!(staff[2].get(3).unwrap().as_text(), Some("Supervisor"));

    // Absent optional role on the first account.
    assert_eq!(
        staff[0].get(3),
        Err(ShapeError::OutOfRange { position: 3, len: 3 })
    );
}

#[test]
fn roster_rejects_malformed_rows() {
    let shape = staff_shape();

    // Id and surname swapped.
    let err = ShapedRecord::new(
        vec![Value::text("Adankwo"), Value::Int64(0), Value::text("adankwo.e@")],
        shape.clone(),
    )
    .unwrap_err();
    assert!(matches!(err, ShapeError::ShapeMismatch { position: 0, .. }));

    // Email missing.
    let err = ShapedRecord::new(vec![Value::Int64(1), Value::text("Kanokwan")], shape).unwrap_err();
    assert_eq!(
        err,
        ShapeError::ShapeMismatch {
            position: 2,
            expected: Some(ValueKind::Text),
            actual: None,
        }
    );
}

#[test]
fn pay_stubs_sum_by_month_and_employee() {
    let staff = roster();
    let stubs = vec![
        PayStub::new(staff[0].clone(), vec![250]),
        PayStub::new(staff[1].clone(), vec![250, 260]),
        PayStub::new(staff[0].clone(), vec![300, 300, 300]),
    ];

    assert_eq!(sum_at(&stubs, 1), Ok(800));
    assert_eq!(
        sum_at(&stubs, 2),
        Err(ShapeError::OutOfRange { position: 2, len: 2 })
    );

    assert_eq!(pay_for_employee(&stubs, 0), 1150);
    assert_eq!(pay_for_employee(&stubs, 1), 510);
}
