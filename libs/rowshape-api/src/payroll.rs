use crate::error::ShapeError;
use crate::record::ShapedRecord;
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════
//  PayStub
// ═══════════════════════════════════════════════════════════════

/// One pay stub: an employee identity record plus a variable-length tail
/// of monthly amounts (whole currency units).
///
/// Positionally the account occupies position 0 and the amounts positions
/// `1..=amounts.len()`, the record-with-numeric-tail reading.
#[derive(Debug, Clone, PartialEq)]
pub struct PayStub {
    account: ShapedRecord,
    amounts: Vec<i64>,
}

impl PayStub {
    pub fn new(account: ShapedRecord, amounts: Vec<i64>) -> Self {
        Self { account, amounts }
    }

    pub fn account(&self) -> &ShapedRecord {
        &self.account
    }

    pub fn amounts(&self) -> &[i64] {
        &self.amounts
    }

    /// Amount at a stub position. Position 0 is the account, never an
    /// amount; it is out of range here, as is anything past the tail.
    pub fn amount_at(&self, position: usize) -> Result<i64, ShapeError> {
        if position == 0 || position > self.amounts.len() {
            return Err(ShapeError::OutOfRange {
                position,
                len: self.amounts.len() + 1,
            });
        }
        Ok(self.amounts[position - 1])
    }

    /// Sum of every amount on this stub.
    pub fn total(&self) -> i64 {
        self.amounts.iter().sum()
    }

    /// Employee id: position 0 of the account record, when integer.
    pub fn employee_id(&self) -> Option<i64> {
        self.account.get(0).ok().and_then(Value::as_int)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Positional sums
// ═══════════════════════════════════════════════════════════════

/// Sum of the amount at `position` across all stubs.
///
/// Strict: amounts only combine at matching relative positions, so a
/// single stub lacking the position fails the whole sum.
pub fn sum_at(stubs: &[PayStub], position: usize) -> Result<i64, ShapeError> {
    stubs.iter().map(|stub| stub.amount_at(position)).sum()
}

/// Total pay across every stub belonging to `employee_id`.
pub fn pay_for_employee(stubs: &[PayStub], employee_id: i64) -> i64 {
    stubs
        .iter()
        .filter(|stub| stub.employee_id() == Some(employee_id))
        .map(PayStub::total)
        .sum()
}
