use rowshape_api::{ShapedRecord, Value, pay_for_employee, sum_at};
use tracing::{info, warn};

use super::error::PayReportError;
use super::roster;

pub fn run() -> Result<(), PayReportError> {
    let staff = roster::staff()?;
    let stubs = roster::pay_stubs(&staff);

    // Monthly payouts. A month is only summable when every stub carries
    // an amount at that position; otherwise report and move on.
    for month in 1..=3usize {
        match sum_at(&stubs, month) {
            Ok(total) => info!(month, total, "monthly payout"),
            Err(e) => warn!(month, %e, "month not summable across all stubs"),
        }
    }

    for account in &staff {
        let id = account
            .get(0)?
            .as_int()
            .expect("staff shape declares int64 at position 0");
        let surname = account.get(1)?.as_text().unwrap_or_default();
        let total = pay_for_employee(&stubs, id);
        info!(id, surname, total, "employee pay");
    }

    // A validated response pair: print the parsed body when the status
    // says there is one.
    let response = ShapedRecord::new(
        vec![Value::text("{}"), Value::Int64(200)],
        roster::response_shape(),
    )?;
    if response.get(1)?.as_int() == Some(200) {
        let body = response.get(0)?.as_text().unwrap_or_default();
        let parsed: serde_json::Value = serde_json::from_str(body)?;
        println!("{parsed}");
    }

    Ok(())
}
