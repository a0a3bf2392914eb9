use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::{Car, FieldSet};
use crate::normalize::{missing_fields, normalize_car};
use crate::store::RecordStore;
use tracing::{info, warn};

use super::helpers::ensure_unique_id;

pub fn run<S: RecordStore>(
    store: &mut S,
    cars: &mut Vec<Car>,
    fields: &FieldSet,
    draft: &Car,
) -> Result<CmdResult> {
    let car = normalize_car(draft, fields);

    let missing = missing_fields(&car, fields);
    if !missing.is_empty() {
        warn!(id = %car.id, ?missing, "rejected incomplete car");
        return Err(InventoryError::IncompleteRecord(missing));
    }
    if let Err(e) = ensure_unique_id(cars, &car.id, None) {
        warn!(id = %car.id, "rejected duplicate id");
        return Err(e);
    }

    cars.push(car.clone());
    store.save(cars)?;
    info!(id = %car.id, "car added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car added ({}): {}",
        car.id,
        car.label()
    )));
    Ok(result.with_affected_cars(vec![car]))
}
