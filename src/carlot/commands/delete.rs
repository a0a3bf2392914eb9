use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Car;
use crate::store::{remove_by_id, RecordStore};
use tracing::{info, warn};

use super::helpers::find_car;

pub fn run<S: RecordStore>(store: &mut S, cars: &mut Vec<Car>, id: &str) -> Result<CmdResult> {
    let removed = find_car(cars, id)
        .cloned()
        .inspect_err(|_| warn!(id = %id, "delete target not found"))?;

    remove_by_id(cars, id);
    store.save(cars)?;
    info!(id = %id, "car deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car deleted ({}): {}",
        removed.id,
        removed.label()
    )));
    Ok(result.with_affected_cars(vec![removed]))
}
