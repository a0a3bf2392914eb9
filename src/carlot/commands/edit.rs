use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::{Car, FieldSet};
use crate::normalize::{missing_fields, normalize_car};
use crate::store::RecordStore;
use tracing::{info, warn};

use super::helpers::{ensure_unique_id, find_car, position_of};

/// An open edit form. The id the car had when editing began is kept apart
/// from the form, so the id itself can be changed.
///
/// Dropping the session cancels it. Committing consumes it whatever the
/// outcome.
#[derive(Debug, Clone)]
pub struct EditSession {
    original_id: String,
    form: Car,
}

impl EditSession {
    /// Opens a form pre-filled with the current values of car `id`.
    pub fn begin(cars: &[Car], id: &str) -> Result<Self> {
        let car = find_car(cars, id)?;
        Ok(Self {
            original_id: car.id.clone(),
            form: car.clone(),
        })
    }

    pub fn original_id(&self) -> &str {
        &self.original_id
    }

    pub fn form_mut(&mut self) -> &mut Car {
        &mut self.form
    }

    pub fn commit<S: RecordStore>(
        self,
        store: &mut S,
        cars: &mut [Car],
        fields: &FieldSet,
    ) -> Result<CmdResult> {
        run(store, cars, fields, &self.original_id, &self.form)
    }
}

/// Replaces the car currently identified by `original_id` with `draft`,
/// keeping its position.
pub fn run<S: RecordStore>(
    store: &mut S,
    cars: &mut [Car],
    fields: &FieldSet,
    original_id: &str,
    draft: &Car,
) -> Result<CmdResult> {
    let mut car = normalize_car(draft, fields);

    let missing = missing_fields(&car, fields);
    if !missing.is_empty() {
        warn!(id = %original_id, ?missing, "rejected incomplete edit");
        return Err(InventoryError::IncompleteRecord(missing));
    }

    let Some(pos) = position_of(cars, original_id) else {
        warn!(id = %original_id, "edit target no longer exists");
        return Err(InventoryError::StaleReference(original_id.to_string()));
    };
    if let Err(e) = ensure_unique_id(cars, &car.id, Some(pos)) {
        warn!(id = %original_id, new_id = %car.id, "rejected edit to a taken id");
        return Err(e);
    }

    if car.extra.is_empty() {
        car.extra = cars[pos].extra.clone();
    }
    cars[pos] = car.clone();
    store.save(cars)?;
    info!(id = %original_id, new_id = %car.id, "car updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car updated ({}): {}",
        car.id,
        car.label()
    )));
    Ok(result.with_affected_cars(vec![car]))
}
