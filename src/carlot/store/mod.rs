//! # Storage Layer
//!
//! The [`RecordStore`] trait is the seam between the table controller and
//! persistence. A store holds no cached rows: it decodes the backing data on
//! [`RecordStore::load`] and rewrites it completely on [`RecordStore::save`].
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production storage, one comma-delimited file
//!   - header row of field names, one row per car
//!   - missing file reads as an empty inventory
//!   - full overwrite on save, no atomic rename
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - no persistence
//!   - counts saves so tests can assert when a flush happened
//!
//! ## Storage Format
//!
//! ```text
//! id,make,model,year,odometer,hp,torque,price
//! 1,Volvo,V70,2004,210000 km,170 hp,230 Nm,2500 $
//! ```
//!
//! Header names are matched after trimming and lower-casing. Unknown columns
//! are read into [`Car::extra`] but never written back.

use crate::error::Result;
use crate::model::{Car, FieldSet};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory storage.
pub trait RecordStore {
    /// Read every car. A store with nothing persisted yet returns an empty list.
    fn load(&self) -> Result<Vec<Car>>;

    /// Replace the persisted inventory with `cars`, in order.
    fn save(&mut self, cars: &[Car]) -> Result<()>;

    /// Columns written by `save`, in order. Validation uses the same set.
    fn fields(&self) -> &FieldSet;

    /// Where the data lives, for display. Virtual for non-file stores.
    fn location(&self) -> PathBuf;
}

/// Removes the first car whose id equals `id` (string comparison).
pub fn remove_by_id(cars: &mut Vec<Car>, id: &str) -> bool {
    match cars.iter().position(|c| c.id == id) {
        Some(pos) => {
            cars.remove(pos);
            true
        }
        None => false,
    }
}
