//! # API Facade
//!
//! [`InventoryApi`] is the table controller: it owns the in-memory table
//! that mirrors the store, and it is the only thing front ends talk to.
//!
//! ## Role and Responsibilities
//!
//! - Loads the working set from the store once, at construction
//! - **Dispatches** each operation to its `commands/*.rs` module
//! - Flushes every approved mutation straight back to the store
//! - Holds the view-local sort state
//!
//! Front ends call an operation, then re-render from [`InventoryApi::cars`]
//! or the returned [`CmdResult`].
//!
//! ## Generic Over RecordStore
//!
//! - Production: `InventoryApi<CsvStore>`
//! - Testing: `InventoryApi<InMemoryStore>`
//!
//! The field set used for validation and display is the store's own, so
//! what is checked is exactly what gets written.
//!
//! ## Single writer
//!
//! Nothing here locks the backing file. Two processes editing the same
//! file will overwrite each other's changes (last save wins).

use crate::commands;
use crate::commands::sort::SortState;
use crate::error::Result;
use crate::model::{Car, FieldSet};
use crate::store::RecordStore;

pub struct InventoryApi<S: RecordStore> {
    store: S,
    cars: Vec<Car>,
    sort: SortState,
}

impl<S: RecordStore> InventoryApi<S> {
    pub fn open(store: S) -> Result<Self> {
        let cars = store.load()?;
        Ok(Self {
            store,
            cars,
            sort: SortState::default(),
        })
    }

    /// Current table, in display order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn fields(&self) -> &FieldSet {
        self.store.fields()
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-reads the store, dropping any sort order.
    pub fn reload(&mut self) -> Result<commands::CmdResult> {
        self.cars = self.store.load()?;
        self.sort = SortState::default();
        Ok(commands::list::run(&self.cars))
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.cars)
    }

    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        commands::list::view(&self.cars, id)
    }

    pub fn add(&mut self, car: &Car) -> Result<commands::CmdResult> {
        let fields = self.store.fields().clone();
        commands::add::run(&mut self.store, &mut self.cars, &fields, car)
    }

    pub fn begin_edit(&self, id: &str) -> Result<EditSession> {
        EditSession::begin(&self.cars, id)
    }

    pub fn commit_edit(&mut self, session: EditSession) -> Result<commands::CmdResult> {
        let fields = self.store.fields().clone();
        session.commit(&mut self.store, &mut self.cars, &fields)
    }

    pub fn edit(&mut self, original_id: &str, car: &Car) -> Result<commands::CmdResult> {
        let fields = self.store.fields().clone();
        commands::edit::run(
            &mut self.store,
            &mut self.cars,
            &fields,
            original_id,
            car,
        )
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.cars, id)
    }

    /// Sorts by `column`, flipping direction when it is the same column as
    /// the previous call.
    pub fn sort(&mut self, column: &str) -> commands::CmdResult {
        commands::sort::run(&mut self.cars, &mut self.sort, column)
    }

    /// Sorts in an explicit direction and records it as the current state.
    pub fn sort_by(&mut self, column: &str, reverse: bool) -> commands::CmdResult {
        self.sort.toggle(column);
        if self.sort.is_reverse() != reverse {
            self.sort.toggle(column);
        }
        commands::sort::sort_cars(&mut self.cars, column, reverse);
        commands::list::run(&self.cars)
    }

    pub fn data_path(&self) -> commands::CmdResult {
        commands::CmdResult::default().with_data_path(self.store.location())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::EditSession;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::model::Field;
    use crate::store::memory::fixtures::{car, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn api_with(cars: Vec<Car>) -> InventoryApi<InMemoryStore> {
        InventoryApi::open(InMemoryStore::with_cars(cars)).unwrap()
    }

    fn ids(api: &InventoryApi<InMemoryStore>) -> Vec<&str> {
        api.cars().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn open_loads_from_store() {
        let api = InventoryApi::open(StoreFixture::new().with_cars(2).store).unwrap();
        assert_eq!(ids(&api), vec!["1", "2"]);
    }

    #[test]
    fn add_dispatches_and_persists() {
        let mut api = api_with(vec![]);
        let draft = car("5", "Volvo", "V90").with(Field::Price, "20000");

        api.add(&draft).unwrap();

        assert_eq!(api.cars()[0].price, "20000 $");
        assert_eq!(api.store().persisted()[0].price, "20000 $");
    }

    #[test]
    fn validates_against_the_store_field_set() {
        let fields = FieldSet::new(vec![Field::Id, Field::Make, Field::Hp]).unwrap();
        let store = InMemoryStore::new().with_fields(fields.clone());
        let mut api = InventoryApi::open(store).unwrap();
        assert_eq!(api.fields(), &fields);

        // Columns outside the set are neither required nor normalized.
        let draft = Car::new("1").with(Field::Make, "Lada").with(Field::Hp, "80");
        api.add(&draft).unwrap();
        assert_eq!(api.cars()[0].hp, "80 hp");

        let err = api.add(&Car::new("2").with(Field::Make, "Fiat")).unwrap_err();
        assert!(matches!(err, InventoryError::IncompleteRecord(ref f) if f == &vec![Field::Hp]));
    }

    #[test]
    fn edit_through_session() {
        let mut api = api_with(vec![car("5", "Volvo", "V90")]);
        let mut session = api.begin_edit("5").unwrap();
        session.form_mut().set(Field::Make, "Polestar");

        api.commit_edit(session).unwrap();

        assert_eq!(api.cars()[0].make, "Polestar");
        assert_eq!(api.cars()[0].id, "5");
    }

    #[test]
    fn begin_edit_on_unknown_id_fails() {
        let api = api_with(vec![car("5", "Volvo", "V90")]);
        assert!(matches!(
            api.begin_edit("6"),
            Err(InventoryError::StaleReference(_))
        ));
    }

    #[test]
    fn delete_dispatches() {
        let mut api = api_with(vec![car("1", "A", "a"), car("2", "B", "b")]);
        api.delete("1").unwrap();
        assert_eq!(ids(&api), vec!["2"]);
        assert_eq!(api.store().persisted().len(), 1);
    }

    #[test]
    fn sort_toggles_and_is_not_persisted() {
        let mut api = api_with(vec![
            car("1", "A", "a").with(Field::Hp, "300 hp"),
            car("2", "B", "b").with(Field::Hp, "150hp"),
            car("3", "C", "c").with(Field::Hp, "1,000 hp"),
        ]);

        api.sort("hp");
        assert_eq!(ids(&api), vec!["2", "1", "3"]);
        api.sort("hp");
        assert_eq!(ids(&api), vec!["3", "1", "2"]);

        assert_eq!(api.store().save_count(), 0);
        let stored: Vec<_> = api.store().persisted().iter().map(|c| c.id.clone()).collect();
        assert_eq!(stored, vec!["1", "2", "3"]);
    }

    #[test]
    fn sort_by_sets_explicit_direction() {
        let mut api = api_with(vec![
            car("1", "A", "a").with(Field::Year, "2001"),
            car("2", "B", "b").with(Field::Year, "2010"),
        ]);

        api.sort_by("year", true);
        assert_eq!(ids(&api), vec!["2", "1"]);
        assert!(api.sort_state().is_reverse());

        api.sort("year");
        assert_eq!(ids(&api), vec!["1", "2"]);
    }

    #[test]
    fn reload_discards_sort() {
        let mut api = api_with(vec![car("2", "B", "b"), car("1", "A", "a")]);
        api.sort("id");
        assert_eq!(ids(&api), vec!["1", "2"]);

        api.reload().unwrap();
        assert_eq!(ids(&api), vec!["2", "1"]);
        assert_eq!(api.sort_state().column(), None);
    }
}
