use super::RecordStore;
use crate::error::Result;
use crate::model::{Car, FieldSet};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    cars: Vec<Car>,
    fields: FieldSet,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars,
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    /// The rows as of the last save.
    pub fn persisted(&self) -> &[Car] {
        &self.cars
    }

    /// How many times the inventory was flushed.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Car>> {
        Ok(self.cars.clone())
    }

    fn save(&mut self, cars: &[Car]) -> Result<()> {
        self.cars = cars.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(":memory:")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Field;

    pub fn car(id: &str, make: &str, model: &str) -> Car {
        Car::new(id)
            .with(Field::Make, make)
            .with(Field::Model, model)
            .with(Field::Year, "2015")
            .with(Field::Odometer, "90000 km")
            .with(Field::Hp, "150 hp")
            .with(Field::Torque, "250 Nm")
            .with(Field::Price, "12000 $")
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_cars(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = (self.store.cars.len() + 1).to_string();
                self.store
                    .cars
                    .push(car(&id, "Volvo", &format!("V{}", 40 + i * 10)));
            }
            self
        }

        pub fn with_car(mut self, car: Car) -> Self {
            self.store.cars.push(car);
            self
        }
    }
}
