use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Missing data: {} must be filled", field_list(.0))]
    IncompleteRecord(Vec<Field>),

    #[error("Duplicate ID: a car with id '{0}' already exists")]
    DuplicateIdentity(String),

    #[error("Car not found: {0}")]
    StaleReference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl InventoryError {
    /// Validation outcomes are rejected before anything is mutated, so the
    /// caller can report them and carry on. Storage failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InventoryError::IncompleteRecord(_)
                | InventoryError::DuplicateIdentity(_)
                | InventoryError::StaleReference(_)
        )
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, InventoryError>;
