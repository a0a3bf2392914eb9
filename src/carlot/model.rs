use crate::error::InventoryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One column of the inventory file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Make,
    Model,
    Year,
    Odometer,
    Hp,
    Torque,
    Price,
}

/// Canonical unit suffix of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Kilometers,
    Horsepower,
    NewtonMeters,
    Dollars,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kilometers => "km",
            Unit::Horsepower => "hp",
            Unit::NewtonMeters => "Nm",
            Unit::Dollars => "$",
        }
    }

    /// `$` is a symbol and compared as-is; letter units ignore case.
    pub fn is_suffix_of(&self, value: &str) -> bool {
        match self {
            Unit::Dollars => value.ends_with('$'),
            unit => value
                .to_lowercase()
                .ends_with(&unit.symbol().to_lowercase()),
        }
    }
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Id,
        Field::Make,
        Field::Model,
        Field::Year,
        Field::Odometer,
        Field::Hp,
        Field::Torque,
        Field::Price,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Make => "make",
            Field::Model => "model",
            Field::Year => "year",
            Field::Odometer => "odometer",
            Field::Hp => "hp",
            Field::Torque => "torque",
            Field::Price => "price",
        }
    }

    pub fn unit(&self) -> Option<Unit> {
        match self {
            Field::Odometer => Some(Unit::Kilometers),
            Field::Hp => Some(Unit::Horsepower),
            Field::Torque => Some(Unit::NewtonMeters),
            Field::Price => Some(Unit::Dollars),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// The ordered columns shared by the file header and the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet(Vec<Field>);

impl Default for FieldSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FieldSet {
    pub fn standard() -> Self {
        Self(Field::ALL.to_vec())
    }

    /// A custom column order. `id` is required and no field may repeat.
    pub fn new(fields: Vec<Field>) -> Result<Self, InventoryError> {
        if !fields.contains(&Field::Id) {
            return Err(InventoryError::Api("Field set must include id".into()));
        }
        for (idx, field) in fields.iter().enumerate() {
            if fields[..idx].contains(field) {
                return Err(InventoryError::Api(format!(
                    "Field listed twice: {}",
                    field
                )));
            }
        }
        Ok(Self(fields))
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|f| f.name()).collect()
    }
}

/// One vehicle listing. Values are kept as the strings shown to the user,
/// unit suffixes included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub odometer: String,
    pub hp: String,
    pub torque: String,
    pub price: String,
    /// Columns found in the file that are not part of the field set.
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Car {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Make => &self.make,
            Field::Model => &self.model,
            Field::Year => &self.year,
            Field::Odometer => &self.odometer,
            Field::Hp => &self.hp,
            Field::Torque => &self.torque,
            Field::Price => &self.price,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id,
            Field::Make => &mut self.make,
            Field::Model => &mut self.model,
            Field::Year => &mut self.year,
            Field::Odometer => &mut self.odometer,
            Field::Hp => &mut self.hp,
            Field::Torque => &mut self.torque,
            Field::Price => &mut self.price,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Looks a column up by header name: a known field first, then `extra`.
    pub fn column(&self, name: &str) -> Option<&str> {
        match name.parse::<Field>() {
            Ok(field) => Some(self.get(field)),
            Err(_) => self
                .extra
                .get(&name.trim().to_lowercase())
                .map(String::as_str),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model).trim().to_string()
    }
}
