//! Column sorting for the inventory table.
//!
//! Values are strings with units mixed in (`"1,200 hp"`, `"95hp"`), so each
//! value is reduced to a [`SortKey`] first: numeric when what is left after
//! stripping units and commas is a plain decimal number, text otherwise.

use crate::commands::CmdResult;
use crate::model::Car;
use std::cmp::Ordering;
use tracing::debug;

const UNIT_TOKENS: [&str; 4] = ["hp", "nm", "$", "km"];

#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Numeric(f64),
    Text(String),
}

impl SortKey {
    /// Numbers order before text when a column mixes both.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Numeric(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Numeric(_)) => Ordering::Greater,
        }
    }
}

/// An absent value sorts as zero.
pub fn parse_sort_key(value: Option<&str>) -> SortKey {
    let Some(value) = value else {
        return SortKey::Numeric(0.0);
    };

    let mut cleaned = value.to_lowercase().trim().to_string();
    for unit in UNIT_TOKENS {
        cleaned = cleaned.replace(unit, "").trim().to_string();
    }
    let cleaned = cleaned.replace(',', "").trim().to_string();

    let digits = cleaned.replacen('.', "", 1);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = cleaned.parse::<f64>() {
            return SortKey::Numeric(n);
        }
    }
    SortKey::Text(cleaned)
}

/// Stable sort by `column`. Descending is the exact reverse of ascending.
pub fn sort_cars(cars: &mut Vec<Car>, column: &str, reverse: bool) {
    let mut keyed: Vec<(SortKey, Car)> = cars
        .drain(..)
        .map(|car| (parse_sort_key(car.column(column)), car))
        .collect();
    keyed.sort_by(|a, b| a.0.compare(&b.0));
    if reverse {
        keyed.reverse();
    }
    cars.extend(keyed.into_iter().map(|(_, car)| car));
}

/// Which column the table is sorted by. Lives with the view, never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    reverse: bool,
}

impl SortState {
    /// Same column as last time flips the direction; a new column starts
    /// ascending. Returns whether the order is now descending.
    pub fn toggle(&mut self, column: &str) -> bool {
        let column = column.trim().to_lowercase();
        if self.column.as_deref() == Some(column.as_str()) {
            self.reverse = !self.reverse;
        } else {
            self.column = Some(column);
            self.reverse = false;
        }
        self.reverse
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}

pub fn run(cars: &mut Vec<Car>, state: &mut SortState, column: &str) -> CmdResult {
    let reverse = state.toggle(column);
    sort_cars(cars, column, reverse);
    debug!(column = %column, reverse, "sorted table");
    CmdResult::default().with_listed_cars(cars.clone())
}
