//! Field normalization applied to every value before it enters the table.
//!
//! Numeric fields carry their unit in the stored string (`"300 hp"`,
//! `"20000 $"`). Users type either form, so the unit is appended only when
//! it is missing. Blank values stay blank and are caught by
//! [`missing_fields`] instead.

use crate::model::{Car, Field, FieldSet};

pub fn normalize_field(field: Field, raw: &str) -> String {
    let value = raw.trim();
    match field.unit() {
        Some(unit) if !value.is_empty() && !unit.is_suffix_of(value) => {
            format!("{} {}", value, unit.symbol())
        }
        _ => value.to_string(),
    }
}

/// Normalizes every field of the set. Extra columns are passed through.
pub fn normalize_car(car: &Car, fields: &FieldSet) -> Car {
    let mut normalized = car.clone();
    for field in fields.iter() {
        let value = normalize_field(field, car.get(field));
        normalized.set(field, value);
    }
    normalized
}

pub fn missing_fields(car: &Car, fields: &FieldSet) -> Vec<Field> {
    fields
        .iter()
        .filter(|f| car.get(*f).trim().is_empty())
        .collect()
}

pub fn validate_complete(car: &Car, fields: &FieldSet) -> bool {
    missing_fields(car, fields).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_units_to_numeric_fields() {
        assert_eq!(normalize_field(Field::Hp, " 300 "), "300 hp");
        assert_eq!(normalize_field(Field::Torque, "400"), "400 Nm");
        assert_eq!(normalize_field(Field::Price, "20000"), "20000 $");
        assert_eq!(normalize_field(Field::Odometer, "12000"), "12000 km");
    }

    #[test]
    fn keeps_existing_suffix_regardless_of_case() {
        assert_eq!(normalize_field(Field::Hp, "150HP"), "150HP");
        assert_eq!(normalize_field(Field::Torque, "400 nm"), "400 nm");
        assert_eq!(normalize_field(Field::Odometer, "5 KM"), "5 KM");
        assert_eq!(normalize_field(Field::Price, "99$"), "99$");
    }

    #[test]
    fn leaves_plain_fields_trimmed_only() {
        assert_eq!(normalize_field(Field::Make, "  Volvo "), "Volvo");
        assert_eq!(normalize_field(Field::Id, "5"), "5");
        assert_eq!(normalize_field(Field::Year, "2019"), "2019");
    }

    #[test]
    fn blank_stays_blank() {
        assert_eq!(normalize_field(Field::Price, "   "), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "", " ", "5", "5 hp", "5hp", "hp", " $", "1,200", "12 KM", "x y", "$5", "nm",
        ];
        for field in Field::ALL {
            for raw in samples {
                let once = normalize_field(field, raw);
                assert_eq!(normalize_field(field, &once), once, "{} / {:?}", field, raw);
            }
        }
    }

    #[test]
    fn reports_blank_fields_in_order() {
        let fields = FieldSet::standard();
        let car = Car::new("1")
            .with(Field::Make, "Volvo")
            .with(Field::Model, " ")
            .with(Field::Year, "2010")
            .with(Field::Odometer, "1 km")
            .with(Field::Hp, "100 hp")
            .with(Field::Torque, "200 Nm");

        assert_eq!(missing_fields(&car, &fields), vec![Field::Model, Field::Price]);
        assert!(!validate_complete(&car, &fields));
    }
}
