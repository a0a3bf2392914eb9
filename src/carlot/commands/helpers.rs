use crate::error::{InventoryError, Result};
use crate::model::Car;

pub fn position_of(cars: &[Car], id: &str) -> Option<usize> {
    cars.iter().position(|c| c.id == id)
}

pub fn find_car<'a>(cars: &'a [Car], id: &str) -> Result<&'a Car> {
    cars.iter()
        .find(|c| c.id == id)
        .ok_or_else(|| InventoryError::StaleReference(id.to_string()))
}

/// Fails if any car other than the one at `skip` already uses `id`.
pub fn ensure_unique_id(cars: &[Car], id: &str, skip: Option<usize>) -> Result<()> {
    let taken = cars
        .iter()
        .enumerate()
        .any(|(pos, c)| Some(pos) != skip && c.id == id);
    if taken {
        return Err(InventoryError::DuplicateIdentity(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_check_ignores_skipped_position() {
        let cars = vec![Car::new("1"), Car::new("2")];
        assert!(ensure_unique_id(&cars, "2", Some(1)).is_ok());
        assert!(matches!(
            ensure_unique_id(&cars, "2", Some(0)),
            Err(InventoryError::DuplicateIdentity(id)) if id == "2"
        ));
    }

    #[test]
    fn find_reports_stale_reference() {
        let cars = vec![Car::new("1")];
        assert!(matches!(
            find_car(&cars, "9"),
            Err(InventoryError::StaleReference(_))
        ));
    }
}
