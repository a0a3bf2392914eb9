use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Car;

use super::helpers::find_car;

pub fn run(cars: &[Car]) -> CmdResult {
    CmdResult::default().with_listed_cars(cars.to_vec())
}

pub fn view(cars: &[Car], id: &str) -> Result<CmdResult> {
    let car = find_car(cars, id)?;
    Ok(CmdResult::default().with_listed_cars(vec![car.clone()]))
}
