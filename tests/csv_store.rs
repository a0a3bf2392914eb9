use carlot::api::InventoryApi;
use carlot::error::InventoryError;
use carlot::model::{Car, Field, FieldSet};
use carlot::store::fs::CsvStore;
use carlot::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn sample(id: &str, make: &str, hp: &str, price: &str) -> Car {
    Car::new(id)
        .with(Field::Make, make)
        .with(Field::Model, "Base")
        .with(Field::Year, "2012")
        .with(Field::Odometer, "120000 km")
        .with(Field::Hp, hp)
        .with(Field::Torque, "300 Nm")
        .with(Field::Price, price)
}

fn setup() -> (TempDir, CsvStore) {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("cars.csv"));
    (dir, store)
}

#[test]
fn test_missing_file_is_empty_inventory() {
    let (_dir, store) = setup();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_round_trip() {
    let (_dir, mut store) = setup();
    let cars = vec![
        sample("1", "Volvo", "170 hp", "2500 $"),
        sample("2", "Saab, Sweden", "150hp", "1,999 $"),
        sample("3", "BMW \"M\"", "420 hp", "41000 $"),
    ];

    store.save(&cars).unwrap();
    assert_eq!(store.load().unwrap(), cars);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lots").join("north").join("cars.csv");
    let mut store = CsvStore::new(&path);

    store.save(&[sample("1", "Audi", "200 hp", "9000 $")]).unwrap();

    assert!(path.exists());
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("id,make,model,year,odometer,hp,torque,price"));
}

#[test]
fn test_tolerates_bom_short_rows_and_blank_lines() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        "\u{feff}ID, Make ,Model,Year\n7,Fiat,Panda\n,,,\n\n8,Lada,Niva,1990\n",
    )
    .unwrap();

    let cars = store.load().unwrap();
    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].id, "7");
    assert_eq!(cars[0].year, "");
    assert_eq!(cars[0].price, "");
    assert_eq!(cars[1].year, "1990");
}

#[test]
fn test_extra_columns_are_read_but_not_written() {
    let (_dir, mut store) = setup();
    fs::write(store.path(), "id,make,color\n1,Volvo,red\n").unwrap();

    let cars = store.load().unwrap();
    assert_eq!(cars[0].extra.get("color").map(String::as_str), Some("red"));

    store.save(&cars).unwrap();
    let text = fs::read_to_string(store.path()).unwrap();
    assert!(!text.contains("color"));
    assert!(!text.contains("red"));
}

#[test]
fn test_io_failure_propagates() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes both reading and writing fail.
    let path = dir.path().join("cars.csv");
    fs::create_dir(&path).unwrap();
    let mut store = CsvStore::new(&path);

    let err = store.save(&[sample("1", "Kia", "100 hp", "1 $")]).unwrap_err();
    assert!(!err.is_recoverable());
    assert!(store.load().is_err());
}

#[test]
fn test_add_then_reload_shows_normalized_price() {
    let (dir, store) = setup();
    let mut api = InventoryApi::open(store).unwrap();

    let draft = Car::new("5")
        .with(Field::Make, "Volvo")
        .with(Field::Model, "V60")
        .with(Field::Year, "2019")
        .with(Field::Odometer, "40000")
        .with(Field::Hp, "250")
        .with(Field::Torque, "350")
        .with(Field::Price, "20000");
    api.add(&draft).unwrap();

    let reloaded = CsvStore::new(dir.path().join("cars.csv")).load().unwrap();
    assert_eq!(reloaded[0].price, "20000 $");
    assert_eq!(reloaded[0].odometer, "40000 km");
}

#[test]
fn test_failed_mutations_leave_file_untouched() {
    let (dir, mut store) = setup();
    store
        .save(&[
            sample("5", "Volvo", "190 hp", "20000 $"),
            sample("6", "Saab", "150 hp", "8000 $"),
        ])
        .unwrap();
    let path = dir.path().join("cars.csv");
    let before = fs::read(&path).unwrap();

    let mut api = InventoryApi::open(store).unwrap();

    let err = api.delete("404").unwrap_err();
    assert!(matches!(err, InventoryError::StaleReference(_)));

    let err = api
        .edit("404", &sample("404", "Ghost", "1 hp", "1 $"))
        .unwrap_err();
    assert!(matches!(err, InventoryError::StaleReference(_)));

    let err = api.add(&sample("6", "Dup", "1 hp", "1 $")).unwrap_err();
    assert!(matches!(err, InventoryError::DuplicateIdentity(_)));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_edit_keeps_id_and_updates_make() {
    let (dir, mut store) = setup();
    store
        .save(&[sample("5", "Volvo", "190 hp", "20000 $")])
        .unwrap();
    let mut api = InventoryApi::open(store).unwrap();

    let draft = api.cars()[0].clone().with(Field::Make, "Volvo Cars");
    api.edit("5", &draft).unwrap();

    let reloaded = CsvStore::new(dir.path().join("cars.csv")).load().unwrap();
    assert_eq!(reloaded[0].id, "5");
    assert_eq!(reloaded[0].make, "Volvo Cars");
}

#[test]
fn test_custom_field_order_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cars.csv");
    let fields = FieldSet::new(vec![Field::Price, Field::Id, Field::Make]).unwrap();
    let store = CsvStore::new(&path).with_fields(fields);
    let mut api = InventoryApi::open(store).unwrap();

    let draft = Car::new("3").with(Field::Make, "Skoda").with(Field::Price, "7000");
    api.add(&draft).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "price,id,make\n7000 $,3,Skoda\n");

    let reloaded = CsvStore::new(&path).load().unwrap();
    assert_eq!(reloaded[0].id, "3");
    assert_eq!(reloaded[0].make, "Skoda");
    assert_eq!(reloaded[0].price, "7000 $");
}

#[test]
fn test_unreadable_location_is_a_storage_failure() {
    let dir = TempDir::new().unwrap();
    // A regular file standing in for the parent directory.
    let blocker = dir.path().join("lot");
    fs::write(&blocker, "not a directory").unwrap();
    let store = CsvStore::new(blocker.join("cars.csv"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, InventoryError::Io(_)));
    assert!(!err.is_recoverable());
}
