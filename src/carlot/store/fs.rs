use super::RecordStore;
use crate::error::Result;
use crate::model::{Car, Field, FieldSet};
use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::debug;

const BOM: char = '\u{feff}';

/// Comma-delimited file storage. Each save rewrites the whole file.
pub struct CsvStore {
    path: PathBuf,
    fields: FieldSet,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fields: FieldSet::standard(),
        }
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<Vec<Car>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no inventory file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let cars = read_cars(&text)?;
        debug!(path = %self.path.display(), rows = cars.len(), "loaded inventory");
        Ok(cars)
    }

    fn save(&mut self, cars: &[Car]) -> Result<()> {
        self.ensure_parent_dir()?;
        let file = fs::File::create(&self.path)?;
        write_cars(BufWriter::new(file), cars, &self.fields)?;
        debug!(path = %self.path.display(), rows = cars.len(), "saved inventory");
        Ok(())
    }

    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Decodes inventory text. The first row is the header; short rows are
/// padded with empty values and fully blank rows are skipped.
pub fn read_cars(text: &str) -> Result<Vec<Car>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row?.iter().map(|h| h.trim().to_lowercase()).collect(),
        None => return Ok(Vec::new()),
    };

    let mut cars = Vec::new();
    for row in rows {
        let row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut car = Car::default();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(idx).map(str::trim).unwrap_or("");
            match header.parse::<Field>() {
                Ok(field) => car.set(field, value),
                Err(_) => {
                    car.extra.insert(header.clone(), value.to_string());
                }
            }
        }
        cars.push(car);
    }

    Ok(cars)
}

/// Encodes `cars` with a header of exactly `fields`, in order.
pub fn write_cars<W: io::Write>(writer: W, cars: &[Car], fields: &FieldSet) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(fields.names())?;
    for car in cars {
        out.write_record(fields.iter().map(|f| car.get(f)))?;
    }
    out.flush()?;
    Ok(())
}
