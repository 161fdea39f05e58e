//! Vehicle manifest CSV loader
//!
//! A manifest is a pre-sequenced vehicle list with a header row:
//!
//! ```text
//! vin,model,destination
//! VIN001,SUV,Monterrey
//! ```
//!
//! `destination` is optional. Rows keep file order and volumes come from
//! the model type table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use haulplan_domain::{ModelType, Vehicle};
use haulplan_types::Error;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Empty {column} in row {row}")]
    EmptyField { row: usize, column: String },
}

impl From<ManifestCsvError> for Error {
    fn from(err: ManifestCsvError) -> Self {
        match err {
            ManifestCsvError::IoError(e) => Error::Io(e),
            other => Error::ManifestParse(other.to_string()),
        }
    }
}

struct Columns {
    vin: usize,
    model: usize,
    destination: Option<usize>,
}

/// Load a vehicle manifest from a CSV file
pub fn load_vehicle_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>, ManifestCsvError> {
    let file = File::open(path.as_ref())?;
    let vehicles = read_vehicle_manifest(file)?;
    debug!(
        "Loaded {} vehicle(s) from {}",
        vehicles.len(),
        path.as_ref().display()
    );
    Ok(vehicles)
}

/// Read a vehicle manifest from any reader
pub fn read_vehicle_manifest<R: Read>(reader: R) -> Result<Vec<Vehicle>, ManifestCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = locate_columns(&headers)?;

    let mut vehicles = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // header is row 1
        let row_num = row_idx + 2;

        if record.iter().all(str::is_empty) {
            continue;
        }
        vehicles.push(parse_record(&record, &columns, row_num)?);
    }

    Ok(vehicles)
}

fn locate_columns(headers: &csv::StringRecord) -> Result<Columns, ManifestCsvError> {
    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    Ok(Columns {
        vin: find("vin").ok_or_else(|| ManifestCsvError::MissingColumn("vin".to_string()))?,
        model: find("model").ok_or_else(|| ManifestCsvError::MissingColumn("model".to_string()))?,
        destination: find("destination"),
    })
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    row_num: usize,
) -> Result<Vehicle, ManifestCsvError> {
    let vin = required_field(record, columns.vin, row_num, "vin")?;
    let model = required_field(record, columns.model, row_num, "model")?;

    let vehicle = Vehicle::new(vin, ModelType::parse(model));
    let destination = columns
        .destination
        .and_then(|idx| record.get(idx))
        .filter(|s| !s.is_empty());

    Ok(match destination {
        Some(destination) => vehicle.with_destination(destination),
        None => vehicle,
    })
}

fn required_field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    row_num: usize,
    column: &str,
) -> Result<&'r str, ManifestCsvError> {
    match record.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ManifestCsvError::EmptyField {
            row: row_num,
            column: column.to_string(),
        }),
    }
}
