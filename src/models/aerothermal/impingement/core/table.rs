//! Tabular encoding of surface profiles.
//!
//! A [`ProfileTable`] holds a shared distance column and one value column per
//! engine. Its CSV form has two header rows, labels then units, followed by
//! one row per sample:
//!
//! ```text
//! distance,engine-a,engine-b
//! mm,W/m^2,W/m^2
//! 0,5705561.4,...
//! ```

use std::io::{self, Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use thiserror::Error;
use uom::si::length::millimeter;

use super::{ProfileQuantity, SurfaceProfile};

const DISTANCE_LABEL: &str = "distance";
const DISTANCE_UNIT: &str = "mm";

/// Errors from building, writing or reading a [`ProfileTable`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error("a table needs at least one profile")]
    Empty,

    /// Profiles sharing a table must be sampled on the same grid.
    #[error("profile `{label}` is not on the table's distance grid")]
    GridMismatch { label: String },

    #[error("missing {0} header row")]
    MissingHeader(&'static str),

    #[error("first column must be `distance` in `mm`, found `{0}`")]
    DistanceColumn(String),

    #[error("unknown unit label `{0}`")]
    UnknownUnit(String),

    #[error("line {line}: expected {expected} fields, found {actual}")]
    FieldCount {
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: `{value}` is not a number")]
    InvalidNumber { line: u64, value: String },

    #[error("csv error")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One engine's values in a [`ProfileTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileColumn {
    pub label: String,
    pub quantity: ProfileQuantity,
    pub values: Vec<f64>,
}

/// Surface profiles of several engines on a common distance grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    distances_mm: Vec<f64>,
    columns: Vec<ProfileColumn>,
}

impl ProfileTable {
    /// Collects labeled profiles into one table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`] with no profiles and
    /// [`TableError::GridMismatch`] if the profiles have different distances.
    pub fn from_profiles<'a, I>(profiles: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'a str, &'a SurfaceProfile)>,
    {
        let mut profiles = profiles.into_iter();
        let (label, first) = profiles.next().ok_or(TableError::Empty)?;

        let distances_mm: Vec<f64> = first
            .distances()
            .iter()
            .map(|d| d.get::<millimeter>())
            .collect();
        let mut columns = vec![column(label, first)];

        for (label, profile) in profiles {
            if profile.distances() != first.distances() {
                return Err(TableError::GridMismatch {
                    label: label.to_owned(),
                });
            }
            columns.push(column(label, profile));
        }

        Ok(Self {
            distances_mm,
            columns,
        })
    }

    /// Sample distances in millimeters.
    #[must_use]
    pub fn distances_mm(&self) -> &[f64] {
        &self.distances_mm
    }

    #[must_use]
    pub fn columns(&self) -> &[ProfileColumn] {
        &self.columns
    }

    /// Writes the table as CSV.
    ///
    /// Labels containing separators or quotes are quoted.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Csv`] or [`TableError::Io`] if writing fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);

        let labels = self.columns.iter().map(|column| column.label.as_str());
        csv_writer.write_record(std::iter::once(DISTANCE_LABEL).chain(labels))?;

        let units = self.columns.iter().map(|column| column.quantity.unit_label());
        csv_writer.write_record(std::iter::once(DISTANCE_UNIT).chain(units))?;

        for (row, distance) in self.distances_mm.iter().enumerate() {
            let values = self.columns.iter().map(|column| column.values[row]);
            csv_writer.write_record(
                std::iter::once(*distance)
                    .chain(values)
                    .map(|value| value.to_string()),
            )?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Reads a table written by [`write_csv`](Self::write_csv).
    ///
    /// Blank lines are skipped and fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] describing the first malformed line, or
    /// [`TableError::Csv`] if the input is not valid CSV.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let mut records = csv_reader.records();

        let labels = records.next().ok_or(TableError::MissingHeader("label"))??;
        let units = records.next().ok_or(TableError::MissingHeader("unit"))??;

        if labels.len() != units.len() {
            return Err(TableError::FieldCount {
                line: line_of(&units),
                expected: labels.len(),
                actual: units.len(),
            });
        }
        if labels.get(0) != Some(DISTANCE_LABEL) || units.get(0) != Some(DISTANCE_UNIT) {
            return Err(TableError::DistanceColumn(format!(
                "{} [{}]",
                labels.get(0).unwrap_or_default(),
                units.get(0).unwrap_or_default()
            )));
        }
        if labels.len() < 2 {
            return Err(TableError::Empty);
        }

        let mut columns = labels
            .iter()
            .zip(units.iter())
            .skip(1)
            .map(|(label, unit)| {
                let quantity = ProfileQuantity::from_unit_label(unit)
                    .ok_or_else(|| TableError::UnknownUnit(unit.to_owned()))?;
                Ok(ProfileColumn {
                    label: label.to_owned(),
                    quantity,
                    values: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        let mut distances_mm = Vec::new();
        for record in records {
            let record = record?;
            let line = line_of(&record);
            if record.len() != labels.len() {
                return Err(TableError::FieldCount {
                    line,
                    expected: labels.len(),
                    actual: record.len(),
                });
            }

            let mut fields = record.iter();
            let distance = fields.next().unwrap_or_default();
            distances_mm.push(parse_number(distance, line)?);
            for (column, field) in columns.iter_mut().zip(fields) {
                column.values.push(parse_number(field, line)?);
            }
        }

        Ok(Self {
            distances_mm,
            columns,
        })
    }
}

fn column(label: &str, profile: &SurfaceProfile) -> ProfileColumn {
    ProfileColumn {
        label: label.to_owned(),
        quantity: profile.quantity(),
        values: profile.values().to_vec(),
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn parse_number(field: &str, line: u64) -> Result<f64, TableError> {
    field.parse().map_err(|_| TableError::InvalidNumber {
        line,
        value: field.to_owned(),
    })
}
