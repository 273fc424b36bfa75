//! Windrose input files: JSON reading and schema validation.
//!
//! Validation walks a `serde_json::Value`; every failure maps onto a
//! [`SchemaError`] carrying the record and measurement position.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    direction::CompassPoint,
    error::{Result, SchemaError, WindroseError},
};

pub const MEASUREMENTS_PER_RECORD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AltitudeBand {
    #[serde(rename = "~1.5km")]
    Low,
    #[serde(rename = "~3km")]
    LowMid,
    #[serde(rename = "~5-6km")]
    Mid,
    #[serde(rename = "~9km")]
    HighMid,
    #[serde(rename = "~12km")]
    High,
}

/// Bands in the order measurements appear in a record.
pub const ALTITUDE_BANDS: [AltitudeBand; MEASUREMENTS_PER_RECORD] = [
    AltitudeBand::Low,
    AltitudeBand::LowMid,
    AltitudeBand::Mid,
    AltitudeBand::HighMid,
    AltitudeBand::High,
];

impl AltitudeBand {
    pub fn label(self) -> &'static str {
        match self {
            AltitudeBand::Low => "~1.5km",
            AltitudeBand::LowMid => "~3km",
            AltitudeBand::Mid => "~5-6km",
            AltitudeBand::HighMid => "~9km",
            AltitudeBand::High => "~12km",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub speed_kph: f64,
    pub direction: CompassPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindroseRecord {
    pub date: String,
    pub time: String,
    pub data: [Measurement; MEASUREMENTS_PER_RECORD],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindroseDataset {
    pub records: Vec<WindroseRecord>,
}

/// Reads `path` and parses it as arbitrary JSON.
pub fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).map_err(|source| WindroseError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn load_dataset(path: &Path) -> Result<WindroseDataset> {
    let value = read_json(path)?;
    Ok(WindroseDataset::from_value(&value)?)
}

pub fn parse_dataset(text: &str) -> Result<WindroseDataset> {
    let value: Value = serde_json::from_str(text)?;
    Ok(WindroseDataset::from_value(&value)?)
}

impl WindroseDataset {
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let entries = value
            .get("windrose")
            .and_then(Value::as_array)
            .ok_or(SchemaError::WindroseMissing)?;

        let records = entries
            .iter()
            .enumerate()
            .map(|(record, entry)| parse_record(record, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(record: usize, entry: &Value) -> Result<WindroseRecord, SchemaError> {
    let fields = entry
        .as_object()
        .ok_or(SchemaError::MissingRecordFields { record })?;

    let (Some(date), Some(time), Some(data)) = (
        string_field(fields, "date"),
        string_field(fields, "time"),
        fields.get("data"),
    ) else {
        return Err(SchemaError::MissingRecordFields { record });
    };

    let data = data
        .as_array()
        .ok_or(SchemaError::DataNotList { record })?;
    if data.len() < MEASUREMENTS_PER_RECORD {
        return Err(SchemaError::NotEnoughMeasurements {
            record,
            found: data.len(),
        });
    }
    if data.len() > MEASUREMENTS_PER_RECORD {
        tracing::debug!(
            record,
            extra = data.len() - MEASUREMENTS_PER_RECORD,
            "ignoring measurements beyond the fifth altitude band"
        );
    }

    let measurements = data
        .iter()
        .take(MEASUREMENTS_PER_RECORD)
        .enumerate()
        .map(|(index, raw)| parse_measurement(record, index, raw))
        .collect::<Result<Vec<_>, _>>()?;
    let data = measurements
        .try_into()
        .map_err(|rest: Vec<Measurement>| SchemaError::NotEnoughMeasurements {
            record,
            found: rest.len(),
        })?;

    Ok(WindroseRecord { date, time, data })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn parse_measurement(record: usize, index: usize, raw: &Value) -> Result<Measurement, SchemaError> {
    let invalid = SchemaError::InvalidMeasurement { record, index };
    let fields = raw.as_object().ok_or_else(|| invalid.clone())?;
    let (Some(speed), Some(direction)) = (fields.get("speed_kph"), fields.get("direction")) else {
        return Err(invalid);
    };

    let speed_kph = speed
        .as_f64()
        .filter(|speed| speed.is_finite() && *speed >= 0.0)
        .ok_or(SchemaError::InvalidSpeed { record, index })?;

    let code = direction.as_str().ok_or_else(|| invalid.clone())?;
    let direction = code
        .parse::<CompassPoint>()
        .map_err(|_| SchemaError::UnknownDirection {
            record,
            index,
            code: code.to_string(),
        })?;

    Ok(Measurement {
        speed_kph,
        direction,
    })
}

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
