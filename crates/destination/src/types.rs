//! The bidirectional map between the orchestrator's scalar type lattice and
//! store types, cell parsing, and the per-field metadata that makes the
//! store-to-orchestrator direction lossless.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use proto_fivetran::v2::{data_type_params, Column, DataType};
use serde::{Deserialize, Serialize};
use surreal_client::Value;

/// DECIMAL columns above this precision are stored as floats; the store's
/// decimal type tops out at 28 significant digits.
pub const MAX_DECIMAL_PRECISION: u32 = 28;

#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("cannot parse {input:?} as {expected}")]
    Parse { input: String, expected: &'static str },

    #[error("{input:?} is out of range for {expected}")]
    Range { input: String, expected: &'static str },

    #[error("unsupported data type {0}")]
    Unsupported(String),

    #[error("bad field metadata: {0}")]
    Metadata(String),

    #[error("timestamp is out of range")]
    Timestamp,
}

/// Per-field metadata embedded in the store field's comment. This is the
/// authoritative mapping back to the orchestrator's type space: several
/// orchestrator types share one store type, so store introspection alone is
/// lossy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub ft_index: u32,
    pub ft_data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_precision: Option<u32>,
}

impl FieldMetadata {
    pub fn new(ft_index: u32, data_type: DataType, decimal_precision: Option<u32>) -> Self {
        FieldMetadata {
            ft_index,
            ft_data_type: data_type.as_str_name().to_string(),
            decimal_precision,
        }
    }

    pub fn data_type(&self) -> Result<DataType, ValueError> {
        DataType::from_str_name(&self.ft_data_type)
            .ok_or_else(|| ValueError::Metadata(format!("unknown type {:?}", self.ft_data_type)))
    }

    pub fn to_comment(&self) -> String {
        serde_json::to_string(self).expect("metadata serializes")
    }

    pub fn from_comment(comment: &str) -> Result<FieldMetadata, ValueError> {
        serde_json::from_str(comment).map_err(|e| ValueError::Metadata(e.to_string()))
    }
}

/// The store type a column is defined with.
pub fn store_type(data_type: DataType, decimal_precision: Option<u32>) -> Result<&'static str, ValueError> {
    Ok(match data_type {
        DataType::String | DataType::Xml => "string",
        DataType::Short | DataType::Int | DataType::Long => "int",
        DataType::Float | DataType::Double => "float",
        DataType::Decimal => {
            if decimal_precision.map_or(false, |p| p > MAX_DECIMAL_PRECISION) {
                "float"
            } else {
                "decimal"
            }
        }
        DataType::Boolean => "bool",
        DataType::Binary => "bytes",
        DataType::NaiveDate | DataType::NaiveDatetime | DataType::UtcDatetime => "datetime",
        DataType::NaiveTime => "duration",
        DataType::Json => "object",
        DataType::Unspecified => {
            return Err(ValueError::Unsupported("UNSPECIFIED".to_string()))
        }
    })
}

/// The declared decimal precision of a column, when present.
pub fn decimal_precision(column: &Column) -> Option<u32> {
    match column.params.as_ref()?.params.as_ref()? {
        data_type_params::Params::Decimal(decimal) => Some(decimal.precision),
        _ => None,
    }
}

/// Converts one csv cell into a store value per the column's declared type.
/// Sentinel handling happens upstream; this sees only real values.
pub fn parse_cell(
    data_type: DataType,
    decimal_precision: Option<u32>,
    cell: &str,
) -> Result<Value, ValueError> {
    let parse = |expected: &'static str| ValueError::Parse {
        input: cell.to_string(),
        expected,
    };

    Ok(match data_type {
        DataType::String | DataType::Xml => Value::Strand(cell.to_string()),
        DataType::Boolean => match cell.to_ascii_lowercase().as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return Err(parse("BOOLEAN")),
        },
        DataType::Short => {
            let n: i64 = cell.parse().map_err(|_| parse("SHORT"))?;
            if i16::try_from(n).is_err() {
                return Err(ValueError::Range {
                    input: cell.to_string(),
                    expected: "SHORT",
                });
            }
            Value::Int(n)
        }
        DataType::Int => {
            let n: i64 = cell.parse().map_err(|_| parse("INT"))?;
            if i32::try_from(n).is_err() {
                return Err(ValueError::Range {
                    input: cell.to_string(),
                    expected: "INT",
                });
            }
            Value::Int(n)
        }
        DataType::Long => Value::Int(cell.parse().map_err(|_| parse("LONG"))?),
        DataType::Float => Value::Float(cell.parse().map_err(|_| parse("FLOAT"))?),
        DataType::Double => Value::Float(cell.parse().map_err(|_| parse("DOUBLE"))?),
        DataType::Decimal => {
            if decimal_precision.map_or(false, |p| p > MAX_DECIMAL_PRECISION) {
                Value::Float(cell.parse().map_err(|_| parse("DECIMAL"))?)
            } else {
                Value::Decimal(BigDecimal::from_str(cell).map_err(|_| parse("DECIMAL"))?)
            }
        }
        DataType::Binary => {
            Value::Bytes(base64::decode(cell).map_err(|_| parse("BINARY"))?)
        }
        DataType::NaiveDate => {
            let date =
                NaiveDate::parse_from_str(cell, "%Y-%m-%d").map_err(|_| parse("NAIVE_DATE"))?;
            let midnight = date.and_hms_opt(0, 0, 0).ok_or(ValueError::Timestamp)?;
            Value::Datetime(Utc.from_utc_datetime(&midnight))
        }
        DataType::NaiveDatetime => {
            let datetime = NaiveDateTime::parse_from_str(cell, "%Y-%m-%dT%H:%M:%S%.f")
                .map_err(|_| parse("NAIVE_DATETIME"))?;
            Value::Datetime(Utc.from_utc_datetime(&datetime))
        }
        DataType::UtcDatetime => Value::Datetime(
            DateTime::parse_from_rfc3339(cell)
                .map_err(|_| parse("UTC_DATETIME"))?
                .with_timezone(&Utc),
        ),
        DataType::NaiveTime => {
            let time = NaiveTime::parse_from_str(cell, "%H:%M:%S%.f")
                .map_err(|_| parse("NAIVE_TIME"))?;
            let midnight = NaiveTime::from_hms_opt(0, 0, 0).expect("midnight is a valid time");
            let since_midnight = (time - midnight)
                .to_std()
                .map_err(|_| parse("NAIVE_TIME"))?;
            Value::Duration(since_midnight)
        }
        DataType::Json => {
            let json: serde_json::Value =
                serde_json::from_str(cell).map_err(|_| parse("JSON"))?;
            Value::from_json(json)
        }
        DataType::Unspecified => {
            return Err(ValueError::Unsupported("UNSPECIFIED".to_string()))
        }
    })
}

/// Converts a protobuf timestamp to a datetime.
pub fn datetime_from_timestamp(
    ts: &pbjson_types::Timestamp,
) -> Result<DateTime<Utc>, ValueError> {
    let nanos = u32::try_from(ts.nanos).map_err(|_| ValueError::Timestamp)?;
    Utc.timestamp_opt(ts.seconds, nanos)
        .single()
        .ok_or(ValueError::Timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_fivetran::v2::{DataTypeParams, DecimalParams};

    #[test]
    fn store_types_follow_the_lattice() {
        assert_eq!(store_type(DataType::String, None).unwrap(), "string");
        assert_eq!(store_type(DataType::Xml, None).unwrap(), "string");
        assert_eq!(store_type(DataType::Short, None).unwrap(), "int");
        assert_eq!(store_type(DataType::Long, None).unwrap(), "int");
        assert_eq!(store_type(DataType::Double, None).unwrap(), "float");
        assert_eq!(store_type(DataType::Decimal, Some(28)).unwrap(), "decimal");
        assert_eq!(store_type(DataType::Decimal, Some(29)).unwrap(), "float");
        assert_eq!(store_type(DataType::Decimal, None).unwrap(), "decimal");
        assert_eq!(store_type(DataType::Binary, None).unwrap(), "bytes");
        assert_eq!(store_type(DataType::NaiveDate, None).unwrap(), "datetime");
        assert_eq!(store_type(DataType::NaiveTime, None).unwrap(), "duration");
        assert_eq!(store_type(DataType::Json, None).unwrap(), "object");
        assert!(store_type(DataType::Unspecified, None).is_err());
    }

    #[test]
    fn integers_enforce_ranges() {
        assert_eq!(
            parse_cell(DataType::Short, None, "123").unwrap(),
            Value::Int(123)
        );
        assert!(matches!(
            parse_cell(DataType::Short, None, "40000"),
            Err(ValueError::Range { .. })
        ));
        assert!(matches!(
            parse_cell(DataType::Int, None, "3000000000"),
            Err(ValueError::Range { .. })
        ));
        assert_eq!(
            parse_cell(DataType::Long, None, "3000000000").unwrap(),
            Value::Int(3_000_000_000)
        );
    }

    #[test]
    fn decimals_respect_the_precision_threshold() {
        assert!(matches!(
            parse_cell(DataType::Decimal, Some(10), "12.50").unwrap(),
            Value::Decimal(_)
        ));
        assert!(matches!(
            parse_cell(DataType::Decimal, Some(38), "12.50").unwrap(),
            Value::Float(_)
        ));
    }

    #[test]
    fn temporal_cells_parse() {
        let date = parse_cell(DataType::NaiveDate, None, "2024-03-01").unwrap();
        assert_eq!(
            date,
            Value::Datetime(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );

        let datetime =
            parse_cell(DataType::NaiveDatetime, None, "2024-03-01T12:30:45").unwrap();
        assert_eq!(
            datetime,
            Value::Datetime(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap())
        );

        let utc = parse_cell(DataType::UtcDatetime, None, "2024-03-01T12:30:45+02:00").unwrap();
        assert_eq!(
            utc,
            Value::Datetime(Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 45).unwrap())
        );

        let time = parse_cell(DataType::NaiveTime, None, "01:30:00").unwrap();
        assert_eq!(time, Value::Duration(std::time::Duration::from_secs(5400)));
    }

    #[test]
    fn binary_cells_are_base64() {
        assert_eq!(
            parse_cell(DataType::Binary, None, "aGVsbG8=").unwrap(),
            Value::Bytes(b"hello".to_vec())
        );
        assert!(parse_cell(DataType::Binary, None, "not base64!").is_err());
    }

    #[test]
    fn json_cells_parse_recursively() {
        let value = parse_cell(DataType::Json, None, r#"{"a": [1, 2], "b": null}"#).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(
            object.get("a").unwrap().as_array().unwrap(),
            &[Value::Int(1), Value::Int(2)]
        );
        assert!(object.get("b").unwrap().is_none());
    }

    #[test]
    fn booleans_are_strict() {
        assert_eq!(
            parse_cell(DataType::Boolean, None, "TRUE").unwrap(),
            Value::Bool(true)
        );
        assert!(parse_cell(DataType::Boolean, None, "1").is_err());
    }

    #[test]
    fn metadata_round_trips_through_comments() {
        let meta = FieldMetadata::new(3, DataType::Decimal, Some(12));
        let comment = meta.to_comment();
        assert_eq!(
            comment,
            r#"{"ft_index":3,"ft_data_type":"DECIMAL","decimal_precision":12}"#
        );
        let parsed = FieldMetadata::from_comment(&comment).unwrap();
        assert_eq!(parsed, meta);
        assert_eq!(parsed.data_type().unwrap(), DataType::Decimal);

        // The precision key is omitted when absent.
        let meta = FieldMetadata::new(0, DataType::String, None);
        assert_eq!(meta.to_comment(), r#"{"ft_index":0,"ft_data_type":"STRING"}"#);
    }

    #[test]
    fn column_precision_is_read_from_params() {
        let column = Column {
            name: "amount".to_string(),
            r#type: DataType::Decimal as i32,
            primary_key: false,
            params: Some(DataTypeParams {
                params: Some(data_type_params::Params::Decimal(DecimalParams {
                    precision: 20,
                    scale: 4,
                })),
            }),
        };
        assert_eq!(decimal_precision(&column), Some(20));
        assert_eq!(decimal_precision(&Column::default()), None);
    }
}
