//! Alert Entry Validator

use alerting::Alert;
use serde_json::{Map, Value};

use crate::error::ValidationError;

const STRING_FIELDS: [&str; 7] = [
    "id",
    "timestamp",
    "service",
    "component",
    "severity",
    "metric",
    "description",
];

const NUMBER_FIELDS: [&str; 2] = ["value", "threshold"];

/// Checks raw JSON entries against the alert record shape
#[derive(Debug, Clone, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate one entry and turn it into an [`Alert`]
    pub fn validate(&self, entry: &Value) -> Result<Alert, ValidationError> {
        let fields = entry.as_object().ok_or(ValidationError::NotAnObject)?;

        if let Some(unknown) = fields.keys().find(|k| !is_alert_field(k)) {
            return Err(ValidationError::UnexpectedField(unknown.clone()));
        }

        Ok(Alert {
            id: string_field(fields, "id")?,
            timestamp: string_field(fields, "timestamp")?,
            service: string_field(fields, "service")?,
            component: string_field(fields, "component")?,
            severity: string_field(fields, "severity")?,
            metric: string_field(fields, "metric")?,
            value: number_field(fields, "value")?,
            threshold: number_field(fields, "threshold")?,
            description: string_field(fields, "description")?,
        })
    }
}

fn is_alert_field(key: &str) -> bool {
    STRING_FIELDS.contains(&key) || NUMBER_FIELDS.contains(&key)
}

fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match fields.get(field) {
        None => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "string",
        }),
    }
}

fn number_field(fields: &Map<String, Value>, field: &'static str) -> Result<f64, ValidationError> {
    let value = fields.get(field).ok_or(ValidationError::MissingField(field))?;
    value.as_f64().ok_or(ValidationError::WrongType {
        field,
        expected: "number",
    })
}
