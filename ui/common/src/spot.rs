use anyhow::Context;
use macros::Json;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Coordinates in degrees, used as-is for marker placement.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A study spot as injected into the map page.
///
/// Only the fields the map needs are kept; the rest of the post record
/// (`netid`, `googlemaps`, `wifi`, ...) is ignored while parsing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Json)]
pub struct Spot {
    #[serde(rename = "_id", deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub location: String,
    #[serde(
        default,
        deserialize_with = "truthy_latlng",
        skip_serializing_if = "Option::is_none"
    )]
    pub latlng: Option<LatLng>,
}

impl Spot {
    pub fn new(id: impl Into<String>, location: impl Into<String>, latlng: Option<LatLng>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            latlng,
        }
    }

    /// Parses the injected `posts` list record by record.
    ///
    /// A record that is not a valid spot is logged and skipped, the others are
    /// kept. Only a value that is not a list at all is an error.
    pub fn list_from_value(value: Value) -> anyhow::Result<Vec<Self>> {
        let records = match value {
            Value::Array(records) => records,
            other => anyhow::bail!("Expected a list of spots, got {}", json_kind(&other)),
        };

        let spots = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match Self::from_value(record) {
                Ok(spot) => Some(spot),
                Err(e) => {
                    log::warn!("Skipping spot #{index}: {e:#}");
                    None
                }
            })
            .collect();

        Ok(spots)
    }

    pub fn list_from_json(json: &str) -> anyhow::Result<Vec<Self>> {
        let value: Value = serde_json::from_str(json).context("Cannot parse spots as JSON")?;
        Self::list_from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// Same notion of "falsy" as the page scripts that produce `posts`
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_latlng<'de, D>(deserializer: D) -> Result<Option<LatLng>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }

    LatLng::deserialize(value)
        .map(Some)
        .map_err(|e| de::Error::custom(format!("invalid latlng: {e}")))
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number for `_id`, got {other}"
        ))),
    }
}
