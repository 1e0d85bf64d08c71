use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Movie as described by the catalog service.
///
/// Field names on the wire are the catalog's own (`img`, `alquilada`, `ano`).
/// Every field is optional and unknown fields are ignored; only the presence
/// of a descriptor matters to this service. A field whose value has the wrong
/// shape is dropped rather than failing the whole descriptor, and numeric
/// fields also accept floats and numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDescriptor {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(rename = "img", deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(rename = "alquilada", deserialize_with = "lenient")]
    pub rented: Option<bool>,
    #[serde(rename = "ano", deserialize_with = "lenient_int")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub video: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub director: Option<String>,
    #[serde(deserialize_with = "lenient_int")]
    pub price: Option<i64>,
}

/// Decode any JSON value, yielding `None` when it does not fit `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode an integer from an integer, a float (truncated) or a numeric
/// string. Anything else, or an out-of-range value, yields `None`.
fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    };
    Ok(number.and_then(|n| T::try_from(n).ok()))
}
