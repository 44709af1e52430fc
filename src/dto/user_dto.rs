use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// Body accepted by the create and update routes. Any `id` sent by the client
/// is ignored; absent fields default to empty strings.
///
/// Keys match case-insensitively (an exact match wins) and a `null` body or
/// field leaves the corresponding values empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserPayload {
    /// Strict parse used by create: malformed JSON, a body that is not an
    /// object, or a field that is not a string is an error.
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        let value: JsonValue = serde_json::from_slice(body)?;
        Self::from_value(value, true)
    }

    /// Lenient parse used by update: malformed JSON yields empty fields, and a
    /// field of the wrong type is skipped while the others are kept.
    pub fn parse_or_default(body: &[u8]) -> Self {
        serde_json::from_slice::<JsonValue>(body)
            .and_then(|value| Self::from_value(value, false))
            .unwrap_or_default()
    }

    fn from_value(value: JsonValue, strict: bool) -> serde_json::Result<Self> {
        let map = match value {
            JsonValue::Null => return Ok(Self::default()),
            JsonValue::Object(map) => map,
            other => {
                return Err(serde_json::Error::custom(format!(
                    "cannot decode {} into a user payload",
                    json_kind(&other)
                )))
            }
        };

        let mut payload = Self::default();
        let mut first_error = None;
        for (key, slot) in [("name", &mut payload.name), ("email", &mut payload.email)] {
            match field(&map, key) {
                None | Some(JsonValue::Null) => {}
                Some(JsonValue::String(value)) => *slot = value.clone(),
                Some(other) => {
                    first_error.get_or_insert_with(|| {
                        serde_json::Error::custom(format!(
                            "cannot decode {} into field {}",
                            json_kind(other),
                            key
                        ))
                    });
                }
            }
        }

        match first_error {
            Some(err) if strict => Err(err),
            _ => Ok(payload),
        }
    }
}

fn field<'a>(map: &'a Map<String, JsonValue>, key: &str) -> Option<&'a JsonValue> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
