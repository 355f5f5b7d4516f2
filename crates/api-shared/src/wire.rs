//! JSON bodies exchanged over `/api/*`.
//!
//! Field names follow the public HTTP contract exactly (`_id` for the store identity,
//! `{error}` for every failure body), so these types are used verbatim by the server and by the
//! client.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One joke from the current batch.
///
/// `id` is the 1-based position inside the batch it was fetched in and is not stable across
/// fetches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Joke {
    pub id: u32,
    pub title: String,
    pub content: String,
}

/// A stored person as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub marks: f64,
    pub age: f64,
    pub dob: String,
}

/// A numeric field as submitted by a client: either a JSON number or numeric text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The finite number this value denotes, if any.
    ///
    /// Text is trimmed and parsed with decimal/exponent syntax. `NaN` and infinities are never
    /// numbers, whichever form they arrive in.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        number.is_finite().then_some(number)
    }

    /// True when the value carries nothing: empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.trim().is_empty())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

/// Body of `POST /api/persons`.
///
/// Every field is optional at the wire level so that a missing field is reported as a
/// validation failure with a `{error}` body rather than a deserialisation failure. Unknown
/// fields are rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddPersonReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub marks: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub age: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddPersonRes {
    pub message: String,
    pub person: Person,
    pub id: String,
}

/// Failure body used by every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_serialises_identity_as_underscore_id() {
        let person = Person {
            id: "65f0c0ffee".into(),
            name: "Alice".into(),
            marks: 90.0,
            age: 21.0,
            dob: "2003-01-01".into(),
        };

        let value = serde_json::to_value(&person).expect("person should serialise");

        assert_eq!(value["_id"], "65f0c0ffee");
        assert!(value.get("id").is_none(), "identity must only appear as _id");
        assert_eq!(value["marks"].as_f64(), Some(90.0));
    }

    #[test]
    fn test_field_value_as_number() {
        assert_eq!(FieldValue::from(" 90 ").as_number(), Some(90.0));
        assert_eq!(FieldValue::from("1e2").as_number(), Some(100.0));
        assert_eq!(FieldValue::from(21.5).as_number(), Some(21.5));
        assert_eq!(FieldValue::from("ninety").as_number(), None);
        assert_eq!(FieldValue::from("NaN").as_number(), None);
        assert_eq!(FieldValue::from("inf").as_number(), None);
        assert_eq!(FieldValue::from("").as_number(), None);
    }

    #[test]
    fn test_field_value_is_blank() {
        assert!(FieldValue::from("  ").is_blank());
        assert!(!FieldValue::from("0").is_blank());
        assert!(!FieldValue::from(0.0).is_blank());
    }

    #[test]
    fn test_add_person_req_accepts_numbers_and_numeric_text() {
        let req: AddPersonReq = serde_json::from_str(
            r#"{"name":"Alice","marks":"90","age":21,"dob":"2003-01-01"}"#,
        )
        .expect("mixed numeric forms should deserialise");

        assert_eq!(req.marks, Some(FieldValue::Text("90".into())));
        assert_eq!(req.age, Some(FieldValue::Number(21.0)));
    }

    #[test]
    fn test_add_person_req_treats_absent_fields_as_none() {
        let req: AddPersonReq = serde_json::from_str(r#"{"name":"Alice","dob":"2003-01-01"}"#)
            .expect("partial payload should deserialise");

        assert_eq!(req.marks, None);
        assert_eq!(req.age, None);
    }

    #[test]
    fn test_add_person_req_rejects_unknown_fields() {
        let err = serde_json::from_str::<AddPersonReq>(
            r#"{"name":"Alice","marks":1,"age":2,"dob":"x","admin":true}"#,
        )
        .expect_err("unknown field should be rejected");

        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn test_add_person_req_rejects_mistyped_fields() {
        assert!(serde_json::from_str::<AddPersonReq>(r#"{"marks":true}"#).is_err());
        assert!(serde_json::from_str::<AddPersonReq>(r#"{"name":42}"#).is_err());
    }
}
