//! The record model: flat JSON objects keyed by field name, plus the
//! column schema derived from them.
//!
//! Records arrive as one JSON array from the remote source. Every record
//! must carry an `id` field; ids are interned as [`Ustr`] because they
//! are cloned into the selection set and compared on every frame.
//! Field order follows the JSON document (`serde_json/preserve_order`).

use serde_json::{Map, Value};
use ustr::Ustr;

use crate::error::FetchError;

/// Stable identity of one record.
pub type RecordId = Ustr;

/// One flat row from the remote member list.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    values: Map<String, Value>,
}

impl Record {
    /// Builds a record from a decoded JSON object. Returns `None` when the
    /// object has no usable `id` (missing, null, or an empty string).
    pub fn from_object(values: Map<String, Value>) -> Option<Self> {
        let id = match values.get("id") {
            Some(Value::String(s)) if !s.is_empty() => Ustr::from(s),
            Some(Value::Number(n)) => Ustr::from(&n.to_string()),
            _ => return None,
        };
        Some(Self { id, values })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Field names in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The display text of one field; empty for unknown fields.
    pub fn field_text(&self, field: &str) -> String {
        self.values.get(field).map(value_text).unwrap_or_default()
    }

    /// Overwrites one field with plain text. The `id` field is the row's
    /// identity and is never rewritten.
    pub fn set_field(&mut self, field: &str, text: String) {
        if field == "id" {
            return;
        }
        self.values.insert(field.to_string(), Value::String(text));
    }

    /// Whether any field's display text contains `needle_lower`
    /// (which must already be lowercased). An empty needle matches.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.values
            .values()
            .any(|value| value_text(value).to_lowercase().contains(needle_lower))
    }
}

/// Display form of a JSON value: strings verbatim, everything else in its
/// JSON notation.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decodes the raw member-list body into records. Fails on anything that
/// is not a JSON array of objects, or on a record without an id.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, FetchError> {
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(bytes)?;
    objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| Record::from_object(object).ok_or(FetchError::MissingId(index)))
        .collect()
}

/// The ordered column set, derived once per load from the first record and
/// cached. Empty while no records are loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    pub fn from_records(records: &[Record]) -> Self {
        let fields = records
            .first()
            .map(|record| record.field_names().map(str::to_string).collect())
            .unwrap_or_default();
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column header label: first character uppercased, rest lowercased
    /// ("email" -> "Email", "firstName" -> "Firstname").
    pub fn column_title(field: &str) -> String {
        let mut chars = field.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        let object = value.as_object().cloned().unwrap();
        Record::from_object(object).unwrap()
    }

    #[test]
    fn decode_keeps_document_order_and_interns_ids() {
        let body = br#"[{"id":"1","name":"Alice","email":"alice@mail.com","role":"admin"}]"#;
        let records = decode_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), RecordId::from("1"));
        let fields: Vec<&str> = records[0].field_names().collect();
        assert_eq!(fields, ["id", "name", "email", "role"]);
    }

    #[test]
    fn decode_accepts_numeric_ids() {
        let records = decode_records(br#"[{"id":7,"name":"Bob"}]"#).unwrap();
        assert_eq!(records[0].id(), RecordId::from("7"));
        assert_eq!(records[0].field_text("id"), "7");
    }

    #[test]
    fn decode_rejects_records_without_id() {
        let err = decode_records(br#"[{"id":"1"},{"name":"NoId"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingId(1)), "got {err:?}");
    }

    #[test]
    fn decode_rejects_non_array_bodies() {
        assert!(matches!(
            decode_records(br#"{"id":"1"}"#).unwrap_err(),
            FetchError::Decode(_)
        ));
        assert!(matches!(
            decode_records(b"not json at all").unwrap_err(),
            FetchError::Decode(_)
        ));
    }

    #[test]
    fn matching_is_case_insensitive_across_all_fields() {
        let alice = record(json!({"id": "1", "name": "Alice", "role": "Member"}));
        assert!(alice.matches("ali"));
        assert!(alice.matches("mem"));
        assert!(alice.matches(""));
        assert!(!alice.matches("bob"));
        // Matches against the id field too.
        assert!(alice.matches("1"));
    }

    #[test]
    fn non_string_values_match_by_json_notation() {
        let row = record(json!({"id": "1", "age": 42, "active": true}));
        assert!(row.matches("42"));
        assert!(row.matches("true"));
        assert_eq!(row.field_text("age"), "42");
    }

    #[test]
    fn set_field_never_rewrites_id() {
        let mut row = record(json!({"id": "1", "name": "Alice"}));
        row.set_field("name", "Alicia".to_string());
        row.set_field("id", "999".to_string());
        assert_eq!(row.field_text("name"), "Alicia");
        assert_eq!(row.field_text("id"), "1");
        assert_eq!(row.id(), RecordId::from("1"));
    }

    #[test]
    fn schema_derives_from_first_record() {
        let records = vec![
            record(json!({"id": "1", "name": "Alice", "email": "a@mail.com"})),
            record(json!({"id": "2", "name": "Bob", "email": "b@mail.com"})),
        ];
        let schema = Schema::from_records(&records);
        assert_eq!(schema.fields(), ["id", "name", "email"]);
        assert!(Schema::from_records(&[]).is_empty());
    }

    #[test]
    fn column_titles_are_title_cased() {
        assert_eq!(Schema::column_title("email"), "Email");
        assert_eq!(Schema::column_title("ROLE"), "Role");
        assert_eq!(Schema::column_title("firstName"), "Firstname");
        assert_eq!(Schema::column_title(""), "");
    }
}
