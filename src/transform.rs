// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory rewrite of a form export. No filesystem access happens here.

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::ConvertError;
use crate::templates;

/// Top-level key under which Gravity Forms exports the form record.
pub const RECORD_KEY: &str = "0";

const REQUIRED_KEYS: [&str; 3] = ["title", "confirmations", "notifications"];

/// Non-fatal findings while converting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    NoConfirmations { source_name: String },
    FewerThanTwoNotifications { source_name: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoConfirmations { source_name } => {
                write!(f, "Warning: No confirmations found to replace in '{}'.", source_name)
            }
            Warning::FewerThanTwoNotifications { source_name } => {
                write!(f, "Warning: Less than two notifications found in '{}'.", source_name)
            }
        }
    }
}

/// Result of converting one document.
#[derive(Debug)]
pub struct Conversion {
    /// File name derived from the trimmed form title, e.g. `Contact.json`.
    pub output_name: String,
    /// Serialized document, UTF-8, four-space indented.
    pub contents: Vec<u8>,
    pub warnings: Vec<Warning>,
}

/// Parse `input`, swap in the template confirmations and notifications and
/// serialize the whole document again.
///
/// `source_name` only appears in warnings and error messages.
pub fn convert_document(source_name: &str, input: &str) -> Result<Conversion, ConvertError> {
    let mut document: Value = serde_json::from_str(input).map_err(|source| ConvertError::Parse {
        source_name: source_name.to_string(),
        source,
    })?;

    let (output_name, warnings) = replace_sections(source_name, &mut document)?;
    let contents = to_pretty_json(&document).map_err(|source| ConvertError::Serialize {
        source_name: source_name.to_string(),
        source,
    })?;

    Ok(Conversion {
        output_name,
        contents,
        warnings,
    })
}

/// Rewrite `document` in place. Returns the output file name and any warnings.
pub fn replace_sections(
    source_name: &str,
    document: &mut Value,
) -> Result<(String, Vec<Warning>), ConvertError> {
    let record = document
        .get_mut(RECORD_KEY)
        .ok_or_else(|| ConvertError::MissingRecord {
            source_name: source_name.to_string(),
        })?
        .as_object_mut()
        .ok_or_else(|| ConvertError::RecordNotObject {
            source_name: source_name.to_string(),
        })?;

    for key in REQUIRED_KEYS {
        if !record.contains_key(key) {
            return Err(ConvertError::MissingKey {
                source_name: source_name.to_string(),
                key,
            });
        }
    }

    let title = record
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| ConvertError::WrongType {
            source_name: source_name.to_string(),
            key: "title",
            expected: "a string",
        })?;
    let output_name = format!("{}.json", title.trim());

    let confirmations = array_field(record, "confirmations", source_name)?;
    let notifications = array_field(record, "notifications", source_name)?;

    let mut warnings = Vec::new();
    if confirmations.is_empty() {
        warnings.push(Warning::NoConfirmations {
            source_name: source_name.to_string(),
        });
    }
    if notifications.len() < 2 {
        warnings.push(Warning::FewerThanTwoNotifications {
            source_name: source_name.to_string(),
        });
    }

    let confirm_id = original_id(confirmations, 0);
    let notif_id_1 = original_id(notifications, 0);
    let notif_id_2 = original_id(notifications, 1);
    log::debug!(
        "{}: keeping ids confirmation={} notifications=[{}, {}]",
        source_name,
        confirm_id,
        notif_id_1,
        notif_id_2
    );

    // Existing keys keep their position in the record.
    record.insert(
        "confirmations".to_string(),
        Value::Array(vec![templates::confirmation(confirm_id)]),
    );
    record.insert(
        "notifications".to_string(),
        Value::Array(vec![
            templates::admin_notification(notif_id_1),
            templates::customer_notification(notif_id_2),
        ]),
    );

    Ok((output_name, warnings))
}

fn array_field<'a>(
    record: &'a Map<String, Value>,
    key: &'static str,
    source_name: &str,
) -> Result<&'a [Value], ConvertError> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ConvertError::WrongType {
            source_name: source_name.to_string(),
            key,
            expected: "an array",
        })
}

/// The `id` of `items[index]`, or an empty string when the element or its id is missing.
fn original_id(items: &[Value], index: usize) -> Value {
    items
        .get(index)
        .and_then(|item| item.get("id"))
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

/// Four-space indentation, non-ASCII kept as UTF-8, no trailing newline.
pub fn to_pretty_json(document: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(input: Value) -> Result<(Value, Conversion), ConvertError> {
        let conversion = convert_document("form.json", &input.to_string())?;
        let output = serde_json::from_slice(&conversion.contents).unwrap();
        Ok((output, conversion))
    }

    fn form(confirmations: Value, notifications: Value) -> Value {
        json!({
            "0": {
                "title": "Contact",
                "confirmations": confirmations,
                "notifications": notifications,
            }
        })
    }

    #[test]
    fn contact_form_keeps_ids() {
        let input = form(json!([{"id": "1"}]), json!([{"id": "2"}, {"id": "3"}]));
        let (output, conversion) = convert(input).unwrap();

        assert_eq!(conversion.output_name, "Contact.json");
        assert!(conversion.warnings.is_empty());

        let record = &output["0"];
        assert_eq!(record["confirmations"], json!([templates::confirmation(json!("1"))]));
        assert_eq!(
            record["notifications"],
            json!([
                templates::admin_notification(json!("2")),
                templates::customer_notification(json!("3"))
            ])
        );
    }

    #[test]
    fn output_lengths_do_not_depend_on_input_lengths() {
        let many: Vec<Value> = (0..5).map(|i| json!({"id": i.to_string()})).collect();
        let cases = [
            (json!([]), json!([])),
            (json!([{"id": "a"}]), json!([{"id": "b"}])),
            (Value::Array(many.clone()), Value::Array(many)),
        ];

        for (confirmations, notifications) in cases {
            let (output, _) = convert(form(confirmations, notifications)).unwrap();
            assert_eq!(output["0"]["confirmations"].as_array().unwrap().len(), 1);
            assert_eq!(output["0"]["notifications"].as_array().unwrap().len(), 2);
        }
    }

    #[test]
    fn missing_ids_become_empty_strings() {
        let input = form(json!([{"name": "old"}]), json!([{"id": "7"}]));
        let (output, conversion) = convert(input).unwrap();

        assert_eq!(output["0"]["confirmations"][0]["id"], "");
        assert_eq!(output["0"]["notifications"][0]["id"], "7");
        assert_eq!(output["0"]["notifications"][1]["id"], "");
        assert_eq!(
            conversion.warnings,
            vec![Warning::FewerThanTwoNotifications {
                source_name: "form.json".to_string()
            }]
        );
    }

    #[test]
    fn empty_sections_warn() {
        let (_, conversion) = convert(form(json!([]), json!([]))).unwrap();
        let messages: Vec<String> = conversion.warnings.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "Warning: No confirmations found to replace in 'form.json'.",
                "Warning: Less than two notifications found in 'form.json'."
            ]
        );
    }

    #[test]
    fn numeric_ids_are_carried_over_unchanged() {
        let (output, _) = convert(form(json!([{"id": 12}]), json!([{"id": 1}, {"id": 2}]))).unwrap();
        assert_eq!(output["0"]["confirmations"][0]["id"], json!(12));
        assert_eq!(output["0"]["notifications"][1]["id"], json!(2));
    }

    #[test]
    fn other_fields_and_key_order_survive() {
        let input = r#"{"version": "2.5", "0": {"title": "  My Form  ", "fields": [{"id": 1, "label": "Größe"}], "confirmations": [], "notifications": [], "is_active": "1"}}"#;
        let conversion = convert_document("form.json", input).unwrap();
        assert_eq!(conversion.output_name, "My Form.json");

        let output: Value = serde_json::from_slice(&conversion.contents).unwrap();
        assert_eq!(output["version"], "2.5");
        assert_eq!(output["0"]["fields"], json!([{"id": 1, "label": "Größe"}]));
        let keys: Vec<&str> = output["0"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "fields", "confirmations", "notifications", "is_active"]);
    }

    #[test]
    fn serialization_is_indented_and_unescaped() {
        let text = String::from_utf8(to_pretty_json(&json!({"a": ["ü"]})).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        \"ü\"\n    ]\n}");
    }

    #[test]
    fn conversion_is_deterministic() {
        let input = form(json!([{"id": "1"}]), json!([{"id": "2"}, {"id": "3"}])).to_string();
        let first = convert_document("a.json", &input).unwrap();
        let second = convert_document("a.json", &input).unwrap();
        assert_eq!(first.contents, second.contents);
    }

    #[test]
    fn missing_record_is_rejected() {
        let err = convert(json!({"1": {}})).unwrap_err();
        assert!(matches!(err, ConvertError::MissingRecord { .. }));
        assert_eq!(
            err.to_string(),
            "Error: The JSON in 'form.json' does not contain the expected '0' key."
        );
    }

    #[test]
    fn first_missing_key_is_reported() {
        let err = convert(json!({"0": {"confirmations": [], "notifications": []}})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: The JSON in 'form.json' does not have the 'title' key under '0'."
        );

        let err = convert(json!({"0": {"title": "x", "confirmations": []}})).unwrap_err();
        assert!(matches!(err, ConvertError::MissingKey { key: "notifications", .. }));
    }

    #[test]
    fn wrong_types_are_rejected() {
        let err = convert(json!({"0": {"title": 3, "confirmations": [], "notifications": []}})).unwrap_err();
        assert!(matches!(err, ConvertError::WrongType { key: "title", .. }));

        let err = convert(json!({"0": {"title": "x", "confirmations": {"a": {}}, "notifications": []}})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: The JSON in 'form.json' has a 'confirmations' key under '0' that is not an array."
        );

        let err = convert(json!({"0": []})).unwrap_err();
        assert!(matches!(err, ConvertError::RecordNotObject { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = convert_document("broken.json", "{\"0\": ").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
        assert!(err.to_string().starts_with("Error reading 'broken.json': "));
    }
}
