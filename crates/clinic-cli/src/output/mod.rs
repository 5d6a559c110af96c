//! Rendering of command responses as JSON, raw JSON lines or tables.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Free-text columns left out of list tables. `get` still shows them.
const LONG_TEXT_COLUMNS: &[&str] = &[
    "address",
    "notes",
    "clinical_summary",
    "requested_investigations",
    "instructions",
    "emergency_contact_name",
    "emergency_contact_phone",
    "opening_hours",
    "specialities_offered",
    "data",
];

/// Name columns used to label a nested record, in preference order.
const LABEL_COLUMNS: &[&[&str]] = &[
    &["title", "first_name", "last_name"],
    &["facility_name"],
    &["medication_name"],
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: Value) -> String {
    match value {
        Value::Array(items) => render_list(&items),
        Value::Object(map) => render_record(map),
        scalar => table::render_entity_table(&["value"], &[vec![cell(&scalar)]], table_options()),
    }
}

/// A single record as `field | value` rows in field order.
fn render_record(map: Map<String, Value>) -> String {
    let rows = map
        .into_iter()
        .map(|(field, value)| vec![field, cell(&value)])
        .collect::<Vec<_>>();
    table::render_entity_table(&["field", "value"], &rows, table_options())
}

/// One row per record. Columns follow field order, first appearance wins,
/// minus the free-text columns.
fn render_list(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !LONG_TEXT_COLUMNS.contains(&key.as_str()) && !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut out = table::render_entity_table(&headers, &rows, table_options());
    out.push_str(&format!("\n({} {})", rows.len(), if rows.len() == 1 { "row" } else { "rows" }));
    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) if text.is_empty() => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Object(map) => record_label(map),
        Value::Array(items) if items.is_empty() => String::from("-"),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_object().map_or_else(|| cell(item), record_id))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// First `*_id` field of a nested record.
fn record_id(map: &Map<String, Value>) -> String {
    map.iter()
        .find(|(key, _)| key.ends_with("_id"))
        .and_then(|(_, value)| value.as_str())
        .map_or_else(|| String::from("?"), str::to_string)
}

/// A nested record as `ID name`, e.g. `C001 Dr David Evans`.
fn record_label(map: &Map<String, Value>) -> String {
    let id = record_id(map);
    let name = LABEL_COLUMNS
        .iter()
        .map(|columns| {
            columns
                .iter()
                .filter_map(|column| map.get(*column).and_then(Value::as_str))
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .find(|name| !name.is_empty());
    match name {
        Some(name) => format!("{id} {name}"),
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_and_raw_carry_the_same_value() {
        let value = json!({"patient_id": "P001", "first_name": "John"});
        let pretty: Value = serde_json::from_str(&render(&value, OutputFormat::Json).unwrap()).unwrap();
        let raw = render(&value, OutputFormat::Raw).unwrap();
        assert!(!raw.contains('\n'));
        assert_eq!(pretty, serde_json::from_str::<Value>(&raw).unwrap());
    }

    #[test]
    fn record_table_keeps_field_order_and_dashes_blanks() {
        let out = render(
            &json!({"patient_id": "P001", "last_name": "Smith", "email": "", "gp_surgery_id": null}),
            OutputFormat::Table,
        )
        .unwrap();
        let fields: Vec<&str> = out
            .lines()
            .skip(2)
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(fields, vec!["patient_id", "last_name", "email", "gp_surgery_id"]);
        assert!(out.lines().nth(4).unwrap().trim_end().ends_with('-'));
    }

    #[test]
    fn list_table_drops_free_text_and_counts_rows() {
        let out = render(
            &json!([
                {"appointment_id": "A001", "status": "scheduled", "notes": "bring inhaler"},
                {"appointment_id": "A002", "status": "cancelled", "notes": ""}
            ]),
            OutputFormat::Table,
        )
        .unwrap();
        assert!(out.lines().next().unwrap().starts_with("appointment_id"));
        assert!(!out.contains("notes"));
        assert!(!out.contains("inhaler"));
        assert!(out.ends_with("(2 rows)"));
    }

    #[test]
    fn nested_records_are_labelled() {
        let clinician = json!({"clinician_id": "C001", "first_name": "David", "last_name": "Evans", "title": "Dr"});
        assert_eq!(cell(&clinician), "C001 Dr David Evans");
        let facility = json!({"facility_id": "S001", "facility_name": "Riverside Surgery"});
        assert_eq!(cell(&facility), "S001 Riverside Surgery");
        let referrals = json!([{"referral_id": "R001"}, {"referral_id": "R002"}]);
        assert_eq!(cell(&referrals), "R001, R002");
        assert_eq!(cell(&json!([])), "-");
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render(&json!([]), OutputFormat::Table).unwrap(), "(no rows)");
    }
}
