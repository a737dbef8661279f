// Normalizer - raw upstream records into the tidy (date, value) table
use crate::domain::error::Warning;
use crate::domain::event::{EventDescriptor, EventKind};
use crate::domain::series::TidyRow;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Nested list of per-observation Kp readings inside a GST record.
const KP_INDEX_FIELD: &str = "allKpIndex";

/// Tidy table plus whatever the normalization pass wants to tell the user.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    pub rows: Vec<TidyRow>,
    pub warnings: Vec<Warning>,
    /// The column actually used as the date source, when one was resolved.
    pub date_field: Option<String>,
}

/// Converts raw records into tidy rows. Rows with unparseable dates are
/// dropped rather than failing the request; a partial chart beats no chart.
pub fn normalize(records: &[Value], descriptor: &EventDescriptor) -> NormalizedTable {
    if records.is_empty() {
        return NormalizedTable::default();
    }
    if descriptor.kind == EventKind::Gst {
        return normalize_kp_readings(records);
    }

    let flattened: Vec<Vec<(String, Value)>> = records.iter().map(flatten).collect();
    let columns = column_order(&flattened);

    let mut warnings = Vec::new();
    let Some(date_field) = resolve_date_field(&columns, descriptor.date_field, &mut warnings)
    else {
        return NormalizedTable {
            rows: Vec::new(),
            warnings,
            date_field: None,
        };
    };

    let rows = flattened
        .iter()
        .filter_map(|record| {
            let raw = record
                .iter()
                .find(|(key, _)| *key == date_field)
                .and_then(|(_, value)| value.as_str())?;
            let date = parse_event_date(raw)?;
            Some(TidyRow::new(date, 1.0))
        })
        .collect();

    NormalizedTable {
        rows,
        warnings,
        date_field: Some(date_field),
    }
}

/// GST records carry a nested list of Kp sub-readings, each with its own
/// timestamp. One tidy row per sub-reading, keyed by the sub-reading's
/// `observedTime`, not the parent storm's start.
fn normalize_kp_readings(records: &[Value]) -> NormalizedTable {
    let mut rows = Vec::new();
    let mut missing_subfield = false;

    for record in records {
        let Some(readings) = record.get(KP_INDEX_FIELD).and_then(Value::as_array) else {
            missing_subfield = true;
            continue;
        };
        for reading in readings {
            let observed = reading.get("observedTime").and_then(Value::as_str);
            let kp = reading.get("kpIndex").and_then(value_as_f64);
            if let (Some(observed), Some(kp)) = (observed, kp) {
                if let Some(date) = parse_event_date(observed) {
                    rows.push(TidyRow::new(date, kp));
                }
            }
        }
    }

    let warnings = if missing_subfield {
        vec![Warning::MissingSubfield {
            field: KP_INDEX_FIELD.to_string(),
        }]
    } else {
        Vec::new()
    };

    NormalizedTable {
        rows,
        warnings,
        date_field: Some("observedTime".to_string()),
    }
}

/// Flat key/value view of one record; nested objects become dotted paths.
/// Arrays and scalars are kept as leaf values.
fn flatten(record: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    if let Value::Object(map) = record {
        for (key, value) in map {
            flatten_into(key, value, &mut out);
        }
    }
    out
}

fn flatten_into(path: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(&format!("{path}.{key}"), child, out);
            }
        }
        other => out.push((path.to_string(), other.clone())),
    }
}

/// Union of columns across all records, in first-appearance order. Mirrors
/// how a column-oriented reshape of the same JSON would order its columns.
fn column_order(flattened: &[Vec<(String, Value)>]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in flattened {
        for (key, _) in record {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Picks the date column: the descriptor's expected field when present,
/// otherwise the first column whose name contains "date" or "time". The
/// fallback is a documented best-effort guess and is surfaced as a warning.
fn resolve_date_field(
    columns: &[String],
    expected: &str,
    warnings: &mut Vec<Warning>,
) -> Option<String> {
    if columns.iter().any(|c| c == expected) {
        return Some(expected.to_string());
    }

    let fallback = columns.iter().find(|c| {
        let lower = c.to_lowercase();
        lower.contains("date") || lower.contains("time")
    });
    match fallback {
        Some(field) => {
            warnings.push(Warning::FallbackDateField {
                field: field.clone(),
            });
            Some(field.clone())
        }
        None => {
            warnings.push(Warning::NoDateFieldFound);
            None
        }
    }
}

/// DONKI timestamps come as `2016-09-06T14:12Z`; notifications and some
/// feeds use full RFC 3339. Bare calendar dates are accepted too.
fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%MZ") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Kp indices arrive as JSON numbers or numeric strings depending on feed.
fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rows_use_the_descriptor_date_field() {
        let records = vec![
            json!({"flrID": "1", "beginTime": "2024-03-01T02:30Z"}),
            json!({"flrID": "2", "beginTime": "2024-03-02T11:05Z"}),
        ];
        let table = normalize(&records, EventKind::Flr.descriptor());
        assert_eq!(table.date_field.as_deref(), Some("beginTime"));
        assert!(table.warnings.is_empty());
        assert_eq!(
            table.rows,
            vec![
                TidyRow::new(date(2024, 3, 1), 1.0),
                TidyRow::new(date(2024, 3, 2), 1.0),
            ]
        );
    }

    #[test]
    fn test_malformed_dates_are_dropped_not_fatal() {
        let records = vec![
            json!({"eventTime": "2024-05-10T08:00Z"}),
            json!({"eventTime": "not a date"}),
            json!({"eventTime": 42}),
            json!({"eventTime": "2024-05-11T08:00Z"}),
        ];
        let table = normalize(&records, EventKind::Sep.descriptor());
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.len() <= records.len());
    }

    #[test]
    fn test_fallback_scans_for_date_like_column_in_order() {
        // Expected field absent; nested object flattens to a dotted path
        // that still matches the "time" substring scan.
        let records = vec![json!({
            "id": "x",
            "detail": {"issueTime": "2024-07-04T00:00Z"},
            "updatedDate": "2024-07-05T00:00Z"
        })];
        let table = normalize(&records, EventKind::Ips.descriptor());
        assert_eq!(table.date_field.as_deref(), Some("detail.issueTime"));
        assert_eq!(
            table.warnings,
            vec![Warning::FallbackDateField {
                field: "detail.issueTime".to_string()
            }]
        );
        assert_eq!(table.rows, vec![TidyRow::new(date(2024, 7, 4), 1.0)]);
    }

    #[test]
    fn test_no_date_field_is_a_warning_not_an_error() {
        let records = vec![json!({"id": "a", "speed": 750})];
        let table = normalize(&records, EventKind::Hss.descriptor());
        assert!(table.rows.is_empty());
        assert_eq!(table.warnings, vec![Warning::NoDateFieldFound]);
        assert!(table.date_field.is_none());
    }

    #[test]
    fn test_empty_input_produces_empty_table_without_warnings() {
        let table = normalize(&[], EventKind::Cme.descriptor());
        assert!(table.rows.is_empty());
        assert!(table.warnings.is_empty());
    }

    #[test]
    fn test_gst_explodes_kp_sub_readings() {
        let records = vec![json!({
            "gstID": "2024-01-01T00:00:00-GST-001",
            "startTime": "2024-01-01T00:00Z",
            "allKpIndex": [
                {"observedTime": "2024-01-01T00:00Z", "kpIndex": 3},
                {"observedTime": "2024-01-01T06:00Z", "kpIndex": 5},
                {"observedTime": "2024-01-02T00:00Z", "kpIndex": "4"}
            ]
        })];
        let table = normalize(&records, EventKind::Gst.descriptor());
        assert_eq!(
            table.rows,
            vec![
                TidyRow::new(date(2024, 1, 1), 3.0),
                TidyRow::new(date(2024, 1, 1), 5.0),
                TidyRow::new(date(2024, 1, 2), 4.0),
            ]
        );
        assert!(table.warnings.is_empty());
    }

    #[test]
    fn test_gst_missing_kp_list_warns_and_emits_no_rows() {
        let records = vec![
            json!({"gstID": "a", "startTime": "2024-01-01T00:00Z"}),
            json!({
                "gstID": "b",
                "allKpIndex": [{"observedTime": "2024-01-03T00:00Z", "kpIndex": 6}]
            }),
        ];
        let table = normalize(&records, EventKind::Gst.descriptor());
        assert_eq!(table.rows, vec![TidyRow::new(date(2024, 1, 3), 6.0)]);
        assert_eq!(
            table.warnings,
            vec![Warning::MissingSubfield {
                field: "allKpIndex".to_string()
            }]
        );
    }

    #[test]
    fn test_accepted_timestamp_shapes() {
        assert_eq!(parse_event_date("2016-09-06T14:12Z"), Some(date(2016, 9, 6)));
        assert_eq!(
            parse_event_date("2024-02-29T23:59:59Z"),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            parse_event_date("2024-02-29T23:59:59+02:00"),
            Some(date(2024, 2, 29))
        );
        assert_eq!(parse_event_date("2024-06-15"), Some(date(2024, 6, 15)));
        assert_eq!(parse_event_date("June 15th"), None);
    }
}
