//! Conversion of LegiScan's ID-keyed objects into ordered record lists.
//!
//! Several LegiScan operations return list-shaped data as a JSON object keyed
//! by stringified ID (`{"0": {...}, "1": {...}}`), sometimes with metadata
//! entries mixed in (a `session` object inside a master list, `summary` inside
//! search results) or `null` placeholders. Everything here filters by the
//! presence of an identity field rather than by key, because the keys carry no
//! type information.
//!
//! Upstream records also send `null` for fields that are simply unset. Typed
//! decoding goes through [`decode`], which drops those members so the
//! record's defaults apply.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Identity field shared by every bill-shaped record.
pub const BILL_ID: &str = "bill_id";

/// Iterate over the record values of an ID-keyed object (or array), keeping
/// only non-null objects that carry `identity_field`.
///
/// Ordering follows the input: object insertion order as received, or array
/// order. Any other JSON value yields nothing.
pub fn record_values(value: Value, identity_field: &str) -> impl Iterator<Item = Value> + '_ {
    let values: Vec<Value> = match value {
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        Value::Array(items) => items,
        _ => Vec::new(),
    };

    values
        .into_iter()
        .filter(move |v| is_record(v, identity_field))
}

/// Collect the records of an ID-keyed object into typed values.
///
/// A record that still fails to decode is logged and skipped so one bad
/// entry does not hide the rest of the list.
pub fn collect_records<T: DeserializeOwned>(value: Value, identity_field: &str) -> Vec<T> {
    record_values(value, identity_field)
        .filter_map(|record| {
            let id = record.get(identity_field).cloned().unwrap_or(Value::Null);
            match decode(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(%id, error = %e, "Skipping undecodable record");
                    None
                }
            }
        })
        .collect()
}

/// Decode a record, treating `null` object members as absent.
pub fn decode<T: DeserializeOwned>(mut value: Value) -> Result<T, serde_json::Error> {
    strip_nulls(&mut value);
    serde_json::from_value(value)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

/// Whether `value` is a record carrying the given identity field.
pub fn is_record(value: &Value, identity_field: &str) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key(identity_field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        bill_id: u64,
        number: String,
    }

    #[test]
    fn test_filters_null_and_metadata_entries() {
        let masterlist = json!({
            "session": { "session_id": 2172, "session_name": "2025-2026 Regular Session" },
            "0": { "bill_id": 123, "number": "AB 123" },
            "1": null
        });

        let rows: Vec<Row> = collect_records(masterlist, BILL_ID);
        assert_eq!(
            rows,
            vec![Row {
                bill_id: 123,
                number: "AB 123".to_string()
            }]
        );
    }

    #[test]
    fn test_preserves_insertion_order() {
        let keyed = json!({
            "9": { "bill_id": 9, "number": "SB 9" },
            "1": { "bill_id": 1, "number": "SB 1" },
            "5": { "bill_id": 5, "number": "SB 5" }
        });

        let ids: Vec<u64> = collect_records::<Row>(keyed, BILL_ID)
            .into_iter()
            .map(|r| r.bill_id)
            .collect();
        assert_eq!(ids, vec![9, 1, 5]);
    }

    #[test]
    fn test_accepts_true_arrays() {
        let list = json!([
            { "bill_id": 1, "number": "HB 1" },
            "stray",
            { "bill_id": 2, "number": "HB 2" }
        ]);

        let rows: Vec<Row> = collect_records(list, BILL_ID);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_summary_is_not_a_record() {
        let searchresult = json!({
            "summary": { "page": "1 of 1", "count": 1 },
            "0": { "bill_id": 77, "number": "AB 77" }
        });

        assert_eq!(record_values(searchresult, BILL_ID).count(), 1);
    }

    #[test]
    fn test_scalar_input_yields_nothing() {
        assert_eq!(record_values(json!("nope"), BILL_ID).count(), 0);
        assert_eq!(record_values(Value::Null, BILL_ID).count(), 0);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let keyed = json!({
            "0": { "bill_id": "not-a-number", "number": "AB 1" },
            "1": { "bill_id": 2, "number": "AB 2" }
        });

        let rows: Vec<Row> = collect_records(keyed, BILL_ID);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bill_id, 2);
    }

    #[test]
    fn test_null_members_fall_back_to_defaults() {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct Item {
            bill_id: u64,
            last_action_date: String,
            status: u32,
            sponsors: Vec<Row>,
        }

        let keyed = json!({
            "0": {
                "bill_id": 1,
                "last_action_date": null,
                "status": null,
                "sponsors": [{ "bill_id": 1, "number": "AB 1", "extra": null }]
            }
        });

        let items: Vec<Item> = collect_records(keyed, BILL_ID);
        assert_eq!(items.len(), 1);
        assert!(items[0].last_action_date.is_empty());
        assert_eq!(items[0].status, 0);
        assert_eq!(items[0].sponsors[0].number, "AB 1");
    }

    #[test]
    fn test_decode_keeps_non_null_values() {
        let row: Row = decode(json!({ "bill_id": 3, "number": "SB 3", "note": null })).unwrap();
        assert_eq!(
            row,
            Row {
                bill_id: 3,
                number: "SB 3".to_string()
            }
        );
    }
}
