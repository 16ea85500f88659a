//! Property tests for package list ingestion.

use proptest::prelude::*;
use serde_json::{json, Value};

use pakstage::infrastructure::ingest;

fn entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        ("[a-z]{1,6}", "[A-Za-z]{0,8}").prop_map(|(name, status)| json!({
            "FileName": name,
            "StagingStatus": status,
        })),
        ("[a-z]{1,6}", "[a-z]{1,6}").prop_map(|(name, parent)| json!({
            "FileName": name,
            "StagingStatus": "PUBLIC",
            "Parent": parent,
            "StagingStart": "not a date",
        })),
        Just(json!({"StagingStatus": "PRIVATE"})),
        Just(json!({"FileName": 7})),
        any::<i64>().prop_map(|n| json!(n)),
        Just(Value::Null),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every array entry becomes a record or a diagnostic, never both.
    #[test]
    fn property_each_entry_accounted_for(entries in proptest::collection::vec(entry(), 0..16)) {
        let body = Value::Array(entries.clone()).to_string();
        let ingested = ingest(&body, "prop").unwrap();
        prop_assert_eq!(ingested.records.len() + ingested.diagnostics.len(), entries.len());

        let wrapped = json!({ "PackageList": entries }).to_string();
        prop_assert_eq!(ingest(&wrapped, "prop").unwrap(), ingested);
    }

    /// PROPERTY: arbitrary text never panics the ingester.
    #[test]
    fn property_ingest_never_panics(body in any::<String>()) {
        let _ = ingest(&body, "prop");
    }
}
