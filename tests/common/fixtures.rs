//! Package listings shared by CLI tests.

/// A/B grounded in Private, C split from A into Public, D with an unknown parent
pub const EXAMPLE_LISTING: &str = r#"[
  {"FileName": "A", "StagingStatus": "PRIVATE", "Parent": null},
  {"FileName": "B", "StagingStatus": "PRIVATE", "Parent": "A"},
  {"FileName": "C", "StagingStatus": "PUBLIC", "Parent": "A"},
  {"FileName": "D", "StagingStatus": "PRIVATE", "Parent": "Z"}
]"#;

/// Same-lane only, nothing to report
pub const CLEAN_LISTING: &str = r#"{"PackageList": [
  {"FileName": "base.pak", "StagingStatus": "public", "Size": 1024},
  {"FileName": "dlc.pak", "StagingStatus": "PUBLIC", "Parent": "base.pak"}
]}"#;

/// One record without status, one with an unknown status, one unreadable entry
pub const BROKEN_LISTING: &str = r#"[
  {"FileName": "ok.pak", "StagingStatus": "PRIVATE"},
  {"FileName": "nostatus.pak"},
  {"FileName": "weird.pak", "StagingStatus": "ARCHIVED"},
  42
]"#;

/// A scheduled pak with a full window
pub const SCHEDULED_LISTING: &str = r#"[
  {"FileName": "event.pak", "StagingStatus": "WINDOW",
   "StagingStart": "2018-01-05T14:00:00Z", "StagingEnd": "2018-02-01T09:30:00Z"}
]"#;

/// `len` public paks, each the parent of the next
pub fn chain_listing(len: usize) -> String {
    let entries: Vec<String> = (0..len)
        .map(|i| match i {
            0 => r#"{"FileName": "pak-0", "StagingStatus": "PUBLIC"}"#.to_string(),
            _ => format!(
                r#"{{"FileName": "pak-{i}", "StagingStatus": "PUBLIC", "Parent": "pak-{}"}}"#,
                i - 1
            ),
        })
        .collect();
    format!("[{}]", entries.join(",\n"))
}
