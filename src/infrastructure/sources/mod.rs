//! Record source implementations

mod json_file;
mod package_list;

pub use json_file::{JsonInput, JsonRecordSource};
pub use package_list::{ingest, PACKAGE_LIST_FIELD};
