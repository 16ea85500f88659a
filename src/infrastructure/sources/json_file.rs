//! JSON record source backed by a file or stdin

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::ports::{Ingested, RecordSource};
use crate::error::PakstageResult;

use super::package_list::ingest;

/// Where the listing is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonInput {
    File(PathBuf),
    Stdin,
}

/// Reads a package listing saved from the content service
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    input: JsonInput,
}

impl JsonRecordSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            input: JsonInput::File(path.into()),
        }
    }

    pub fn stdin() -> Self {
        Self {
            input: JsonInput::Stdin,
        }
    }

    /// `-` means stdin, anything else is a path
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::stdin()
        } else {
            Self::file(arg)
        }
    }

    pub fn input(&self) -> &JsonInput {
        &self.input
    }
}

impl RecordSource for JsonRecordSource {
    fn describe(&self) -> String {
        match &self.input {
            JsonInput::File(path) => path.display().to_string(),
            JsonInput::Stdin => "<stdin>".to_string(),
        }
    }

    fn load(&self) -> PakstageResult<Ingested> {
        let body = match &self.input {
            JsonInput::File(path) => std::fs::read_to_string(path)?,
            JsonInput::Stdin => {
                let mut body = String::new();
                std::io::stdin().lock().read_to_string(&mut body)?;
                body
            }
        };
        ingest(&body, &self.describe())
    }
}
