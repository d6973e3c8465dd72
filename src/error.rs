// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single form export could not be converted.
///
/// The `Display` output is the line shown to the operator.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error: File '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading '{source_name}': {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading '{source_name}': {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error: The JSON in '{source_name}' does not contain the expected '0' key.")]
    MissingRecord { source_name: String },

    #[error("Error: The JSON in '{source_name}' has a '0' entry that is not an object.")]
    RecordNotObject { source_name: String },

    #[error("Error: The JSON in '{source_name}' does not have the '{key}' key under '0'.")]
    MissingKey {
        source_name: String,
        key: &'static str,
    },

    #[error("Error: The JSON in '{source_name}' has a '{key}' key under '0' that is not {expected}.")]
    WrongType {
        source_name: String,
        key: &'static str,
        expected: &'static str,
    },

    #[error("Error serializing updated JSON for '{source_name}': {source}")]
    Serialize {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error writing updated JSON to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error listing directory '{}': {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
