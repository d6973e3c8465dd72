// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::transform::{convert_document, Warning};

/// Receives progress for every processed file.
pub trait Reporter {
    fn processing(&mut self, file_name: &str);
    fn warning(&mut self, warning: &Warning);
    fn written(&mut self, output: &Path);
    fn failed(&mut self, error: &ConvertError);
}

/// Prints every event to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn processing(&mut self, file_name: &str) {
        println!("\nProcessing file: {} ...", file_name);
    }

    fn warning(&mut self, warning: &Warning) {
        println!("{}", warning);
    }

    fn written(&mut self, output: &Path) {
        println!("Output written to: {}", output.display());
    }

    fn failed(&mut self, error: &ConvertError) {
        println!("{}", error);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: Vec<PathBuf>,
    pub failed: usize,
}

/// Converts form exports and writes the results next to each other in one directory.
#[derive(Debug, Default, Clone)]
pub struct FormConverter {
    output_dir: Option<PathBuf>,
}

impl FormConverter {
    /// `None` writes into the current working directory.
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self { output_dir }
    }

    pub fn output_path(&self, output_name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(output_name),
            None => PathBuf::from(output_name),
        }
    }

    /// Convert one file, reporting the outcome. Returns the written path on success.
    pub fn process_file(&self, path: &Path, reporter: &mut dyn Reporter) -> Option<PathBuf> {
        match self.convert_file(path, reporter) {
            Ok(output) => {
                reporter.written(&output);
                Some(output)
            }
            Err(err) => {
                log::debug!("skipping {}: {:?}", path.display(), err);
                reporter.failed(&err);
                None
            }
        }
    }

    /// Read, convert and write `path`. Warnings go to `reporter` as they are found.
    pub fn convert_file(&self, path: &Path, reporter: &mut dyn Reporter) -> Result<PathBuf, ConvertError> {
        if !path.is_file() {
            return Err(ConvertError::NotFound(path.to_path_buf()));
        }

        let source_name = path.display().to_string();
        let input = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            source_name: source_name.clone(),
            source,
        })?;

        let conversion = convert_document(&source_name, &input)?;
        for warning in &conversion.warnings {
            reporter.warning(warning);
        }

        let output = self.output_path(&conversion.output_name);
        fs::write(&output, &conversion.contents).map_err(|source| ConvertError::Write {
            path: output.clone(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", conversion.contents.len(), output.display());

        Ok(output)
    }

    /// Convert every `*.json` file (case-insensitive) in `dir`, in file name order.
    ///
    /// A failing file is reported and skipped.
    pub fn process_all(&self, dir: &Path, reporter: &mut dyn Reporter) -> BatchSummary {
        let mut summary = BatchSummary::default();

        let files = match json_files(dir) {
            Ok(files) => files,
            Err(err) => {
                reporter.failed(&err);
                return summary;
            }
        };
        log::debug!("found {} json files in {}", files.len(), dir.display());

        for (file_name, path) in files {
            reporter.processing(&file_name);
            match self.process_file(&path, reporter) {
                Some(output) => summary.converted.push(output),
                None => summary.failed += 1,
            }
        }

        summary
    }
}

/// Names and paths of the `*.json` entries in `dir`, sorted by name.
///
/// Paths stay relative to the working directory when `dir` is `.`.
pub fn json_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, ConvertError> {
    let list_err = |source: std::io::Error| ConvertError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.to_lowercase().ends_with(".json") {
            continue;
        }

        let path = if dir == Path::new(".") {
            PathBuf::from(entry.file_name())
        } else {
            entry.path()
        };
        files.push((file_name, path));
    }

    files.sort();
    Ok(files)
}
