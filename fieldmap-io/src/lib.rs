//! Fieldmap I/O - artifact file layer and high-level APIs
//!
//! This crate provides the file layer for fieldmap:
//!
//! - Whole-file readers for field definitions and mapping artifacts
//! - A pretty JSON writer that preserves non-ASCII text verbatim
//! - High-level generate/recase entry points with run summaries

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export commonly used types
pub use fieldmap_core::{FieldDef, MappingEntry, MappingError, Result};

use fieldmap_core::{project_fields, recase_expressions};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

/// Conventional location of the raw field definition export.
pub const DEFAULT_FIELD_DEFS_PATH: &str = ".cursor/field.json";

/// Conventional location of the generated mapping artifact.
pub const DEFAULT_MAPPING_PATH: &str = "field_mapping_result.json";

/// Read a JSON array of raw field definitions.
///
/// Anything other than an array of objects is a fatal input-format error.
/// Unknown keys inside each object are ignored; absent optional keys take
/// their documented defaults.
pub fn read_field_defs<R: Read>(input: R) -> Result<Vec<FieldDef>> {
    let items = read_record_array(input, "field definition")?;
    items
        .into_iter()
        .map(|item| Ok(serde_json::from_value(Value::Object(item))?))
        .collect()
}

/// Read a previously generated mapping artifact as generic JSON objects.
///
/// Records keep every key they carry, so a rewrite preserves anything the
/// generate pass did not produce itself.
pub fn read_mapping_records<R: Read>(input: R) -> Result<Vec<Map<String, Value>>> {
    read_record_array(input, "mapping record")
}

fn read_record_array<R: Read>(input: R, what: &str) -> Result<Vec<Map<String, Value>>> {
    let value: Value = serde_json::from_reader(BufReader::new(input))?;
    let Value::Array(items) = value else {
        return Err(MappingError::InvalidInput(format!(
            "expected a JSON array of {what}s"
        )));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(MappingError::InvalidInput(format!(
                "every {what} must be a JSON object, found {other}"
            ))),
        })
        .collect()
}

/// Write records as pretty-printed JSON followed by a trailing newline.
///
/// `serde_json` leaves non-ASCII text unescaped, so human-readable labels
/// land in the artifact verbatim.
pub fn write_pretty<W: Write, T: Serialize>(output: W, records: &[T]) -> Result<()> {
    let mut writer = BufWriter::new(output);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Request for the projection pass.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Raw field definition export to read.
    pub input: PathBuf,
    /// Mapping artifact to (over)write.
    pub output: PathBuf,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            input: DEFAULT_FIELD_DEFS_PATH.into(),
            output: DEFAULT_MAPPING_PATH.into(),
        }
    }
}

/// Counters reported by the projection pass.
#[derive(Debug, Clone, Copy)]
pub struct GenerateSummary {
    /// Raw definitions read from the input.
    pub fields_read: usize,
    /// Mapping entries written to the artifact.
    pub entries_written: usize,
    /// Definitions dropped by the ignore set.
    pub ignored: usize,
}

/// Run the projection pass: read raw definitions, drop ignored columns,
/// derive camelCase expressions, and write the mapping artifact.
///
/// Read and parse failures abort before the output file is touched.
pub fn execute_generate(request: &GenerateRequest) -> Result<GenerateSummary> {
    let fields = read_field_defs(File::open(&request.input)?)?;
    let entries = project_fields(&fields);
    let summary = GenerateSummary {
        fields_read: fields.len(),
        entries_written: entries.len(),
        ignored: fields.len() - entries.len(),
    };
    write_pretty(File::create(&request.output)?, &entries)?;
    Ok(summary)
}

/// Request for the recase pass.
#[derive(Debug, Clone)]
pub struct RecaseRequest {
    /// Mapping artifact to rewrite in place.
    pub file: PathBuf,
}

impl Default for RecaseRequest {
    fn default() -> Self {
        Self {
            file: DEFAULT_MAPPING_PATH.into(),
        }
    }
}

/// Counters reported by the recase pass.
#[derive(Debug, Clone, Copy)]
pub struct RecaseSummary {
    /// Mapping records read from the artifact.
    pub records: usize,
    /// Records whose expression actually changed.
    pub changed: usize,
}

/// Run the recase pass: reload the artifact, recompute every non-empty
/// `expression` in place, and rewrite the file (even when nothing changed).
pub fn execute_recase(request: &RecaseRequest) -> Result<RecaseSummary> {
    let mut records = read_mapping_records(File::open(&request.file)?)?;
    let changed = recase_expressions(&mut records);
    let summary = RecaseSummary {
        records: records.len(),
        changed,
    };
    write_pretty(File::create(&request.file)?, &records)?;
    Ok(summary)
}
