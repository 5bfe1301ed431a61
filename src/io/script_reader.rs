//! Streaming reader over action scripts
//!
//! Provides an iterator over `ScriptStep`s read from a CSV action script.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use abanremit_ledger::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::from_path(Path::new("actions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(step) => println!("Applying: {:?}", step.action),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Opening errors are returned from the constructors. Individual row errors
//! are yielded as `Err` items carrying the line number, so a caller can log
//! them and keep going.

use crate::io::csv_format::{convert_script_record, ScriptRecord, ScriptStep};
use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Action-script reader
///
/// Reads one row at a time; memory use does not grow with the script length.
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: csv::Reader<R>,
    line_num: u64,
}

impl ScriptReader<File> {
    /// Open the script at `path`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IoError` if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap any byte source
    ///
    /// The CSV reader trims every field, tolerates short rows (trailing
    /// optional columns may be omitted) and uses an 8KB buffer.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            line_num: 1,
        }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<ScriptStep, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<ScriptRecord>();
        let row = deserializer.next()?;
        self.line_num += 1;

        let line = Some(self.line_num);
        Some(match row {
            Ok(record) => convert_script_record(record)
                .map_err(|message| LedgerError::ParseError { line, message }),
            Err(e) => Err(LedgerError::ParseError {
                line,
                message: e.to_string(),
            }),
        })
    }
}
