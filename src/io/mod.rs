//! I/O module
//!
//! Handles action-script parsing and ledger exports.
//!
//! # Components
//!
//! - `csv_format` - Script row conversion, user table, statement and receipt writers
//! - `script_reader` - Streaming action-script reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{
    convert_script_record, write_receipt, write_statement_csv, write_users_csv, ScriptAction,
    ScriptRecord, ScriptStep,
};
pub use script_reader::ScriptReader;
