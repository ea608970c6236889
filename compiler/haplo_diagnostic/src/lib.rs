//! Error taxonomy for Haplo.
//!
//! Every failure the front end or the interpreter can report is a single
//! [`ErrorCode`]. Lexer and parser errors wrap a code together with a
//! position; interpreter errors travel as `Value::Error(code)` data.

mod error_code;

pub use error_code::ErrorCode;
