//! Error codes for every Haplo diagnostic.
//!
//! Each code is a unique identifier (e.g., `E1002`) whose first digit names
//! the phase that raised it.

use std::fmt;

/// Error codes for every Haplo diagnostic.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Interpreter errors
/// - E7xxx: Symbol table errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// End of input where a token was required
    E0001,
    /// Unterminated string literal
    E0002,
    /// Atom longer than the configured limit
    E0003,

    // Parser Errors (E1xxx)
    /// Unrecognized token
    E1001,
    /// Malformed or missing parenthesis
    E1002,
    /// Unexpected token after quote
    E1003,
    /// Empty list in expression position
    E1004,

    // Interpreter Errors (E6xxx)
    /// Unknown symbol
    E6001,
    /// Invalid type
    E6002,
    /// Wrong number of arguments
    E6003,
    /// Not a function
    E6004,
    /// Recursion limit exceeded
    E6005,
    /// Loop iteration limit exceeded
    E6006,
    /// Integer division by zero
    E6007,

    // Symbol Table Errors (E7xxx)
    /// Table not initialised
    E7001,
    /// Key not found
    E7002,
}

impl ErrorCode {
    /// All error code variants, for iteration and lookup.
    pub const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        // Interpreter
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        // Symbol table
        ErrorCode::E7001,
        ErrorCode::E7002,
    ];

    /// Get the numeric code as a string (e.g., "E1002").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
        }
    }

    /// Short lowercase description, used in dumps and value display.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "end of input",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "atom too long",
            ErrorCode::E1001 => "unrecognized token",
            ErrorCode::E1002 => "malformed parenthesis",
            ErrorCode::E1003 => "unexpected token after quote",
            ErrorCode::E1004 => "empty list",
            ErrorCode::E6001 => "unknown symbol",
            ErrorCode::E6002 => "invalid type",
            ErrorCode::E6003 => "wrong number of arguments",
            ErrorCode::E6004 => "not a function",
            ErrorCode::E6005 => "recursion limit exceeded",
            ErrorCode::E6006 => "loop iteration limit exceeded",
            ErrorCode::E6007 => "division by zero",
            ErrorCode::E7001 => "symbol table not initialised",
            ErrorCode::E7002 => "symbol not found",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is an interpreter error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6002
                | ErrorCode::E6003
                | ErrorCode::E6004
                | ErrorCode::E6005
                | ErrorCode::E6006
                | ErrorCode::E6007
        )
    }

    /// Check if this is a symbol table error (E7xxx range).
    pub fn is_symbol_table_error(&self) -> bool {
        matches!(self, ErrorCode::E7001 | ErrorCode::E7002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::error::Error for ErrorCode {}

/// Parse an error code string like `"E1002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
