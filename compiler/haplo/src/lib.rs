//! Haplo - a small Lisp.
//!
//! Source text is lexed and parsed into cons-cell [`Expr`] trees, then
//! evaluated by an [`Interpreter`] into [`Value`]s.
//!
//! ```text
//! source --haplo_lexer--> tokens --haplo_parse--> Expr --haplo_eval--> Value
//! ```
//!
//! Parse errors abort the form they occur in and are returned as
//! [`ParseError`]. Evaluation never fails: runtime errors are
//! [`Value::Error`] values.

use std::sync::Once;

use tracing::debug;

pub use haplo_diagnostic::ErrorCode;
pub use haplo_eval::{
    buffer_handler, silent_handler, stdlib, stdout_handler, EvalLimits, Interpreter,
    InterpreterBuilder, NativeFn, SharedPrintHandler, Symbol, SymbolTable, UpdateOutcome, Value,
    ValueList,
};
pub use haplo_ir::{Atom, Expr, Span};
pub use haplo_lexer::{LexError, LexErrorKind, Lexer, LexerConfig};
pub use haplo_parse::{parse, ParseError, ParseErrorKind, ParseOutput, Parser};

/// Parse every form of `source`, then evaluate them in order.
///
/// Nothing is evaluated if any form fails to parse.
pub fn eval_source(interpreter: &mut Interpreter, source: &str) -> Result<Vec<Value>, ParseError> {
    let forms = Parser::new(source).parse_all()?;
    debug!(forms = forms.len(), "evaluating source");
    Ok(forms
        .iter()
        .map(|form| interpreter.interpret(Some(form)))
        .collect())
}

/// [`eval_source`] with a fresh interpreter.
pub fn eval_str(source: &str) -> Result<Vec<Value>, ParseError> {
    eval_source(&mut Interpreter::new(), source)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=haplo_eval=debug`. With `HAPLO_LOG_TREE` also set,
/// events are shown nested under the evaluation spans.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("HAPLO_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
