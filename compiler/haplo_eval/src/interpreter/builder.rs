//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use tracing::debug;

use super::Interpreter;
use crate::{stdlib, stdout_handler, EvalLimits, SharedPrintHandler, SymbolTable};

/// Builder for [`Interpreter`].
///
/// Without configuration the interpreter gets a copy of the standard table,
/// the stdout print handler and no limits.
#[derive(Default)]
pub struct InterpreterBuilder {
    symbols: Option<SymbolTable>,
    symbol_capacity: Option<usize>,
    print_handler: Option<SharedPrintHandler>,
    limits: EvalLimits,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `table` as is. The standard library is not added to it.
    #[must_use]
    pub fn symbols(mut self, table: SymbolTable) -> Self {
        self.symbols = Some(table);
        self
    }

    /// Start from a new table with `capacity` buckets holding the standard
    /// library. Ignored when [`symbols`](Self::symbols) is set.
    ///
    /// Capacity 0 gives an uninitialised table.
    #[must_use]
    pub fn symbol_capacity(mut self, capacity: usize) -> Self {
        self.symbol_capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Interpreter {
        let symbols = match (self.symbols, self.symbol_capacity) {
            (Some(table), _) => table,
            (None, Some(capacity)) => {
                let mut table = SymbolTable::new(capacity);
                if let Err(code) = stdlib::register(&mut table) {
                    debug!(%code, capacity, "standard library not registered");
                }
                table
            }
            (None, None) => stdlib::standard_table().clone(),
        };
        Interpreter {
            symbols,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            limits: self.limits,
            call_depth: 0,
        }
    }
}
