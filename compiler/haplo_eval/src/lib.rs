//! Haplo Eval - tree-walking evaluator for Haplo programs.
//!
//! # Architecture
//!
//! - [`Value`]: runtime data, with errors as ordinary values
//! - [`SymbolTable`]: fixed-capacity chained hash map from names to [`Symbol`]s
//! - [`Interpreter`]: walks cons-cell trees, dispatching special forms and calls
//! - [`stdlib`]: native functions registered into the shared standard table
//!
//! Every interpreter starts from its own copy of [`stdlib::standard_table`],
//! so definitions made by one program never leak into another.

pub mod interpreter;
mod limits;
mod print_handler;
pub mod stdlib;
mod symbol;
mod symbol_table;
mod value;

pub use interpreter::{Interpreter, InterpreterBuilder};
pub use limits::EvalLimits;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use symbol::{NativeFn, Symbol};
pub use symbol_table::{djb2, SymbolTable, UpdateOutcome, DEFAULT_CAPACITY};
pub use value::{Value, ValueList, ValueListIntoIter, ValueListIter};
