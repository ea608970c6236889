//! Native functions every interpreter starts with.
//!
//! | Module | Functions |
//! |---|---|
//! | binding | `setq` |
//! | math | `+ - * /`, `> < = >= <=` |
//! | logic | `and or not` |
//! | list | `list append head tail` |
//! | io | `print` |
//!
//! Each function validates its own arity and operand kinds and reports
//! failures as [`Value::Error`].

mod binding;
mod io;
mod list;
mod logic;
mod math;

use std::sync::OnceLock;

use haplo_diagnostic::ErrorCode;
use tracing::{debug, error};

use crate::{NativeFn, Symbol, SymbolTable, Value, ValueList, DEFAULT_CAPACITY};

/// Registration order of the standard library.
const NATIVES: &[(&str, NativeFn)] = &[
    ("setq", binding::setq),
    ("+", math::add),
    ("-", math::subtract),
    ("*", math::multiply),
    ("/", math::divide),
    (">", math::greater),
    ("<", math::less),
    ("=", math::equal),
    (">=", math::greater_or_equal),
    ("<=", math::less_or_equal),
    ("and", logic::and),
    ("or", logic::or),
    ("not", logic::not),
    ("list", list::list),
    ("append", list::append),
    ("head", list::head),
    ("tail", list::tail),
    ("print", io::print),
];

/// Add every native function to `table`, replacing existing entries.
pub fn register(table: &mut SymbolTable) -> Result<(), ErrorCode> {
    for &(name, function) in NATIVES {
        table.update(name, Symbol::NativeFunction(function))?;
    }
    debug!(count = NATIVES.len(), "standard library registered");
    Ok(())
}

/// The shared standard table, built on first use and never mutated.
pub fn standard_table() -> &'static SymbolTable {
    static TABLE: OnceLock<SymbolTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = SymbolTable::new(DEFAULT_CAPACITY);
        if let Err(code) = register(&mut table) {
            error!(%code, "standard library registration failed");
        }
        table
    })
}

/// Exactly `N` arguments, or the wrong-arity error.
fn exactly<const N: usize>(args: ValueList) -> Result<[Value; N], Value> {
    let args: Vec<Value> = args.into_iter().collect();
    <[Value; N]>::try_from(args).map_err(|_| Value::Error(ErrorCode::E6003))
}
