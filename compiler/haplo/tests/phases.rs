#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based pipeline tests.
//!
//! - `parse/` - source to tree, and parse errors surfacing through the facade
//! - `eval/` - whole programs run through `haplo::eval_source`
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p haplo --test phases
//! cargo test -p haplo --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/eval/mod.rs"]
mod eval;
