//! Destination of `print` output.
//!
//! The interpreter holds one shared handler for its lifetime. Each printed
//! value becomes one line.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

/// Where printed values go.
pub enum PrintHandler {
    /// One line per value on the process's stdout.
    Stdout,
    /// Lines accumulate in memory; read them with
    /// [`get_output`](Self::get_output).
    Buffer(Mutex<String>),
    /// Output is discarded.
    Silent,
}

impl PrintHandler {
    /// Write the display text of `value` followed by a newline.
    pub fn print_value(&self, value: &Value) {
        match self {
            Self::Stdout => println!("{value}"),
            Self::Buffer(buffer) => {
                let text = value.to_string();
                let mut buffer = buffer.lock();
                buffer.push_str(&text);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything printed so far. Only a buffer captures; the other
    /// handlers report nothing.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandler>;

/// Handler used when none is configured.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests;
