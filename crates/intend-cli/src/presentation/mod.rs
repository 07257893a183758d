pub mod style;
pub mod views;

use crate::args::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Writes command results to stdout as plain text or pretty JSON
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T>(&self, view: &T) -> Result<()>
    where
        T: Serialize + Display,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }

    /// Non-fatal problems go to stderr so JSON on stdout stays parseable
    pub fn warn(&self, message: impl Display) {
        eprintln!("Warning: {}", message);
    }
}
