#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use serde::Serialize;

use crate::client::CliError;

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Render(e.to_string()))?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
