//! Print the catalog.

use std::io::Write;

use clap::ValueEnum;
use shopcart::Session;

/// How the catalog is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `#id title — price` line per product
    Text,
    /// A JSON array of products
    Json,
}

/// Write the session's catalog to `out`.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn print<W: Write>(
    session: &Session,
    format: OutputFormat,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            for line in session.catalog().listing() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, session.list_catalog())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
