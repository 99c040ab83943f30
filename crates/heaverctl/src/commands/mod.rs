use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

pub mod control;
pub mod create;
pub mod images;
pub mod list;

/// Output format of the listing commands
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Table,
    Json,
}

fn print_table(header: &str, content: &str) -> Result<()> {
    let mut tab_writer = TabWriter::new(io::stdout());
    writeln!(&mut tab_writer, "{header}")?;
    write!(&mut tab_writer, "{content}")?;
    tab_writer.flush()?;
    Ok(())
}
