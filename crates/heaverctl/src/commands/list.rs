//! Contains Functionality of list container command
use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Result;
use clap::Parser;
use libheaver::{Container, Heaver};

use super::{print_table, Format};

/// List containers known to heaver
#[derive(Parser, Debug)]
pub struct List {
    /// host name recorded on every listed container
    #[clap(long)]
    pub host: Option<String>,
    /// Specify the format (table or json)
    #[clap(long, value_enum, default_value = "table")]
    pub format: Format,
    /// Only display container names
    #[clap(long, short)]
    pub quiet: bool,
}

pub fn list(args: List, heaver: &Heaver) -> Result<()> {
    let containers: BTreeMap<String, Container> = heaver
        .list_containers(args.host.as_deref())?
        .into_iter()
        .collect();

    if args.quiet {
        for name in containers.keys() {
            println!("{name}");
        }
        return Ok(());
    }

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&containers)?),
        Format::Table => print_table("NAME\tSTATUS\tIP\tHOST", &table_content(&containers))?,
    }
    Ok(())
}

fn table_content(containers: &BTreeMap<String, Container>) -> String {
    let mut content = String::new();
    for container in containers.values() {
        let _ = writeln!(
            content,
            "{}\t{}\t{}\t{}",
            container.name,
            container.status,
            container.ip.as_deref().unwrap_or_default(),
            container.host.as_deref().unwrap_or_default(),
        );
    }
    content
}
