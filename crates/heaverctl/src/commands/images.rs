//! Contains functionality of images command
use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use libheaver::{Heaver, Image};

use super::{print_table, Format};

/// List images available to heaver
#[derive(Parser, Debug)]
pub struct Images {
    /// Specify the format (table or json)
    #[clap(long, value_enum, default_value = "table")]
    pub format: Format,
}

pub fn images(args: Images, heaver: &Heaver) -> Result<()> {
    let images: BTreeMap<String, Image> = heaver
        .list_images()
        .context("failed to query images")?
        .into_iter()
        .collect();

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&images)?),
        Format::Table => print_table("ID\tUPDATED\tSIZE\tZFS PATH", &table_content(&images))?,
    }
    Ok(())
}

fn table_content(images: &BTreeMap<String, Image>) -> String {
    let mut content = String::new();
    for (id, image) in images {
        let _ = writeln!(
            content,
            "{}\t{}\t{}\t{}",
            id, image.updated, image.size, image.zfs_path
        );
    }
    content
}
