//! Contains functionality of create container command
use anyhow::{Context, Result};
use clap::Parser;
use libheaver::Heaver;

/// Create and start a container from a stack of images
#[derive(Parser, Debug)]
pub struct Create {
    #[clap(value_parser = clap::builder::NonEmptyStringValueParser::new(), required = true)]
    pub name: String,
    /// image to build the container from, repeat for overlays (base first)
    #[clap(short, long = "image")]
    pub images: Vec<String>,
    /// raw public key installed into the container
    #[clap(long)]
    pub raw_key: Option<String>,
}

pub fn create(args: Create, heaver: &Heaver) -> Result<()> {
    let key = args.raw_key.as_deref().unwrap_or_default();
    let container = heaver
        .create(&args.name, args.images.as_slice(), key)
        .with_context(|| format!("failed to create container {}", args.name))?;
    println!("{}", serde_json::to_string_pretty(&container)?);
    Ok(())
}
