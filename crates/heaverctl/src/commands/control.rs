//! Contains functionality of start, stop and destroy commands
use anyhow::{Context, Result};
use clap::Parser;
use libheaver::{Action, Heaver};

/// Start a stopped container
#[derive(Parser, Debug)]
pub struct Start {
    #[clap(value_parser = clap::builder::NonEmptyStringValueParser::new(), required = true)]
    pub name: String,
}

/// Stop a running container
#[derive(Parser, Debug)]
pub struct Stop {
    #[clap(value_parser = clap::builder::NonEmptyStringValueParser::new(), required = true)]
    pub name: String,
}

/// Destroy a container
#[derive(Parser, Debug)]
pub struct Destroy {
    #[clap(value_parser = clap::builder::NonEmptyStringValueParser::new(), required = true)]
    pub name: String,
}

/// Apply a named action (start, stop or destroy) to a container
#[derive(Parser, Debug)]
pub struct Control {
    #[clap(value_parser = clap::builder::NonEmptyStringValueParser::new(), required = true)]
    pub name: String,
    pub action: Action,
}

pub fn start(args: Start, heaver: &Heaver) -> Result<()> {
    apply(heaver, &args.name, Action::Start)
}

pub fn stop(args: Stop, heaver: &Heaver) -> Result<()> {
    apply(heaver, &args.name, Action::Stop)
}

pub fn destroy(args: Destroy, heaver: &Heaver) -> Result<()> {
    apply(heaver, &args.name, Action::Destroy)
}

pub fn control(args: Control, heaver: &Heaver) -> Result<()> {
    apply(heaver, &args.name, args.action)
}

fn apply(heaver: &Heaver, name: &str, action: Action) -> Result<()> {
    heaver
        .control(name, action)
        .with_context(|| format!("failed to {action} container {name}"))?;
    println!("{name} {}", action.confirmation());
    Ok(())
}
