//! # heaverctl
//! Command line front end for containers managed by heaver.
//! Every subcommand maps to exactly one call into `libheaver`.
mod commands;
mod observability;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{crate_version, Args, Parser, Subcommand};
use libheaver::config::DriverConfig;
use libheaver::Heaver;

#[derive(Parser, Debug)]
#[clap(version = crate_version!(), author = env!("CARGO_PKG_AUTHORS"))]
struct Opts {
    #[clap(flatten)]
    global: GlobalOpts,

    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// set the log file to write heaverctl logs to (default is '/dev/stderr')
    #[clap(short, long)]
    pub log: Option<PathBuf>,
    /// change log level to debug, but the `log-level` flag takes precedence
    #[clap(long)]
    pub debug: bool,
    /// set the log level (default is 'error')
    #[clap(long)]
    pub log_level: Option<String>,
    /// set the log format ('text' (default), or 'json') (default: "text")
    #[clap(long)]
    pub log_format: Option<String>,
    /// also send logs to journald
    #[clap(long)]
    pub systemd_log: bool,
    /// driver configuration file (JSON)
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// path to the heaver binary
    #[clap(long)]
    pub heaver: Option<PathBuf>,
    /// path to the heaver-img binary
    #[clap(long)]
    pub image_tool: Option<PathBuf>,
    /// network interface new containers are attached to
    #[clap(long)]
    pub net: Option<String>,
    /// seconds to wait for heaver before giving up
    #[clap(long)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    Create(commands::create::Create),
    Start(commands::control::Start),
    Stop(commands::control::Stop),
    Destroy(commands::control::Destroy),
    Control(commands::control::Control),
    List(commands::list::List),
    Images(commands::images::Images),
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if let Err(e) = observability::init(&opts) {
        eprintln!("log init failed: {:?}", e);
    }

    tracing::debug!("started with {:?}", std::env::args_os());
    let config = driver_config(&opts.global)?;
    let heaver = Heaver::new(config);

    match opts.subcmd {
        SubCommand::Create(create) => commands::create::create(create, &heaver),
        SubCommand::Start(start) => commands::control::start(start, &heaver),
        SubCommand::Stop(stop) => commands::control::stop(stop, &heaver),
        SubCommand::Destroy(destroy) => commands::control::destroy(destroy, &heaver),
        SubCommand::Control(control) => commands::control::control(control, &heaver),
        SubCommand::List(list) => commands::list::list(list, &heaver),
        SubCommand::Images(images) => commands::images::images(images, &heaver),
    }
}

/// Config file first, then command line overrides
fn driver_config(global: &GlobalOpts) -> Result<DriverConfig> {
    let mut config = match &global.config {
        Some(path) => DriverConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DriverConfig::default(),
    };

    if let Some(heaver) = &global.heaver {
        config.heaver_path = heaver.to_owned();
    }
    if let Some(image_tool) = &global.image_tool {
        config.image_tool_path = image_tool.to_owned();
    }
    if let Some(net) = &global.net {
        config.net_interface = net.to_owned();
    }
    if global.timeout.is_some() {
        config.timeout_secs = global.timeout;
    }

    Ok(config)
}
