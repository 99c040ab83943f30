//! Lifecycle operations backed by heaver
//!
//! Every operation is one synchronous round trip: build the argument vector,
//! run the tool once, interpret what it printed. Nothing is cached between calls.
use std::collections::HashMap;
use std::path::Path;

use tracing::instrument;

use crate::action::Action;
use crate::args;
use crate::catalog;
use crate::config::DriverConfig;
use crate::container::Container;
use crate::error::{HeaverError, Result};
use crate::executor::{self, Executor};
use crate::image::ImageCatalog;
use crate::parse;

/// Handle to the heaver tools. Methods take `&self`, so one driver can serve
/// concurrent callers.
///
/// # Example
///
/// ```no_run
/// use libheaver::config::DriverConfig;
/// use libheaver::Heaver;
///
/// # fn main() -> libheaver::Result<()> {
/// let heaver = Heaver::new(DriverConfig::default());
/// let container = heaver.create("box1", &["base", "overlay1"], "")?;
/// heaver.stop(&container.name)?;
/// # Ok(())
/// # }
/// ```
pub struct Heaver {
    config: DriverConfig,
    executor: Box<dyn Executor>,
}

impl Heaver {
    pub fn new(config: DriverConfig) -> Self {
        let executor = executor::create_executor(config.timeout());
        Self { config, executor }
    }

    pub fn with_executor(config: DriverConfig, executor: Box<dyn Executor>) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    /// Creates and starts a container built from `images`, base layer first.
    /// The address is taken from heaver's answer when it prints one.
    #[instrument(level = "debug", skip(self, images, key))]
    pub fn create<S: AsRef<str>>(&self, name: &str, images: &[S], key: &str) -> Result<Container> {
        let argv = args::create(name, images, key, &self.config.net_interface)?;
        let output = self.invoke(&self.config.heaver_path, &argv)?;

        let ip = parse::find_ip(&output);
        if ip.is_none() {
            tracing::warn!(name, "heaver did not report an address for the new container");
        }
        let images = images.iter().map(|i| i.as_ref().to_owned()).collect();
        Ok(Container::created(name, images, ip))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn control(&self, name: &str, action: Action) -> Result<()> {
        let argv = args::control(name, action)?;
        let output = self.invoke(&self.config.heaver_path, &argv)?;

        if !parse::is_confirmed(&output, action) {
            tracing::error!(name, %action, output = %output, "heaver did not confirm the action");
            return Err(HeaverError::Protocol { action, output });
        }
        Ok(())
    }

    /// Like [`Heaver::control`], with the action given by name
    pub fn control_str(&self, name: &str, action: &str) -> Result<()> {
        let action = Action::try_from(action)?;
        self.control(name, action)
    }

    pub fn start(&self, name: &str) -> Result<()> {
        self.control(name, Action::Start)
    }

    pub fn stop(&self, name: &str) -> Result<()> {
        self.control(name, Action::Stop)
    }

    pub fn destroy(&self, name: &str) -> Result<()> {
        self.control(name, Action::Destroy)
    }

    /// Lists containers known to heaver. `host` is stamped on every entry.
    #[instrument(level = "debug", skip(self))]
    pub fn list_containers(&self, host: Option<&str>) -> Result<HashMap<String, Container>> {
        let output = self.invoke(&self.config.heaver_path, &args::list_containers())?;
        let containers = parse::parse_listing(&output, host);
        tracing::debug!(count = containers.len(), "listed containers");
        Ok(containers)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn list_images(&self) -> Result<ImageCatalog> {
        let raw = self.run(&self.config.image_tool_path, &args::list_images())?;
        Ok(catalog::decode(&raw)?)
    }

    fn run(&self, program: &Path, argv: &[String]) -> Result<Vec<u8>> {
        // argv may carry a raw key, only the operation flag is logged
        let operation = argv.get(1).map(String::as_str).unwrap_or_default();
        tracing::debug!(?program, operation, "invoking external tool");
        self.executor.run(program, argv).map_err(|err| {
            tracing::error!(?program, operation, "external tool failed: {}", err);
            HeaverError::Execution(err)
        })
    }

    fn invoke(&self, program: &Path, argv: &[String]) -> Result<String> {
        let raw = self.run(program, argv)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}
