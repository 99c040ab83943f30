//! # libheaver
//! Driver for containers managed by the external `heaver` tool.
//! The crate builds argument vectors for heaver, runs it through an [`executor::Executor`]
//! and turns its free-form and JSON answers into [`Container`] and [`Image`] values.
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod action;
pub mod args;
pub mod catalog;
pub mod config;
pub mod container;
pub mod driver;
pub mod error;
pub mod executor;
pub mod image;
pub mod parse;

pub use action::Action;
pub use container::{Container, ContainerStatus};
pub use driver::Heaver;
pub use error::{HeaverError, Result};
pub use image::{Image, ImageCatalog};
