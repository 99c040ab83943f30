//! Container model
/// Values in this module are snapshots built from one heaver answer. They are never
/// refreshed or mutated by the driver after they are returned.
#[allow(clippy::module_inception)]
mod container;
pub mod status;

pub use container::Container;
pub use status::ContainerStatus;
