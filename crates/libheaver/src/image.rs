//! Filesystem images known to heaver-img
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Image metadata as reported by heaver-img. Values are passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Image {
    pub updated: String,
    pub size: u64,
    pub zfs_path: String,
}

/// Images keyed by their identifier
pub type ImageCatalog = HashMap<String, Image>;
