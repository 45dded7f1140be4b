//! Client for the Geo Engine REST API.
//!
//! Every API group lives in its own module under [`apis`] and is re-exported
//! here, so `geoengine_client::DatasetsApi` and friends are reachable from the
//! crate root. [`GeoEngineClient`] hands out all groups from one configuration.

pub mod apis;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use apis::registry::{api_surface, ApiGroup, ExportSurface};
pub use apis::*;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientConfig;

pub use crate::core::{Configuration, GeoEngineClient};
pub use utils::error::{ClientError, Result};
