pub mod api_client;
pub mod client;
pub mod configuration;

pub use api_client::ApiClient;
pub use client::GeoEngineClient;
pub use configuration::Configuration;
