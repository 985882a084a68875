pub use async_trait;
pub use config;
pub use reqwest;

pub mod api;
pub mod configuration;
pub mod logging;
pub mod models;
