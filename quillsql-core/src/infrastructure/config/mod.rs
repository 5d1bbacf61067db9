pub mod connection;
pub mod settings;

pub use crate::domain::settings::AppConfig;
pub use connection::{DatabaseTarget, DatabaseUrl};
pub use settings::load_config;
