pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use api::ApiClient;
pub use config::store::FileTokenStore;
pub use config::{CliConfig, Command, Settings};
pub use core::{AttendanceFilter, AttendanceStats};
pub use utils::error::{PortalError, Result};
