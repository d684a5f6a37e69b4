pub mod api;
pub mod config;
pub mod constants;
pub mod logging;
pub mod monitor;
pub mod shared_types;
pub mod utils;
