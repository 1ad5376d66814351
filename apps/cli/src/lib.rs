pub mod config;
pub mod render;
mod main_lib;

pub use main_lib::{build_service, init_tracing, run};
