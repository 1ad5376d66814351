//! Settings module - pipeline configuration.

mod settings_model;

pub use settings_model::PipelineSettings;
