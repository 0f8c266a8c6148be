pub mod api_models;
pub mod id;
pub mod language;
