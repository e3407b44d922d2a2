pub mod config;
pub mod dataset;
pub mod engine;
pub mod observability;

pub use dataset::{Dataset, DatasetError};
