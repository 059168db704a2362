pub mod config;
pub mod contract;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod postal;
pub mod telemetry;

pub use error::AppError;
