pub mod config;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod utils;

pub use config::UploadConfig;
pub use error::FatalError;
pub use services::storage::{ObjectStore, PutRequest, S3Store};
pub use services::uploader::{BatchSummary, Uploader};
