pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::SwimlaneError;
pub use result::SwimlaneResult;
