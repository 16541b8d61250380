pub mod error;
pub mod types;

pub use error::Error;
pub use types::{Address, GovernmentLevel, NewsArticle, Representative};

pub type Result<T> = std::result::Result<T, Error>;
