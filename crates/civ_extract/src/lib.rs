pub mod divisions;
pub mod news;

pub use divisions::classify_division;
pub use news::extract_articles;

pub mod prelude {
    pub use super::divisions::classify_division;
    pub use super::news::extract_articles;
    pub use civ_core::{GovernmentLevel, NewsArticle};
}
