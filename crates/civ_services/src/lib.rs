pub mod civic;
pub mod news;

pub use civic::CivicClient;
pub use news::{NewsService, OpenAiSearchModel, SearchModel};

pub mod prelude {
    pub use super::civic::CivicClient;
    pub use super::news::{NewsService, SearchModel};
    pub use civ_core::{Error, NewsArticle, Representative, Result};
}
