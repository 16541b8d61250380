use civ_services::{CivicClient, NewsService};

pub struct AppState {
    pub civic: CivicClient,
    pub news: NewsService,
}
