//! News lookup through a search-augmented chat completion model.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use civ_core::{Error, NewsArticle, Result};
use civ_extract::extract_articles;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that provides news about political figures. For each news article you find, provide the following information in a numbered list format:\n1. Title of the article in quotes\n2. URL\n3. Publication date\n4. Source name\n5. A brief summary\n\nAt the end, include a 'Recent Developments' section with links to the most important articles.";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    web_search_options: serde_json::Value,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// A completion backend with web search that can look up recent news.
#[async_trait]
pub trait SearchModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Returns the raw completion text for a news query.
    async fn search_news(&self, query: &str) -> Result<String>;
}

/// OpenAI chat completions with the search-preview model.
pub struct OpenAiSearchModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl OpenAiSearchModel {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.ok_or(Error::MissingApiKey("OPENAI_API_KEY"))?;
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        })
    }
}

impl fmt::Debug for OpenAiSearchModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSearchModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl SearchModel for OpenAiSearchModel {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn search_news(&self, query: &str) -> Result<String> {
        let request = ChatRequest {
            model: "gpt-4o-mini-search-preview".to_string(),
            web_search_options: serde_json::json!({}),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Find recent news about {}", query),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();
        tracing::debug!("received {} bytes of completion text", content.len());
        Ok(content)
    }
}

/// Turns raw model completions into structured article lists.
pub struct NewsService {
    model: Arc<dyn SearchModel>,
}

impl NewsService {
    pub fn new(model: Arc<dyn SearchModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Fetches and extracts news about an official.
    ///
    /// When extraction finds nothing in a non-empty completion, the raw
    /// text is handed back as a single degenerate article so the caller
    /// still has something to show.
    pub async fn fetch_news(&self, query: &str) -> Result<Vec<NewsArticle>> {
        let content = self.model.search_news(query).await?;
        if content.is_empty() {
            return Err(Error::Search("No news found".to_string()));
        }

        let articles = extract_articles(&content);
        if articles.is_empty() {
            return Ok(vec![NewsArticle {
                title: "News Results".to_string(),
                url: String::new(),
                date: String::new(),
                source: "Various Sources".to_string(),
                snippet: content,
            }]);
        }

        tracing::info!("extracted {} articles for query {:?}", articles.len(), query);
        Ok(articles)
    }
}
