use clap::Parser;
use std::sync::Arc;
use tracing::info;

use civ_core::{Address, GovernmentLevel, Result};
use civ_services::{CivicClient, NewsService, OpenAiSearchModel, SearchModel};
use civ_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Google Civic Information API key. Falls back to GOOGLE_API_KEY.
    #[arg(long)]
    civic_api_key: Option<String>,
    /// OpenAI API key. Falls back to OPENAI_API_KEY.
    #[arg(long)]
    openai_api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        listen: String,
    },
    /// Look up elected officials for a street address
    Lookup {
        street: String,
        city: String,
        state: String,
        zip_code: String,
    },
    /// Fetch recent news about an elected official
    News { query: String },
}

fn key_or_env(flag: Option<String>, var: &str) -> Option<String> {
    flag.or_else(|| std::env::var(var).ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let civic_key = key_or_env(cli.civic_api_key, "GOOGLE_API_KEY");
    let openai_key = key_or_env(cli.openai_api_key, "OPENAI_API_KEY");

    match cli.command {
        Commands::Serve { listen } => {
            let civic = CivicClient::new(civic_key)?;
            let model = Arc::new(OpenAiSearchModel::new(openai_key)?);
            info!("🧠 Search model initialized ({})", model.name());
            let news = NewsService::new(model);

            let app = civ_web::create_app(AppState { civic, news }).await;
            let listener = tokio::net::TcpListener::bind(&listen).await?;
            info!("🏛️ Listening on {}", listen);
            axum::serve(listener, app).await?;
        }
        Commands::Lookup {
            street,
            city,
            state,
            zip_code,
        } => {
            let civic = CivicClient::new(civic_key)?;
            let address = Address {
                street,
                city,
                state,
                zip_code,
            };
            let representatives = civic.lookup(&address).await?;
            info!(
                "🏛️ Found {} officials for {}",
                representatives.len(),
                address.formatted()
            );

            for level in GovernmentLevel::ALL {
                let group: Vec<_> = representatives
                    .iter()
                    .filter(|rep| rep.level == level)
                    .collect();
                if group.is_empty() {
                    continue;
                }
                println!("{}:", level.as_str());
                for rep in group {
                    match &rep.party {
                        Some(party) => println!("  {} ({}) - {}", rep.name, party, rep.office),
                        None => println!("  {} - {}", rep.name, rep.office),
                    }
                }
            }
        }
        Commands::News { query } => {
            let model = Arc::new(OpenAiSearchModel::new(openai_key)?);
            let news = NewsService::new(model);
            let articles = news.fetch_news(&query).await?;
            info!("📰 Found {} articles about {}", articles.len(), query);

            for article in articles {
                println!("📰 {}", article.title);
                if !article.source.is_empty() || !article.date.is_empty() {
                    println!("   {} {}", article.source, article.date);
                }
                if !article.url.is_empty() {
                    println!("   {}", article.url);
                }
                if !article.snippet.is_empty() {
                    println!("   {}", article.snippet);
                }
            }
        }
    }

    Ok(())
}
