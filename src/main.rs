mod catalog;
mod config;
mod flow;
mod gateway;
mod models;
mod shell;
mod view;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use config::Config;
use flow::{AiResult, CreationFlow, DraftPhase, ListingForm};
use gateway::{GeminiGateway, MarketplaceAi};
use models::Category;
use shell::{reduce, Action, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "souqna", about = "Classifieds marketplace with AI-assisted listings")]
struct Cli {
    /// Gemini API key; falls back to GEMINI_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the home screen for a section
    Browse {
        #[arg(long, default_value = "real-estate")]
        category: Category,
    },
    /// Fetch grounded market insights and show them on the home screen
    Insights {
        #[arg(long, default_value = "real-estate")]
        category: Category,
    },
    /// Polish listing photos with AI (file paths or data: URIs)
    Enhance {
        #[arg(required = true)]
        images: Vec<String>,
        /// Output file; only valid with a single photo
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Turn a listing photo into a short video
    Video {
        image: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Fill in and publish a new listing (nothing is stored yet)
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long, default_value = "real-estate")]
        category: Category,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image: Option<String>,
    },
    /// List section tags and labels
    Categories,
    /// Dump catalog listings as JSON
    Listings {
        #[arg(long)]
        category: Option<Category>,
    },
}

fn build_gateway(config: &Config, api_key: Option<&str>) -> Result<Arc<dyn MarketplaceAi>> {
    let mut gateway = GeminiGateway::new(config).context("Failed to create Gemini gateway")?;
    if let Some(key) = api_key {
        gateway = gateway.with_api_key(key);
    }

    let models = gateway.models();
    debug!(
        base_url = gateway.base_url(),
        insights = %models.insights,
        image = %models.image,
        video = %models.video,
        "Gemini gateway ready"
    );
    Ok(Arc::new(gateway))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let catalog = Catalog::seeded();
    let api_key = cli.api_key.as_deref();

    match cli.command {
        Command::Browse { category } => {
            let state = reduce(&AppState::default(), Action::SelectCategory(category));
            println!("{}", view::render_home(&state, &catalog));
        }
        Command::Insights { category } => {
            let ai = build_gateway(&config, api_key)?;
            let state = reduce(&AppState::default(), Action::SelectCategory(category));

            let state = match shell::fetch_insights(&state, ai.as_ref()).await {
                Ok(action) => reduce(&state, action),
                Err(e) => {
                    warn!(error = %e, "Market insights unavailable, showing fallback");
                    state
                }
            };
            println!("{}", view::render_home(&state, &catalog));
        }
        Command::Enhance { images, out } => {
            if out.is_some() && images.len() > 1 {
                anyhow::bail!("--out can only be used with a single photo");
            }

            let ai = build_gateway(&config, api_key)?;
            let mut creation = CreationFlow::new(ai);

            for (i, source) in images.iter().enumerate() {
                if i > 0 {
                    creation.clear_image();
                }
                creation.stage_image(flow::load_image(source).await?);

                info!("🪄 Enhancing photo {}/{}", i + 1, images.len());
                let phase = creation.enhance_image().await;
                info!(?phase, "Enhance finished");
                println!("{}", view::render_creation(creation.draft()));

                let AiResult::Edited(edited) = creation.draft().result() else {
                    continue;
                };

                match (&out, flow::is_data_uri(source)) {
                    (None, true) => println!("{}", edited.to_data_uri()),
                    (out, _) => {
                        let out = out.clone().unwrap_or_else(|| {
                            PathBuf::from(source)
                                .with_extension(format!("enhanced.{}", edited.file_extension()))
                        });
                        tokio::fs::write(&out, &edited.bytes)
                            .await
                            .with_context(|| format!("Failed to write {}", out.display()))?;
                        info!("💾 Saved enhanced photo to {}", out.display());
                    }
                }
            }
            debug!(phase = ?creation.phase(), "Enhance session done");
        }
        Command::Video { image, out } => {
            let ai = build_gateway(&config, api_key)?;
            let mut creation = CreationFlow::new(ai);
            creation.stage_image(flow::load_image(&image).await?);

            let cancel = creation.cancel_token();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, cancelling video job");
                    cancel.cancel();
                }
            });

            info!(phase = ?creation.phase(), "🎬 Generating video (this can take minutes)");
            let phase = creation.generate_video().await;
            println!("{}", view::render_creation(creation.draft()));

            match (phase, creation.draft().result()) {
                (DraftPhase::Enhanced(_), AiResult::Generated(clip)) => {
                    clip.save_to(&out).await?;
                    info!("💾 Saved video to {}", out.display());
                }
                _ => error!("No video was produced"),
            }
        }
        Command::Publish {
            title,
            price,
            category,
            description,
            image,
        } => {
            if !ListingForm::category_choices().contains(&category) {
                anyhow::bail!("Listings cannot be posted under {}", category);
            }

            let mut state = reduce(&AppState::default(), Action::OpenCreation);
            let mut creation = CreationFlow::new(build_gateway(&config, api_key)?);
            if let Some(source) = image {
                creation.stage_image(flow::load_image(&source).await?);
            }

            creation.submit(ListingForm {
                title,
                price,
                category,
                description,
            });
            state = reduce(&state, Action::CloseCreation);
            info!("✅ Listing form closed (creation open: {})", state.creation_open);
        }
        Command::Categories => {
            for category in Category::ALL {
                println!("{} {:<16} {}", category.icon(), category.tag(), category.label());
            }
        }
        Command::Listings { category } => {
            let listings: Vec<_> = match category {
                Some(c) => catalog.by_category(c),
                None => catalog.all().iter().collect(),
            };
            let json = serde_json::to_string_pretty(&listings)?;
            println!("{}", json);
            info!("Listed {} listings", listings.len());
        }
    }

    Ok(())
}
