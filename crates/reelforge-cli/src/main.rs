//! reelforge CLI
//!
//! Headless front-end for the reelforge engine: composes and submits
//! slideshow edits and polls render status. Provider endpoints and keys
//! come from the environment:
//!
//! - `PEXELS_API_KEY`: image search provider key
//! - `SHOTSTACK_API_KEY`: render service key
//! - `SHOTSTACK_HOST`: optional render API base URL override

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use reelforge_core::render::ShotstackRender;
use reelforge_core::search::PexelsSearch;
use reelforge_core::service::{EditRequest, EditService};
use reelforge_core::template::TemplateRegistry;

#[derive(Parser)]
#[command(name = "reelforge", version, about = "Template-driven slideshow video generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a slideshow edit and submit it for rendering
    Submit {
        /// Image search query
        #[arg(long)]
        search: String,
        /// Title card text
        #[arg(long)]
        title: String,
        /// Soundtrack key (e.g. disco, melodic, palmtrees)
        #[arg(long)]
        soundtrack: String,
        /// Style template id; the catalog default when omitted
        #[arg(long)]
        template: Option<String>,
    },
    /// Look up the status of a render job
    Status {
        /// Render job id (UUID)
        id: String,
    },
    /// List the available style templates
    Templates,
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{} is not set", name))
}

fn build_service() -> Result<EditService> {
    let search = PexelsSearch::new(env_var("PEXELS_API_KEY")?)?;

    let mut render = ShotstackRender::new(env_var("SHOTSTACK_API_KEY")?)?;
    if let Ok(host) = std::env::var("SHOTSTACK_HOST") {
        tracing::debug!("Using render host override: {}", host);
        render = render.with_base_url(host);
    }

    Ok(EditService::new(
        TemplateRegistry::builtin(),
        Arc::new(search),
        Arc::new(render),
        StdRng::from_entropy(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Submit {
            search,
            title,
            soundtrack,
            template,
        } => {
            let service = build_service()?;
            let request = EditRequest {
                search,
                title,
                soundtrack,
                template,
            };
            let job = service.submit(&request).await?;
            println!("{}", serde_json::to_string_pretty(&job)?);
        }
        Command::Status { id } => {
            let service = build_service()?;
            let status = service.status(&id).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::Templates => {
            for id in TemplateRegistry::builtin().ids() {
                println!("{}", id);
            }
        }
    }

    Ok(())
}
