//! List Tags Example
//!
//! Connects to a Paperless-ngx server and prints its tags, correspondents and
//! document types.
//!
//! Configure with PAPERLESS_URL and PAPERLESS_TOKEN, or pass a JSON config
//! file path as the first argument.
//!
//! Run with: cargo run --example list_tags

use paperless_rs::{Client, ClientConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("paperless_rs=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    let config = match std::env::args().nth(1) {
        Some(path) => ClientConfig::load(&path)?,
        None => ClientConfig::from_env()?,
    };
    tracing::info!("Connecting to {}", config.base_url);

    let client = Client::from_config(&config)?;

    let tags = client.list_tags().await?;
    println!("🏷️  Tags ({}):", tags.len());
    for tag in &tags {
        let inbox = if tag.is_inbox_tag { " [inbox]" } else { "" };
        println!("   {:>4}  {}{} ({} documents)", tag.id, tag.name, inbox, tag.document_count);
    }

    let correspondents = client.list_correspondents().await?;
    println!("\n📇 Correspondents ({}):", correspondents.len());
    for correspondent in &correspondents {
        println!("   {:>4}  {}", correspondent.id, correspondent.name);
    }

    let document_types = client.list_document_types().await?;
    println!("\n📄 Document types ({}):", document_types.len());
    for document_type in &document_types {
        println!("   {:>4}  {}", document_type.id, document_type.name);
    }

    Ok(())
}
