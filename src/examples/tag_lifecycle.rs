//! Tag Lifecycle Example
//!
//! Creates a tag, renames it, attaches it to a document and deletes it again.
//!
//! Run with: PAPERLESS_URL=... PAPERLESS_TOKEN=... cargo run --example tag_lifecycle -- <document-id>

use paperless_rs::{Client, ClientConfig, ClientError, DocumentRequest, MatchingAlgorithm, TagRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("paperless_rs=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    let document_id: u64 = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: tag_lifecycle <document-id>"))?
        .parse()?;

    let client = Client::from_config(&ClientConfig::from_env()?)?;

    let tag = client
        .create_tag(&TagRequest {
            name: Some("example-tag".to_string()),
            color: Some("#a6cee3".to_string()),
            matching_algorithm: Some(MatchingAlgorithm::None),
            ..Default::default()
        })
        .await?;
    println!("✅ Created tag {} ({})", tag.id, tag.slug);

    let tag = client
        .update_tag(
            tag.id,
            &TagRequest {
                name: Some("example-tag-renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    println!("✏️  Renamed tag to {}", tag.name);

    let document = client.get_document(document_id).await?;
    let mut tags = document.tags.clone();
    tags.push(tag.id);
    let document = client
        .update_document(
            document.id,
            &DocumentRequest {
                tags: Some(tags),
                ..Default::default()
            },
        )
        .await?;
    println!("📎 Document '{}' now has tags {:?}", document.title, document.tags);

    client.delete_tag(tag.id).await?;
    println!("🗑️  Deleted tag {}", tag.id);

    match client.get_tag(tag.id).await {
        Err(ClientError::Status { status: 404, .. }) => println!("   Tag is gone"),
        Err(e) => return Err(e.into()),
        Ok(_) => println!("   Tag still exists"),
    }

    Ok(())
}
