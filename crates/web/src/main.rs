use std::sync::Arc;

use anyhow::Context;

use invoicedash_infra::{InMemoryInvoiceData, SeedData};
use invoicedash_web::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    invoicedash_observability::init(config.log_format);

    let data = match &config.seed_path {
        Some(path) => {
            let seed = SeedData::load(path)
                .with_context(|| format!("failed to load seed data from {}", path.display()))?;
            InMemoryInvoiceData::from_seed(seed)
        }
        None => {
            tracing::warn!("SEED_PATH not set; starting with an empty data source");
            InMemoryInvoiceData::new()
        }
    };

    let app = invoicedash_web::app::build_app(Arc::new(data));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
