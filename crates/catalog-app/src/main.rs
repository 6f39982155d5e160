//! # Catalog App
//!
//! Mounts both screens against the configured backend and prints what they
//! show.
//!
//! ```bash
//! CATALOG_AUTH_TOKEN=... RUST_LOG=info cargo run -p catalog-app -- [search-term] [category-id]
//! ```

use catalog_app::api::{CatalogApi, HttpCatalogApi};
use catalog_app::browse_screen::Sidebar;
use catalog_app::clients::ScreenHandle;
use catalog_app::config::CatalogConfig;
use catalog_app::format::format_date;
use catalog_app::lifecycle::CatalogSystem;
use screen_framework::tracing::setup_tracing;
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let mut args = std::env::args().skip(1);
    let term = args.next().unwrap_or_default();
    let category = args.next();

    let config = CatalogConfig::from_env();
    info!(api_url = %config.api_url, "Starting catalog screens");

    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogApi::new(config.api_url.clone()));
    let system = CatalogSystem::start(api, &config, category.clone());

    // Admin: mount already loaded the lists; the first command queues behind it.
    let span = tracing::info_span!("admin");
    async {
        system.admin.set_filter(term.as_str()).await.map_err(|e| e.to_string())?;
        let state = system.admin.snapshot();
        println!("== {} / {} sản phẩm ==", state.filtered.len(), state.products.len());
        for product in &state.filtered {
            println!(
                "{:<10} {:<30} {:>6} {:<10} {}",
                product.product_code,
                product.product_name,
                product.available_stock,
                state.category_name(product.category_id).unwrap_or("-"),
                format_date(&product.created_date),
            );
        }
        for notice in &state.notices {
            println!("! {notice}");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Browse: the initial resolution is generation 1.
    let span = tracing::info_span!("browse", category = ?category);
    async {
        let state = system
            .browse
            .wait_until_settled(1)
            .await
            .map_err(|e| e.to_string())?;
        let header = state.header();
        println!("== {} ==\n{}", header.title, header.description);
        if let Sidebar::Links(links) = state.sidebar() {
            for link in links {
                let marker = if link.current { ">" } else { " " };
                println!("{marker} {}", link.label);
            }
        }
        for card in &state.products {
            println!("  {} {:?}", card.product_name, card.price);
        }
        if let Some(notice) = state.notice {
            println!("! {notice}");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
