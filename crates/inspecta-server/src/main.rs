//! Inspecta catalog: application entry point.

mod config;

use inspecta_core::{CatalogResult, LanguagePreference, Translator};
use inspecta_state::{CatalogState, GroupTable};
use inspecta_store::MemoryCatalogRepository;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> CatalogResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inspecta=info"));
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting inspecta catalog...");

    let config = AppConfig::default();

    let preference = LanguagePreference::new(&config.preferences_path);
    let language = match preference.load() {
        Ok(saved) => saved.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable language preference");
            Default::default()
        }
    };
    let translator = Translator::new(language);
    info!(
        language = language.code(),
        rtl = translator.is_rtl(),
        title = %translator.translate("app.title"),
        "Language selected"
    );

    let repo = MemoryCatalogRepository::seeded(config.store.clone())?;
    let state = CatalogState::initialize(repo, config.state.clone()).await;
    if let Some(error) = state.status().await.error {
        warn!(%error, "Catalog did not load");
    }

    let groups = state.groups().await;
    let mut table = GroupTable::new(config.state.page_size, language);
    table.apply(&groups);

    let page = table.page();
    info!(
        total = page.total,
        offset = page.offset,
        limit = page.limit,
        "Group table ready"
    );
    for row in &page.items {
        info!(
            group_id = %row.id,
            name = %row.display_name,
            status = %translator.translate(row.status_key),
            total = row.counters.total,
            active = row.counters.active,
            inactive = row.counters.inactive,
            "Group"
        );
    }

    preference.save(language)?;

    info!("Inspecta catalog stopped.");
    Ok(())
}
