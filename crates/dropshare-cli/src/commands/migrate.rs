//! Database migration command.

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_database::PgDocumentStore;

use crate::output;

/// Execute the migrate command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.store.provider != "postgres" {
        output::print_warning(&format!(
            "Store provider is '{}'; there is nothing to migrate.",
            config.store.provider
        ));
        return Ok(());
    }

    let store = PgDocumentStore::connect(&config.store).await?;
    store.migrate().await?;
    output::print_success(&format!(
        "Collection '{}' is ready.",
        store.collection()
    ));

    Ok(())
}
