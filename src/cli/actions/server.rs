use crate::{
    accounts::AccountService,
    api,
    catalog::CharacterCatalog,
    cli::telemetry,
    store::{JsonAccountStore, JsonCatalog},
};
use anyhow::Result;
use std::{path::PathBuf, sync::Arc};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub accounts: PathBuf,
    pub catalog: PathBuf,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Server args: {:?}", args);

    let accounts = AccountService::new(Arc::new(JsonAccountStore::new(args.accounts)));
    let catalog = CharacterCatalog::new(Arc::new(JsonCatalog::new(args.catalog)));

    let result = api::new(args.port, accounts, catalog).await;

    telemetry::shutdown_tracer();

    result
}
