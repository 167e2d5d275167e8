use crate::cli::{
    actions::{server::Args, Action},
    commands::{ARG_ACCOUNTS, ARG_CATALOG, ARG_PORT},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if a document path is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8000);
    let accounts = matches
        .get_one::<String>(ARG_ACCOUNTS)
        .map(PathBuf::from)
        .context("missing required argument: --accounts")?;
    let catalog = matches
        .get_one::<String>(ARG_CATALOG)
        .map(PathBuf::from)
        .context("missing required argument: --catalog")?;

    Ok(Action::Server(Args {
        port,
        accounts,
        catalog,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn maps_matches_to_server_args() {
        let matches = commands::new().get_matches_from(vec![
            "sanrio",
            "-p",
            "9000",
            "--accounts",
            "accounts.json",
            "--catalog",
            "catalog.json",
        ]);

        let Action::Server(args) = handler(&matches).unwrap();
        assert_eq!(args.port, 9000);
        assert_eq!(args.accounts, PathBuf::from("accounts.json"));
        assert_eq!(args.catalog, PathBuf::from("catalog.json"));
    }
}
