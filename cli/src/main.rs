#![allow(clippy::exit)]

use std::sync::Arc;

use anyhow::{Context as _, Result, bail};
use clap::Parser as _;
use tracing::{debug, instrument};
use userlist_business::{BusinessConfig, StoreState};
use userlist_cli::cli::Cli;
use userlist_cli::output::Output;
use userlist_cli::scroll::{build_store, reload, scroll, switch_layout};
use userlist_cli::timing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with timing support
    timing::init_tracing(cli.verbose, cli.timing);

    let config = cli.apply_to(BusinessConfig::init().context("Failed to load configuration")?);
    if config.page_size() == 0 {
        bail!("--page-size must be greater than zero");
    }

    let state = run(&cli, &config).await;
    let out = Output::new();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(state.as_ref())?);
    } else {
        match cli.detail {
            Some(position) if state.error_message().is_none() => {
                if !out.user_detail(&state, position) {
                    out.error(format!(
                        "No user at position {position}; {} loaded",
                        state.users().len()
                    ));
                    std::process::exit(1);
                }
            }
            _ => out.store_state(&state, cli.columns),
        }
    }

    if let Some(message) = state.error_message() {
        if cli.json {
            out.error(message);
        }
        std::process::exit(1);
    }
    Ok(())
}

#[instrument(skip_all, name = "run", fields(base_url = config.api_base_url()))]
async fn run(cli: &Cli, config: &BusinessConfig) -> Arc<StoreState> {
    let mut store = build_store(config);
    let updates = store.subscribe();

    switch_layout(&mut store, cli.mode.into());
    scroll(&mut store, cli.pages).await;

    let state = if cli.reload {
        reload(&mut store).await
    } else {
        store.snapshot()
    };

    debug!("{} state update(s) published", updates.drain().len());
    state
}
