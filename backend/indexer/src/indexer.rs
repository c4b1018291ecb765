//! Long-running background task that polls the Soroban RPC and writes
//! decoded aid ledger events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::db;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Poll until `shutdown` is cancelled.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!(contracts = ?state.config.contract_ids, "Indexer starting");

    // Load the cursor from the DB; fall back to config start_ledger.
    let (last_ledger, mut cursor) = match db::load_cursor(&state.pool).await {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Could not read saved cursor, starting fresh: {e}");
            (0, None)
        }
    };
    let mut current_ledger = if last_ledger > 0 {
        last_ledger as u32
    } else {
        state.config.start_ledger
    };

    info!("Resuming from ledger {current_ledger}");

    let interval = Duration::from_secs(state.config.poll_interval_secs);
    loop {
        // `fetch_events` retries until the RPC answers, so the poll itself
        // must be raced against shutdown.
        let polled = tokio::select! {
            biased;
            _ = shutdown.cancelled() => None,
            polled = poll_once(&state, current_ledger, cursor.as_deref()) => Some(polled),
        };

        match polled {
            None => {
                info!("Indexer stopping at ledger {current_ledger}");
                return;
            }
            Some(Ok((next_ledger, next_cursor))) => {
                current_ledger = next_ledger;
                cursor = next_cursor;
            }
            Some(Err(e)) => error!("Indexer poll error: {e}"),
        }

        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Indexer stopping at ledger {current_ledger}");
                return;
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

/// Perform a single poll iteration.
///
/// Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    state: &IndexerState,
    start_ledger: u32,
    cursor: Option<&str>,
) -> crate::errors::Result<(u32, Option<String>)> {
    let config = &state.config;
    let page = rpc::fetch_events(
        &state.client,
        &config.rpc_url,
        &config.contract_ids,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    // A cursor keeps paging within the current range; once it runs out we
    // jump ahead to the latest ledger the RPC reported.
    let next_ledger = page
        .latest_ledger
        .map(|l| (l as u32).max(start_ledger))
        .unwrap_or(start_ledger);

    // Persist cursor so restarts are deterministic.
    db::save_cursor(&state.pool, next_ledger as i64, page.cursor.as_deref()).await?;

    Ok((next_ledger, page.cursor))
}
