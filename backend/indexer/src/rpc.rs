//! Soroban RPC client — polls `getEvents` for the registry contracts and
//! decodes their events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//!
//! ## Wire format
//!
//! Requests set `xdrFormat: "json"`, so the RPC returns topics and data as
//! JSON-encoded `ScVal`s (`topicJson` / `valueJson`) instead of base64 XDR.
//! Each `ScVal` is an externally tagged object such as `{"symbol":"donation"}`
//! or `{"u64":"42"}`, and `#[contracttype]` payload structs arrive as
//! `{"map":[{"key":{"symbol":"amount"},"val":{"u128":"100"}}, ...]}`.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{AidEvent, EventKind};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// Topic list as JSON `ScVal`s
    #[serde(rename = "topicJson", default)]
    pub topic: Vec<Value>,
    /// Event data as a JSON `ScVal`
    #[serde(rename = "valueJson", default)]
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// One page of `getEvents` results.
#[derive(Debug)]
pub struct EventPage {
    pub events: Vec<RawEvent>,
    /// Opaque cursor to continue paging within the same range.
    pub cursor: Option<String>,
    pub latest_ledger: Option<u64>,
}

/// Doubling retry delay capped at [`MAX_BACKOFF_SECS`].
struct Backoff {
    secs: u64,
}

impl Backoff {
    fn new() -> Self {
        Self {
            secs: INITIAL_BACKOFF_SECS,
        }
    }

    async fn wait(&mut self) {
        tokio::time::sleep(Duration::from_secs(self.secs)).await;
        self.secs = (self.secs * 2).min(MAX_BACKOFF_SECS);
    }
}

/// JSON-RPC error codes that retrying cannot fix (invalid request / unknown method).
fn is_hard_rpc_error(code: i64) -> bool {
    matches!(code, -32600 | -32601)
}

/// Fetch a page of events from the RPC.
///
/// * `contract_ids` — registry contracts to follow, in a single filter.
/// * `start_ledger` — the ledger sequence to scan from (inclusive).
/// * `cursor`       — optional opaque pagination cursor from a previous response.
/// * `limit`        — maximum number of events to return.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<EventPage> {
    let mut backoff = Backoff::new();
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getEvents",
        "params": build_params(contract_ids, start_ledger, cursor, limit),
    });

    loop {
        let resp = match client.post(rpc_url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("RPC request failed (will retry in {}s): {e}", backoff.secs);
                backoff.wait().await;
                continue;
            }
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate-limited by RPC (will retry in {}s)", backoff.secs);
            backoff.wait().await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            if is_hard_rpc_error(err.code) {
                return Err(IndexerError::Rpc(format!(
                    "hard error {}: {}",
                    err.code, err.message
                )));
            }
            warn!(
                code = err.code,
                "RPC soft error (will retry in {}s): {}", backoff.secs, err.message
            );
            backoff.wait().await;
            continue;
        }

        let result = body
            .result
            .ok_or_else(|| IndexerError::Rpc("Empty result from getEvents".to_string()))?;

        debug!(
            count = result.events.len(),
            latest_ledger = ?result.latest_ledger,
            "Fetched events"
        );

        return Ok(EventPage {
            events: result.events,
            cursor: result.cursor,
            latest_ledger: result.latest_ledger,
        });
    }
}

fn build_params(contract_ids: &[String], start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "xdrFormat": "json",
        "filters": [
            {
                "type": "contract",
                "contractIds": contract_ids
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Fields pulled out of an event's data payload.
#[derive(Debug, Default, PartialEq, Eq)]
struct Payload {
    actor: Option<String>,
    amount: Option<String>,
    category: Option<String>,
}

/// Decode a list of raw RPC events into [`AidEvent`] structs.
///
/// Events from failed contract calls and events without topics are skipped.
pub fn decode_events(raw: &[RawEvent]) -> Vec<AidEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call.unwrap_or(true))
        .filter_map(decode_single)
        .collect()
}

fn decode_single(raw: &RawEvent) -> Option<AidEvent> {
    let kind = EventKind::from_topic(&scval_to_string(raw.topic.first()?).unwrap_or_default());

    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);
    let payload = decode_payload(&raw.value, &kind);

    Some(AidEvent {
        event_id: raw.id.clone().or_else(|| raw.paging_token.clone()),
        event_type: kind.as_str().to_string(),
        subject: raw.topic.get(1).and_then(scval_to_string),
        actor: payload.actor,
        amount: payload.amount,
        category: payload.category,
        ledger: raw.ledger.unwrap_or(0) as i64,
        timestamp,
        contract_id: raw.contract_id.clone(),
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Pull the interesting fields out of an event's payload struct.
fn decode_payload(value: &Value, kind: &EventKind) -> Payload {
    match kind {
        EventKind::AdminTransferred => Payload {
            actor: map_field(value, "new_admin"),
            ..Payload::default()
        },
        EventKind::DonorAdded | EventKind::DonorRemoved => Payload {
            actor: map_field(value, "donor"),
            ..Payload::default()
        },
        EventKind::DonationRecorded => Payload {
            actor: map_field(value, "donor"),
            amount: map_field(value, "amount"),
            ..Payload::default()
        },
        EventKind::RecipientAdded => Payload {
            actor: map_field(value, "recipient"),
            category: map_field(value, "needs_category"),
            ..Payload::default()
        },
        EventKind::RecipientRemoved | EventKind::AidReceived => Payload {
            actor: map_field(value, "recipient"),
            ..Payload::default()
        },
        EventKind::ImpactRecorded => Payload {
            actor: map_field(value, "recipient"),
            amount: map_field(value, "amount"),
            category: map_field(value, "category"),
        },
        EventKind::ImpactVerified => Payload {
            actor: map_field(value, "verifier"),
            amount: map_field(value, "amount"),
            category: map_field(value, "category"),
        },
        EventKind::Unknown => Payload::default(),
    }
}

/// Look up `key` in an `ScVal::Map` with symbol keys and render its value.
fn map_field(value: &Value, key: &str) -> Option<String> {
    value
        .get("map")?
        .as_array()?
        .iter()
        .find(|entry| {
            entry
                .get("key")
                .and_then(|k| k.get("symbol"))
                .and_then(Value::as_str)
                == Some(key)
        })
        .and_then(|entry| entry.get("val"))
        .and_then(scval_to_string)
}

/// Render a scalar `ScVal` (symbol, string, address, integer, bool) as a string.
///
/// 128-bit integers may arrive either as a decimal string or as `{hi, lo}` parts.
fn scval_to_string(v: &Value) -> Option<String> {
    let obj = v.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    let (_tag, inner) = obj.iter().next()?;
    match inner {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(parts) => {
            let hi = parts.get("hi").and_then(json_u64)?;
            let lo = parts.get("lo").and_then(json_u64)?;
            Some((((hi as u128) << 64) | lo as u128).to_string())
        }
        _ => None,
    }
}

fn json_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
