//! Payment confirmation polling.
//!
//! Submits an STK push charge, then polls the provider for the
//! transaction status until a terminal state or a wall-clock budget
//! elapses. Each charge attempt is single-shot: callers wanting a
//! retry must initiate a brand-new charge with a new reference.
//!
//! The poller runs inside the future handling one inbound request, so
//! a dropped client connection stops the polling with it.

use crate::provider::PaymentProvider;
use payhero_client::StkPushRequest;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::{debug, info, warn};

/// Classified transaction status.
///
/// The provider reports status as free text with an unconfirmed
/// vocabulary, so classification is centralized here and kept
/// auditable in one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Provider reports the charge as still in flight
    Pending,
    /// Subscriber authorized the charge
    Completed,
    /// Charge definitively failed
    Failed,
    /// Subscriber dismissed the payment prompt
    Cancelled,
    /// Status field absent or unrecognized
    Unknown,
}

impl TransactionStatus {
    /// Classify a free-text provider status by case-insensitive
    /// substring match.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("completed") || lower.contains("success") {
            Self::Completed
        } else if lower.contains("failed") {
            Self::Failed
        } else if lower.contains("cancelled") {
            Self::Cancelled
        } else if lower.contains("pending") {
            Self::Pending
        } else {
            Self::Unknown
        }
    }

    /// Whether this status ends the polling loop.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Final state of one confirmation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// The provider reported a terminal status within the budget.
    Resolved(TransactionStatus),
    /// The budget elapsed without a terminal status. The charge may
    /// still resolve out-of-band.
    TimedOut,
}

/// Outcome of a charge-and-confirm attempt.
#[derive(Debug, Clone)]
pub struct PollOutcome {
    /// Provider-issued reference for this charge attempt.
    pub reference: String,
    /// Final classification.
    pub status: PollStatus,
    /// Last-seen raw provider payload, if any poll succeeded.
    pub details: Option<serde_json::Value>,
}

impl PollOutcome {
    /// Whether the charge completed successfully.
    pub fn is_success(&self) -> bool {
        matches!(
            self.status,
            PollStatus::Resolved(TransactionStatus::Completed)
        )
    }

    /// Whether the provider reported any terminal status.
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, PollStatus::Resolved(_))
    }
}

/// Pre-polling failures. Everything after a reference exists is a
/// [`PollOutcome`], not an error.
#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("Charge submission failed: {0}")]
    Submission(#[from] payhero_client::PayHeroError),

    #[error("Provider returned no reference for the charge attempt")]
    NoReference,
}

/// Configuration for one confirmation poller.
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    /// Payment provider identifier sent with each charge.
    pub provider: String,
    /// Merchant channel/account identifier.
    pub channel_id: String,
    /// Customer name used when the caller supplies none.
    pub default_customer_name: String,
    /// Optional provider callback URL.
    pub callback_url: Option<String>,
    /// Total wall-clock budget for polling.
    pub budget: Duration,
    /// Delay between consecutive status polls.
    pub interval: Duration,
}

/// Caller-supplied parameters for one charge attempt.
#[derive(Debug, Clone)]
pub struct ChargeParams {
    /// Normalized subscriber phone number (254XXXXXXXXX).
    pub phone_number: String,
    /// Validated charge amount in KES.
    pub amount: f64,
    /// Merchant reference; synthesized if absent.
    pub external_reference: Option<String>,
    /// Customer name; defaulted if absent.
    pub customer_name: Option<String>,
}

/// Submit a charge and poll until it resolves or the budget elapses.
///
/// State machine: `Submitted → Polling → {Completed | Failed |
/// TimedOut}`. A transient error from a single status query is logged
/// and swallowed; only a terminal status or the expiring budget ends
/// the loop. Submission errors are never retried here.
pub async fn charge_and_confirm(
    provider: &dyn PaymentProvider,
    cfg: &ConfirmConfig,
    params: ChargeParams,
) -> Result<PollOutcome, ConfirmError> {
    let external_reference = params
        .external_reference
        .unwrap_or_else(|| format!("STK-{}", chrono::Utc::now().timestamp_millis()));
    let customer_name = params
        .customer_name
        .unwrap_or_else(|| cfg.default_customer_name.clone());

    let request = StkPushRequest {
        amount: params.amount,
        phone_number: params.phone_number.clone(),
        channel_id: cfg.channel_id.clone(),
        provider: cfg.provider.clone(),
        external_reference,
        customer_name,
        callback_url: cfg.callback_url.clone(),
    };

    let response = provider.initiate_charge(&request).await?;

    // The reference is the only handle for status queries; without it
    // this attempt is unrecoverable.
    let reference = response
        .usable_reference()
        .ok_or(ConfirmError::NoReference)?
        .to_string();

    info!(
        reference = %reference,
        phone_number = %params.phone_number,
        amount = params.amount,
        "Charge submitted, polling for confirmation"
    );

    let deadline = Instant::now() + cfg.budget;
    let mut last_details: Option<serde_json::Value> = None;

    loop {
        // Delay bounded by the overall deadline; the budget expiring
        // mid-sleep ends the attempt as unresolved.
        if timeout_at(deadline, sleep(cfg.interval)).await.is_err() {
            debug!(reference = %reference, "Confirmation budget exhausted during delay");
            return Ok(PollOutcome {
                reference,
                status: PollStatus::TimedOut,
                details: last_details,
            });
        }

        match provider.query_status(&reference).await {
            Ok(details) => {
                let status_text = details
                    .get("status")
                    .and_then(|s| s.as_str())
                    .unwrap_or_default();
                let status = TransactionStatus::classify(status_text);
                debug!(reference = %reference, status_text = %status_text, ?status, "Status poll");
                last_details = Some(details);

                if status.is_terminal() {
                    info!(reference = %reference, %status, "Transaction resolved");
                    return Ok(PollOutcome {
                        reference,
                        status: PollStatus::Resolved(status),
                        details: last_details,
                    });
                }
            }
            Err(e) => {
                // Transient: the charge may still resolve before the
                // budget runs out.
                warn!(reference = %reference, error = %e, "Status poll failed, continuing");
            }
        }

        if Instant::now() >= deadline {
            debug!(reference = %reference, "Confirmation budget exhausted");
            return Ok(PollOutcome {
                reference,
                status: PollStatus::TimedOut,
                details: last_details,
            });
        }
    }
}
