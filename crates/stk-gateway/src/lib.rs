//! STK push payment-initiation gateway.
//!
//! Accepts requests to charge a mobile-money subscriber, normalizes
//! the subscriber's phone number, submits an STK push via the PayHero
//! API, and polls the provider until the transaction resolves or a
//! time budget elapses.

pub mod api;
pub mod config;
pub mod confirm;
pub mod error;
pub mod phone;
pub mod provider;

pub use config::Config;
pub use confirm::{
    charge_and_confirm, ChargeParams, ConfirmConfig, ConfirmError, PollOutcome, PollStatus,
    TransactionStatus,
};
pub use error::GatewayError;
pub use provider::PaymentProvider;
