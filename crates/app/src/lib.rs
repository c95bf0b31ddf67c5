//! # sonosbridge-app
//!
//! Application layer — the event dispatch table and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound port):
//!   - `Controller` — deliver one command to the Sonos controller
//! - Define the **driving/inbound** use-cases:
//!   - `EventRouter` — map a wire event name to a command, or ignore it
//!   - `Dispatcher` — fire a command without waiting for the outcome
//! - Orchestrate domain objects without knowing *how* IO works
//!
//! ## Dependency rule
//! Depends on `sonosbridge-domain` only (plus `tokio` for task spawning).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dispatcher;
pub mod ports;
pub mod router;

#[cfg(test)]
pub(crate) mod fake;
