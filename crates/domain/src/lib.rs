//! # sonosbridge-domain
//!
//! Pure domain model for the sonosbridge relay.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, the legacy `escape()` encoding
//! - Define **Events** (named messages received over the real-time channel)
//! - Define **Rooms** (the Sonos zone a command targets)
//! - Define **Commands** (the controller calls: play album, pause, resume)
//! - Contain all payload validation and path formatting
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod escape;

pub mod command;
pub mod event;
pub mod room;
