//! Meal gateway: the pure half of the HTTP boundary.
//!
//! The plugin never performs network I/O itself. The Zellij host owns the HTTP
//! transport (`web_request`), executes the request off the plugin thread, and
//! delivers the result back onto the plugin's event loop as a `WebRequestResult`
//! event. This module holds everything around that boundary that is pure and
//! therefore testable without a host:
//!
//! - [`filter_url`]: builds the filter endpoint URL for an ingredient
//! - [`classify_response`]: turns a raw status/body pair into a [`FetchOutcome`]
//!
//! # Outcome taxonomy
//!
//! A fetch has exactly three outcomes, and the distinction matters to the UI:
//!
//! - `Meals`: the API returned at least one meal; the review queue is reset
//! - `Empty`: the API answered successfully but found nothing for the
//!   ingredient (`meals` is `null` or `[]`)
//! - `Failed`: transport error, non-2xx status, or a body that does not parse
//!
//! `Empty` and `Failed` are never merged: they produce different status
//! messages and neither touches the review queue.
//!
//! There is deliberately no retry, caching, or timeout handling here; every
//! ingredient selection issues a fresh request with the host's defaults.

mod request;
mod response;

pub use request::{filter_url, DEFAULT_API_BASE};
pub use response::{classify_response, FetchOutcome};
