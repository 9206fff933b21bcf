//! # Last.fm Integration Module
//!
//! This module provides the client side of the Last.fm web service,
//! implementing request construction, response decoding, and the multi-year
//! timeline aggregation that is the heart of the application. It is the only
//! layer that talks to the network; everything above it works with plain
//! data.
//!
//! ## Overview
//!
//! The Last.fm API is unusual in that a single endpoint serves every
//! operation, selected by a `method` query parameter, authenticated by a
//! plain API key, and answered in JSON envelopes whose shape depends on the
//! method and on whether the call succeeded. The module absorbs all of those
//! quirks and exposes a small typed surface to the rest of the application.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Last.fm Integration Layer
//!     ├── Routing (method names, query parameters)
//!     ├── Decoding (envelopes, partial success, error fallback)
//!     ├── Client (HTTP execution, typed errors)
//!     └── Timeline (concurrent per-year fan-out, bucketing)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Last.fm Web Service
//! ```
//!
//! ## Core Modules
//!
//! ### Routing
//!
//! [`route`] - Maps logical intents onto wire requests:
//! - **Single Endpoint**: every method shares one base URL
//! - **Common Parameters**: `api_key`, `format=json`, `method` on each call
//! - **Day Windows**: recent-track queries carry `from`/`to` epoch bounds
//! - **Typed Failure**: a malformed base URL is an error value, not a panic
//!
//! ### Decoding
//!
//! [`decode`] - Turns raw payloads into domain types:
//! - **Envelope Shapes**: `recenttracks`/`user` wrappers around the data
//! - **Partial Success**: malformed list elements are dropped, not fatal
//! - **Error Fallback**: failure payloads decoded as [`crate::types::ApiError`]
//! - **Field Defaults**: absent artist/album text falls back to placeholders
//!
//! ### Client
//!
//! [`client`] - Executes routes over HTTP:
//! - **Shared Pool**: one `reqwest::Client` reused across the fan-out
//! - **Fixed Timeout**: 10 seconds per individual request
//! - **No Retries**: failures surface immediately as typed errors
//!
//! ### Timeline
//!
//! [`timeline`] - The aggregation algorithm:
//! - **Anniversary Anchors**: one prior-year date per year back to 2002
//! - **Concurrent Fan-out**: all per-year requests in flight at once
//! - **Silent Omission**: failed or empty years simply do not appear
//! - **Deterministic Order**: buckets sorted by anchor, newest first
//!
//! ## Error Handling Philosophy
//!
//! All failures converge on [`crate::types::ApiError`], which travels through the
//! ordinary result channel. The service returns error bodies in a different
//! shape on the same endpoint and status code as success bodies, so the
//! decoder always tries the primary shape first, then the error envelope,
//! then wraps the original decode failure with a diagnostic dump. Nothing in
//! this module panics on malformed input.
//!
//! The timeline layer deliberately swallows per-year errors: a year that
//! times out renders exactly like a year with no scrobbles. That matches the
//! observed product behavior; callers that want visibility use the
//! `_with_failures` variant instead.
//!
//! ## Concurrency Model
//!
//! The fan-out issues up to one request per elapsed year with no concurrency
//! cap, matching the upstream network stack's own parallelism. Ordering of
//! responses is irrelevant; the merge step imposes the final order. The
//! whole aggregation is a single future, so dropping it cancels every
//! outstanding request as a unit.
//!
//! ## API Coverage
//!
//! - `method=user.getRecentTracks` - plays within a `from`/`to` window
//! - `method=user.getInfo` - profile data for a username
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with async support
//! - **serde_json** - envelope and record decoding
//! - **chrono** - day windows and calendar arithmetic
//! - **futures** - joining the concurrent per-year requests

pub mod client;
pub mod decode;
pub mod route;
pub mod timeline;

pub use client::LastfmClient;
pub use route::{Route, RouteError};
pub use timeline::START_YEAR;
