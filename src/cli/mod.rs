//! # CLI Module
//!
//! This module provides the command-line interface layer for Rewindcli, a
//! Last.fm API client that rewinds through a user's listening history one
//! year at a time. It implements all user-facing CLI commands and
//! coordinates between the API client, on-disk data management, and user
//! interaction.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! application's functionality. It provides commands for:
//!
//! - **Timeline Browsing**: building and rendering the multi-year timeline
//! - **User Management**: selecting and inspecting the timeline's subject
//! - **Recent Usernames**: listing and editing previously looked-up users
//!
//! ## Command Categories
//!
//! ### Timeline
//!
//! - [`timeline`] - Fetches one day of plays per prior year concurrently,
//!   buckets them into years, and renders them newest first. Consults the
//!   daily freshness gate before touching the network.
//!
//! ### User Operations
//!
//! - [`user`] - Fetches and stores the current user's profile, or shows the
//!   stored one.
//!
//! ### Recent Usernames
//!
//! - [`recent`] - Shows, trims, or clears the most-recent-first username
//!   history.
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Data/Cache Management)
//!     ↓
//! API Layer (Last.fm Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the management and API modules while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Caching Strategy
//!
//! The timeline command coordinates the on-disk caches:
//!
//! - **User Cache**: the currently selected user
//! - **Timeline Cache**: the last fetched timeline per username, stamped
//!   with its fetch time
//! - **Freshness Gate**: a timeline fetched earlier the same local calendar
//!   day is reused rather than refetched
//!
//! ## Error Handling Philosophy
//!
//! User-facing commands do not propagate errors upward; they print a
//! formatted message and either continue with reduced output or terminate.
//! Partial failures degrade gracefully: a year that cannot be loaded is
//! reported as a warning while the rest of the timeline still renders.
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! rewindcli user lastfmjoe         # Select whose history to rewind
//! rewindcli timeline               # Show the timeline for today
//! ```
//!
//! ### Regular Usage
//! ```bash
//! rewindcli timeline --date 2020-08-16   # Anchor on another day
//! rewindcli timeline --force             # Ignore today's cached timeline
//! rewindcli recent                       # Previously looked-up users
//! ```

mod recent;
mod timeline;
mod user;

pub use recent::recent;
pub use timeline::timeline;
pub use user::user;
