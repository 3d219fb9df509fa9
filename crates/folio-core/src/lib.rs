#![forbid(unsafe_code)]

//! `folio-core` holds everything about the portfolio site that does not need a
//! browser.
//!
//! Design goals:
//! - **Host-agnostic**: no DOM, no `fetch`, no timers. The embedding layer
//!   (`folio-web`) performs I/O and hands results to these types.
//! - **Deterministic**: card markup is a pure function of the records and the
//!   filter state, and debounce timing is driven by an explicit clock.
//! - **Testable natively**: every state machine here is exercised by plain
//!   `cargo test` without a WASM runtime.
//!
//! Module map:
//! - [`escape`]: HTML text escaping for interpolated fields.
//! - [`project`] / [`store`]: the record type and the load-once store.
//! - [`loader`]: response status checks and BOM-tolerant JSON parsing.
//! - [`render`]: project cards as markup, plus the empty-state decision.
//! - [`filter`] / [`debounce`]: text + featured filtering and input debounce.
//! - [`theme`], [`nav`], [`contact`]: the small UI state machines.
//! - [`messages`] / [`config`]: localized strings and site configuration.

pub mod config;
pub mod contact;
pub mod debounce;
pub mod escape;
pub mod filter;
pub mod loader;
pub mod messages;
pub mod nav;
pub mod project;
pub mod render;
pub mod store;
pub mod theme;

pub use config::{ConfigError, ElementIds, SiteConfig};
pub use contact::{ContactController, ContactPhase, FormStatus, StatusTone, SubmitError};
pub use debounce::{DebounceTicket, Debouncer};
pub use escape::escape_html;
pub use filter::{FilterController, FilterState, filter_projects};
pub use loader::{LoadError, parse_projects};
pub use messages::{Locale, Messages};
pub use nav::{NavAttributes, NavState};
pub use project::ProjectRecord;
pub use render::{CardMarkup, RenderOutcome, render_projects};
pub use store::ProjectStore;
pub use theme::{MemoryPreferences, PreferenceStore, StorageError, Theme, ThemeController};
