//! # Core Editing Logic
//!
//! The line buffer, cursor and key dispatch of the note editor, plus the
//! note store and configuration. It knows nothing about any specific
//! terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Editor (state)       │
//!                    │  • Key (input)          │
//!                    │  • update() (dispatch)  │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │  Adapter   │          │ (commands) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`buffer`]: `LineBuffer`, the lines being edited
//! - [`cursor`]: `Cursor` movement and screen `Geometry`
//! - [`key`]: `Key` and its numeric encoding
//! - [`state`]: `Editor`, all session state in one place
//! - [`action`]: `update()`, the key dispatcher
//! - [`store`]: JSON note persistence
//! - [`config`]: settings with defaults → file → env → CLI resolution

pub mod action;
pub mod buffer;
pub mod config;
pub mod cursor;
pub mod key;
pub mod state;
pub mod store;

pub use action::{Effect, update};
pub use cursor::{Cursor, Geometry};
pub use key::Key;
pub use state::{Editor, Mode};
