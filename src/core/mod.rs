//! # Core Layout Logic
//!
//! This module decides what shape the pane tree has.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • tree (split nodes)   │
//!                    │  • builder (shape)      │
//!                    │  • controller (rebuild) │
//!                    │                         │
//!                    │  No UI.                 │
//!                    └───────────┬─────────────┘
//!                                │ Host trait
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tree`]: `SplitTree` / `SplitNode`, two slots per node, and the split primitive
//! - [`builder`]: `build()`, the pane count → tree shape algorithm
//! - [`content`]: the `ContentFactory` trait and the stock pane views
//! - [`controller`]: the `Controller` that rebuilds on every config change
//! - [`theme`]: `ColorScheme` and its JSON format
//! - [`config`]: settings file, env vars and CLI resolution

pub mod builder;
pub mod config;
pub mod content;
pub mod controller;
pub mod theme;
pub mod tree;
