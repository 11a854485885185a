//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: bottom summary line
//! - `PaneTree`: transient wrapper that draws the attached split tree
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `OptionsBar`: pane count field and the four layout toggles; emits
//!   `ConfigChange`s for the controller
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── options_bar.rs   (Count field + toggles)
//! ├── pane_tree.rs     (Recursive split renderer)
//! └── status_bar.rs    (Bottom status line)
//! ```

pub mod options_bar;
pub mod pane_tree;
pub mod status_bar;

pub use options_bar::OptionsBar;
pub use pane_tree::PaneTree;
pub use status_bar::StatusBar;
