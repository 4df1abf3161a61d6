//! # dotmvw: HyperView session file builder
//!
//! Builds an in-memory document tree describing a visualization session
//! (pages, windows, graphics, models, results, contours, legends, notes)
//! and serializes it into the nested, tag-delimited `.mvw` session-file
//! format.
//!
//! ## Architecture
//!
//! - [`tree`] - Arena-backed document tree with typed navigation
//! - [`types`] - Node kinds and payloads
//! - [`render`] - Per-node output templates
//! - [`serialize`] - Pre-order serializer with deferred container closes
//! - [`writer`] - File output
//! - [`session`] - High-level assembly with defaults and handles
//! - [`config`] - TOML-described standard sessions
//!
//! ## Example
//!
//! ```no_run
//! use dotmvw::session::{PageOptions, Session, WindowOptions};
//!
//! fn main() -> dotmvw::Result<()> {
//!     let mut session = Session::new(
//!         "HyperWorks",
//!         "19",
//!         &["bezel.h3d".to_string()],
//!         &["bezel.h3d".to_string()],
//!     )?;
//!     let pages = session.add_pages(1, &PageOptions::default())?;
//!     session.add_windows(&pages[0], 1, 1, &WindowOptions::default())?;
//!     session.write("bezel.mvw")
//! }
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod serialize;
pub mod session;
pub mod tree;
pub mod types;
pub mod writer;

pub use config::SessionConfig;
pub use error::{Result, ResultExt, SessionError};
pub use session::Session;
pub use tree::{Node, NodeId, Tree};
pub use types::{FontSpec, NodeData, NodeKind};
