//! `nt-movement` — waypoint graph, definition-file I/O, and path lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`graph`]   | `MovementGraph`, `Waypoint`, `LegalPath`, `SpeedInterval`|
//! | [`loader`]  | section-delimited definition file: parse and write       |
//! | [`resolve`] | exact-match `(from, to)` path lookup                     |
//! | [`error`]   | `MovementError`, `MovementResult<T>`                     |
//!
//! # Path model
//!
//! Routes between spawn points are **precomputed**: the definition file
//! carries an explicit table of legal paths, and resolution is an exact
//! match on the `(from, to)` pair — there is no graph search and no
//! fallback.  A pair absent from the table resolves to an empty sequence.

pub mod error;
pub mod graph;
pub mod loader;
pub mod resolve;


pub use error::{MovementError, MovementResult};
pub use graph::{LegalPath, MovementGraph, SpeedInterval, Waypoint};
pub use loader::{load_graph, parse_graph, write_graph};
pub use resolve::resolve;
