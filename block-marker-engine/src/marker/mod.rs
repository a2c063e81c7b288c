//! Marking, resolving and highlighting of block coordinates.
//!
//! This is the heart of the application: a durable set of marked block
//! positions, a resolver that expands one targeted cell to every cell of its
//! multi-block structure, and a render-facing cache that mirrors the set while
//! highlighting is switched on.
//!
//! ## Mutation Flow
//!
//! ```text
//! Key press (mark / unmark)
//!   └─> raycast for the targeted cell
//!       └─> resolver::resolve() expands to the full structure
//!           └─> CoordStore::store_all() / remove_all()
//!               ├─> stage difference against the current set
//!               ├─> apply tentatively, rewrite the whole file
//!               ├─> roll back on a failed write
//!               └─> BatchOutcome { status, changed }
//!                   └─> HighlightCache::apply_added() / apply_removed()
//! ```
//!
//! The cache only ever consumes the `changed` delta of an outcome, never the
//! resolver output: a batch that partially no-ops must not resurrect or drop
//! cells the store did not actually touch.
//!
//! ## Ownership
//!
//! `CoordStore` and `HighlightCache` are plain values owned by the Bevy world
//! as resources. Everything runs on the main schedule; file writes are small,
//! synchronous and rare (one per successful mutation).

/// Integer block coordinates and cell geometry helpers.
pub mod coord;

/// Render-facing highlight cache fed by store deltas.
pub mod highlight;

/// Structure-link resolution from one anchor cell to its full structure.
///
/// Pure rule application over a [`resolver::BlockQuery`] capability.
pub mod resolver;

/// Durable coordinate set with batch mutations and rollback.
pub mod store;
