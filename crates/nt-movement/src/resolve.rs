//! Exact-match path resolution over the legal-path table.
//!
//! Resolution deliberately is a table lookup, not a search: the definition
//! file precomputes every traversable route, and the controller only ever
//! asks for pairs it expects to be present.  No reverse-direction matching,
//! no partial matching, no shortest-path fallback.

use nt_core::WaypointId;

use crate::graph::{MovementGraph, Waypoint};

/// Resolve the waypoint sequence from `from` to `to`.
///
/// Scans legal paths in insertion order and returns the hop sequence of the
/// first whose `(from, to)` pair matches exactly, mapped to waypoints.
/// Returns an empty sequence when no legal path matches — callers see a
/// terminal that simply never moves rather than an error.
///
/// Hop ids without a matching waypoint are dropped silently; the definition
/// file is not cross-validated.
///
/// Deterministic for a given graph; O(legal paths) per call, which is fine
/// because resolution only happens when a terminal exhausts its queue.
pub fn resolve(graph: &MovementGraph, from: WaypointId, to: WaypointId) -> Vec<Waypoint> {
    let Some(path) = graph
        .legal_paths
        .iter()
        .find(|p| p.from == from && p.to == to)
    else {
        log::debug!("no legal path from {from} to {to}");
        return Vec::new();
    };

    path.hops
        .iter()
        .filter_map(|&hop| graph.waypoint(hop).copied())
        .collect()
}
