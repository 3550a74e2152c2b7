//! Property-based tests for the disjoint-set forest.
//!
//! Checks the forest against breadth-first connectivity oracles, both for
//! explicit edge lists and for threshold-linked point clouds, and validates
//! the structural invariants (root fixed points, size conservation, rank
//! bounds, monotonic component counts) after every generated workload.

mod oracle;
mod spatial;
mod strategies;
mod types;
