//! Shared test utilities used across djset crates.
//!
//! [`recording`] captures spans and events so suites can assert the
//! instrumentation contract of the linking pipeline, and
//! [`proptest_profile`] gives every property suite the same environment
//! overrides for case counts and forking.

pub mod proptest_profile;
pub mod recording;
