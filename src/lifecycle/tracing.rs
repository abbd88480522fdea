//! # Observability & Tracing
//!
//! The crate logs through `tracing`. Nothing is printed by the library itself
//! until a subscriber is installed, which the binary does via [`setup_tracing`].
//!
//! ## Usage Examples
//!
//! ```bash
//! # Demo milestones only
//! RUST_LOG=info cargo run
//!
//! # Include per-operation sizes
//! RUST_LOG=debug cargo run
//!
//! # Only the ordering functions
//! RUST_LOG=ordered_roster::roster::ordering=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Construction**: `Creating roster size=3`
//! - **Ordering**: `Sorting by name (descending, in place) size=3`
//! - **Failures**: a `WARN` when a sort is asked for on an empty sequence
//! - **Demo**: one `INFO` per step of [`run_demo`](crate::lifecycle::run_demo)

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
