//! Runtime wiring for the demo binary.
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`run_demo`] - The aliasing walkthrough, returned as a [`DemoReport`]

pub mod demo;
pub mod tracing;

pub use self::demo::*;
pub use self::tracing::*;
