//! # Ordered Roster
//!
//! > **What a "read" accessor leaks when it hands out the real storage.**
//!
//! This crate holds an ordered list of named participants and shows, in a way
//! the compiler enforces, when reordering that list is visible to everyone else
//! holding it.
//!
//! ## 🏗️ Design Philosophy
//!
//! A getter that returns the backing collection instead of a copy lets any caller
//! reorder it. Sorting "a list I was given" then silently sorts the owner's list
//! too. Rust makes the two intents separate types:
//!
//! - `&[Participant]` from [`OrderedRoster::view`](roster::OrderedRoster::view): shared, cannot be reordered.
//! - `&mut [Participant]` from [`OrderedRoster::view_mut`](roster::OrderedRoster::view_mut): the live alias.
//!   Sorting through it reorders the roster.
//! - `Vec<Participant>` from [`OrderedRoster::snapshot`](roster::OrderedRoster::snapshot): detached copy.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Values ([`model`])
//! - **Key items**: [`Participant`](model::Participant).
//!
//! ### 2. The Container ([`roster`])
//! - **Role**: Owns the sequence and defines name ordering.
//! - **Key items**: [`OrderedRoster`](roster::OrderedRoster),
//!   [`first_by_sorted_name_descending`](roster::first_by_sorted_name_descending),
//!   [`first_by_name_descending`](roster::first_by_name_descending),
//!   [`RosterError`](roster::RosterError).
//!
//! ### 3. The Runtime ([`lifecycle`])
//! - **Role**: Tracing setup and the demo walkthrough used by the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod roster;
