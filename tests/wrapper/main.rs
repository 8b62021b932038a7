//! Object Wrapper Test Suite
//!
//! End-to-end coverage of wrapping native values into models and back.
//!
//! ## Areas Covered
//!
//! - `builder`: version breakpoints, builder caching, default flags
//! - `map_adapter`, `list_adapter`, `array_adapter`: zero-copy adapters
//! - `collection_adapter`: sets, iterators, membership
//! - `legacy`: deep-copy wrapping before container adapters
//! - `roundtrip`: unwrapping back to native values and type hints
//! - `settings`: `lumen.toml` loading
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test wrapper
//! cargo test --test wrapper collection_adapter::
//! RUST_LOG=lumen=trace cargo test --test wrapper -- --nocapture
//! ```

#[path = "../common/mod.rs"]
mod common;

mod array_adapter;
mod collection_adapter;
mod legacy;
mod map_adapter;
mod roundtrip;
