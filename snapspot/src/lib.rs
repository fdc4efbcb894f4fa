//! Entry point for binding generation.
//!
//! Re-exports the full `snapspot-core` API together with its `UniFFI`
//! scaffolding so a single library can be handed to `uniffi-bindgen`.

pub use snapspot_core::*;

snapspot_core::uniffi_reexport_scaffolding!();
