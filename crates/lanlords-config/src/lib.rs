#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Configuration resolution for the Lanlords CLI.
//!
//! Layout: `registry.rs` (static option table), `document.rs` (INI-style
//! config document), `store.rs` (on-disk persistence), `resolver.rs`
//! (environment-then-file option resolution).

pub mod document;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod store;

pub use document::ConfigDocument;
pub use error::{ConfigError, ConfigResult};
pub use registry::{OptionDescriptor, lookup};
pub use resolver::OptionResolver;
pub use store::ConfigStore;
