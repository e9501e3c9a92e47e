#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod classifier;
pub mod codes;
pub mod config;
pub(crate) mod data;
pub mod dialect;
pub mod entities;
pub mod errors;
pub mod probes;
pub mod registry;
pub mod resolver;

// Re-export main types
pub use classifier::{StatementCategory, StatementClassifier};
pub use codes::{Code, CodeDecoder, CodeTable, Decoded};
pub use config::{
    AliasEntry, CodeEntry, CodeTableEntry, Connector, ConnectorEntry, EntityEntry, MarkerEntry,
    ProbeEntry, RegistryData,
};
pub use dialect::Dialect;
pub use entities::EntityDecoder;
pub use errors::{Error, TableKind, UnknownDialect};
pub use probes::ProbeRegistry;
pub use registry::Registry;
pub use resolver::DialectResolver;
