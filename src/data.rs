//! Built-in table assets.
//!
//! These are the tables shipped with the crate. They are plain constants;
//! [`RegistryData::builtin`](crate::RegistryData::builtin) turns them into
//! owned data that goes through the same validation as any external set.

pub(crate) mod aliases;
pub(crate) mod connectors;
pub(crate) mod entities;
pub(crate) mod privileges;
pub(crate) mod probes;
pub(crate) mod statements;
pub(crate) mod types;
