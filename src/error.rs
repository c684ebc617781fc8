//! Typed errors for check registration and hook configuration
//!
//! These are the failures that stop a hook invocation before any check runs.
//! Check failures and check errors are never represented here; they are
//! values inside a [`RunReport`](crate::hooks::RunReport).

use thiserror::Error;

/// Errors raised by the [`CheckRegistry`](crate::registry::CheckRegistry)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a check named `{0}` is already registered")]
    DuplicateIdentifier(String),

    #[error("no check named `{0}` is registered")]
    UnknownCheck(String),
}

/// Misconfiguration detected while preparing a hook invocation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hook `{hook}` references unknown check `{identifier}`")]
    UnknownCheck { hook: String, identifier: String },

    #[error("unknown hook `{0}`")]
    UnknownHook(String),

    #[error("hook `{hook}` lists check `{identifier}` more than once")]
    DuplicateEntry { hook: String, identifier: String },

    #[error("invalid glob pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
