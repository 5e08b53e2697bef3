//! Storage layer for atomic JSON file operations.

mod json_storage;
mod secret_store;

pub use json_storage::{JsonStorage, JsonStorageError};
pub use secret_store::{DeepseekConfig, SecretConfig, SecretStore, SecretStoreError};
