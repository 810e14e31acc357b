//! Keyed JSON settings repository with Postgres and in-memory backends.

mod postgres;
mod store;

pub use postgres::PgSettingsStore;
pub use store::{InMemorySettingsStore, SettingsStore};
