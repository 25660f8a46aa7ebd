mod loader;
mod store;

pub use loader::{CategorySource, LoadError, load_category};
pub use store::{CategoryData, DataStore, IdUniverse};

#[cfg(test)]
pub(crate) use store::tests;
