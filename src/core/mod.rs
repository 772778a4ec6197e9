//! Core loading types: the dispatcher, its builder and the override chain.

mod builder;
mod loader;
mod override_key;
mod overrides;

pub use builder::ResourceLoaderBuilder;
pub use loader::{LoadedResource, ResourceLoader};
pub use override_key::OverrideKey;
pub use overrides::{AppliedOverride, Overrides, ResolvedOverride};
