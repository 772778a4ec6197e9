//! Resource and override source implementations.

mod bundle;
mod config_source;
mod env;
mod file;
mod map;
mod path;
pub mod properties;

pub use bundle::Bundle;
pub use config_source::OverrideSource;
pub use env::EnvSource;
pub use file::{ConfigSource, Resource, ResourceLocator, base_dir_for_executable};
pub use map::MapSource;
pub use path::ResourcePath;
pub use properties::PropertySource;
