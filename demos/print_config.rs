//! Example resolving one configuration resource and printing it.
//!
//! This example shows how to:
//! - Bundle default configuration files into the binary
//! - Let a file next to the program replace the bundled copy
//! - Override individual values from the environment
//!
//! Run with: RUST_LOG=debug DB_HOST=prod.example.com cargo run --example print_config
//!
//! Pass `properties` as the first argument to load the properties variant instead.
//! Creating `test-config.yml` in the project directory replaces the bundled copy;
//! environment overrides then no longer apply.

use bundled_config::prelude::*;
use bundled_config::sources::properties;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    // Lower precedence than the environment: DB_USER=... still wins.
    properties::set_property("DB_USER", "demo-from-properties");

    let path = match std::env::args().nth(1).as_deref() {
        Some("properties") => "test-config.properties",
        _ => "test-config.yml",
    };

    let loader = ResourceLoader::builder()
        .with_resource(
            "test-config.yml",
            include_bytes!("resources/test-config.yml"),
        )?
        .with_resource(
            "test-config.properties",
            include_bytes!("resources/test-config.properties"),
        )?
        .build()?;

    let loaded = loader.load(path)?;
    tracing::info!(source = %loaded.source.name(), overrides = loaded.applied.len(), "resolved {}", path);
    for applied in &loaded.applied {
        tracing::info!(path = %applied.path, key = %applied.key, source = %applied.source, "override");
    }

    if loaded.is_empty() {
        println!("(no configuration available)");
    } else {
        println!("{}", String::from_utf8_lossy(&loaded.bytes));
    }
    Ok(())
}
