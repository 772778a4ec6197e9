//! Integration tests against the real process environment and property table.

#![allow(unsafe_code)] // For env var manipulation in tests

use bundled_config::prelude::*;
use bundled_config::sources::properties;
use serde_yaml::Value;
use serial_test::serial;
use std::env;
use tempfile::TempDir;

const SERVICE_YML: &[u8] = b"itest_svc:\n  host: localhost\n  name: bundled\n  port: 8080\n";

fn loader(temp_dir: &TempDir) -> ResourceLoader {
    ResourceLoader::builder()
        .with_resource("service.yml", SERVICE_YML)
        .unwrap()
        .with_resource("service.properties", b"itest_svc.host=localhost\n")
        .unwrap()
        .with_base_dir(temp_dir.path())
        .build()
        .unwrap()
}

fn clear() {
    unsafe {
        env::remove_var("ITEST_SVC_HOST");
        env::remove_var("ITEST_SVC_NAME");
        env::remove_var("ITEST_SVC_PORT");
    }
    properties::remove_property("ITEST_SVC_HOST");
    properties::remove_property("ITEST_SVC_NAME");
}

#[test]
#[serial]
fn test_environment_override() {
    clear();
    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("ITEST_SVC_HOST", "prod.example.com");
    }

    let loaded = loader(&temp_dir).load("service.yml").unwrap();
    let doc: Value = serde_yaml::from_slice(&loaded.bytes).unwrap();
    assert_eq!(doc["itest_svc"]["host"].as_str(), Some("prod.example.com"));
    assert_eq!(doc["itest_svc"]["name"].as_str(), Some("bundled"));
    assert_eq!(doc["itest_svc"]["port"].as_u64(), Some(8080));
    assert_eq!(loaded.applied[0].source, "env");

    clear();
}

#[test]
#[serial]
fn test_environment_beats_property() {
    clear();
    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("ITEST_SVC_HOST", "from-env");
    }
    properties::set_property("ITEST_SVC_HOST", "from-properties");
    properties::set_property("ITEST_SVC_NAME", "named-by-properties");

    let loaded = loader(&temp_dir).load("service.yml").unwrap();
    let doc: Value = serde_yaml::from_slice(&loaded.bytes).unwrap();
    assert_eq!(doc["itest_svc"]["host"].as_str(), Some("from-env"));
    assert_eq!(doc["itest_svc"]["name"].as_str(), Some("named-by-properties"));

    clear();
}

#[test]
#[serial]
fn test_blank_environment_falls_back_to_property() {
    clear();
    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("ITEST_SVC_HOST", "   ");
    }
    properties::set_property("ITEST_SVC_HOST", "from-properties");

    let bytes = loader(&temp_dir).get_resource("service.properties").unwrap();
    assert_eq!(bytes, b"itest_svc.host=from-properties\n");

    clear();
}

#[test]
#[serial]
fn test_numeric_value_is_not_overridden() {
    clear();
    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("ITEST_SVC_PORT", "9090");
    }

    let bytes = loader(&temp_dir).get_resource("service.yml").unwrap();
    assert_eq!(bytes, SERVICE_YML);

    clear();
}

#[test]
#[serial]
fn test_external_file_ignores_environment() {
    clear();
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("service.yml"), "itest_svc:\n  host: disk\n").unwrap();
    unsafe {
        env::set_var("ITEST_SVC_HOST", "prod.example.com");
    }

    let text = loader(&temp_dir).get_resource_string("service.yml").unwrap();
    assert_eq!(text, "itest_svc:\n  host: disk\n");

    clear();
}
