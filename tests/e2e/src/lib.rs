//! Browser-level tests for the web app. Each test spawns its own server.

pub mod browser;
