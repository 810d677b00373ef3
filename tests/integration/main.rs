//! Integration tests for the RBAC client.
//!
//! Each test starts a local `wiremock` server standing in for the RBAC
//! service, so no external environment is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # Run a specific test
//! cargo test --test integration test_get_access_scenario -- --nocapture
//! ```

mod access_tests;
mod concurrency_tests;
mod groups_tests;
mod roles_tests;
