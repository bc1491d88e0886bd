//! Integration tests with mock HTTP server

pub mod mock_server;
pub mod classify;
pub mod health;
pub mod session;
