//! Shared test infrastructure

pub mod test_server;
