//! Host crate for the integration tests under the workspace `tests/` directory.
