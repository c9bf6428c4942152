//! Cross-crate integration test suite for the FMB toolchain. See `tests/`.
