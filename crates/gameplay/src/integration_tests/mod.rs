//! Integration tests that drive the gameplay plugin through events using the
//! `TestGame` harness.
