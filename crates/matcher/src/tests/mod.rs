//! Cross-module matching scenario tests.
