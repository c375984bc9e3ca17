//! Tests for password change and reset
