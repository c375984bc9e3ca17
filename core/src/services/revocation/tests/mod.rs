//! Tests for the token blacklist
