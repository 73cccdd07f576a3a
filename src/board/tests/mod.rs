//! Unit tests for the board domain and service.

mod support;
