//! Integration tests for mouse-mover.

mod cli_test;
mod helpers;
mod pattern_test;
