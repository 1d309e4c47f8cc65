//! Scheduled background jobs.

pub mod board_refresh;
