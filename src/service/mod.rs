//! Business logic services.

pub mod votemap_board;
