//! Clients for the game server's remote APIs.

pub mod votemap;
