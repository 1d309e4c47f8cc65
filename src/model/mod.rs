//! Domain models for votemap status data.
//!
//! This module contains the domain models shared across the API client and the
//! board service, plus the wire-format types for the votemap status endpoint.
//! Wire types are converted to domain snapshots at the API client boundary.

pub mod votemap;

#[cfg(test)]
mod test;
