//! Core types for bidirectional grid search.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`],
//! [`Dir`]) and the read-only passability grid ([`Occupancy`]) consumed by
//! `meetpath-paths`.

pub mod geom;
pub mod occupancy;

pub use geom::{Dir, Point, Range};
pub use occupancy::{AsciiMap, Occupancy, OccupancyError};
