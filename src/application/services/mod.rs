//! Application services orchestrating domain operations.

pub mod stats_service;
pub mod tracking_service;

pub use stats_service::{GroupStats, NamedGroupStats, StatsService};
pub use tracking_service::{Registration, TrackingService};
