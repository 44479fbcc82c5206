//! Background workers
//!
//! The exporter runs a single background task: the [`Refresher`], which
//! re-evaluates the backup status on a timer and publishes it to the gauges.

pub mod refresher;

pub use refresher::Refresher;
