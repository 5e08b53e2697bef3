//! Application layer: the admin console service, its read-only view
//! projections, and snapshot exports.

pub mod console;
pub mod export;
pub mod views;

pub use console::{AdminConsole, DashboardData};
