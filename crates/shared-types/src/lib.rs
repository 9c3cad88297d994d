pub mod error;

// Consultation domain
pub mod booking;
pub mod payment;
pub mod stats;
pub mod display;

// Supporting pages
pub mod case_file;
pub mod chat;
pub mod profile;
pub mod plan;
pub mod catalog;

pub mod config;
pub mod format;

pub use error::*;

pub use booking::*;
pub use case_file::*;
pub use chat::*;
pub use config::*;
pub use display::*;
pub use payment::*;
pub use plan::*;
pub use profile::*;
pub use stats::*;
// catalog and format are NOT glob re-exported; their short names
// (`Choice`, `initials`) read better qualified at call sites.
