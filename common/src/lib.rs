//! Shared plumbing for the Quake Report workspace.
//!
//! Everything here is used by more than one crate: the location-tracking
//! type embedded in every error enum, and the HTTP status wrapper used when a
//! USGS request comes back with anything other than `200 OK`.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing shared by every layer
//! - **models**: Pure data structures (earthquake records)
//! - **quake-core**: Fetch, parse and configuration logic
//! - **quakereport**: Command-line application wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
