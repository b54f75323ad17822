//! Domain models for Quake Report.
//!
//! Pure data structures with no I/O. The fetch pipeline in `quake-core`
//! produces these; the application layer only reads them.

pub mod earthquake;
pub mod error;

pub use earthquake::EarthquakeRecord;
pub use earthquake::builder::EarthquakeRecordBuilder;
pub use error::model_error::ModelError;
