//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; the CLI decides where it goes.

pub mod calendar;
pub mod projection;
pub mod report;
pub mod summary;
pub mod transaction;
pub mod trend;

pub use calendar::format_calendar;
pub use projection::{format_goal, format_projection};
pub use summary::format_summary;
pub use transaction::{
    format_transaction_added, format_transaction_details, format_transaction_register,
};
pub use trend::format_trend;
