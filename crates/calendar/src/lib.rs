//! # hydrocast-calendar
//!
//! Calendar months for monthly hydro-power forecasting.
//!
//! ## Quick Start
//!
//! ```
//! use hydrocast_calendar::Month;
//!
//! let m: Month = "Maret".parse().unwrap();
//! assert_eq!(m, Month::March);
//! assert_eq!(m.number(), 3);
//! assert!(Month::January < Month::December);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | `Month` enum, canonical order and label parsing |
//! | `error` | Error types |

mod error;
mod month;

pub use error::CalendarError;
pub use month::Month;
