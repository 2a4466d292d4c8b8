//! tempotag - tagged-object JSON round-tripping for timestamps and durations
//!
//! Plain JSON has no timestamp or duration type. This crate carries both as
//! ordinary JSON objects with a `_type` discriminator field, and restores the
//! typed values on decode. Objects with an unrecognized discriminator degrade
//! to plain maps instead of failing, so foreign tags pass through as untyped
//! records.
//!
//! # Example
//!
//! ```rust
//! use tempotag::{decode, encode, Value};
//! use chrono::NaiveDate;
//!
//! let stamp = NaiveDate::from_ymd_opt(2024, 3, 15)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 45)
//!     .unwrap();
//! let text = encode(&Value::timestamp(stamp)).unwrap();
//! assert!(text.contains("\"_type\":\"datetime\""));
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, Value::timestamp(stamp));
//! ```

mod types;
mod tags;
mod bridge;
mod error;

pub use types::*;
pub use tags::*;
pub use bridge::*;
pub use error::*;
