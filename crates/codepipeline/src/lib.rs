#![doc = include_str!("../README.md")]

pub mod casing;
pub mod error;
pub mod normalize;
pub mod ops;
pub mod request;
pub mod rules;
pub mod value;

pub use crate::casing::{apply_casing, case_key};
pub use crate::error::{Error, Result};
pub use crate::normalize::normalize;
pub use crate::request::{RequestDescriptor, build_request, operation_target};
pub use crate::rules::{CaseMode, CaseRules, default_rules};
pub use crate::value::{Input, Key, Value};

// Re-exported for downstream transports.
pub use http;
pub use serde_json;
