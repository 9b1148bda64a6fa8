//! Request envelope assembly.

use http::Method;
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::casing::{apply_casing, case_key};
use crate::normalize::normalize;
use crate::rules::{CaseMode, CaseRules};
use crate::value::{Input, Key, Value, insert};

pub const TARGET_HEADER: &str = "x-amz-target";
pub const CONTENT_TYPE_HEADER: &str = "content-type";
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const TARGET_PREFIX: &str = "CodePipeline";
const API_VERSION: &str = "20150709";

/// Method, path, headers, and in-memory JSON body for one remote call.
/// Handed to an external HTTP transport, which owns serialization and I/O.
/// Always `POST /` with exactly two headers: the operation target and the
/// protocol content type.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: JsonValue,
}

/// `x-amz-target` value for an operation named as a lowercase identifier,
/// e.g. `poll_for_jobs` -> `CodePipeline_20150709.PollForJobs`.
pub fn operation_target(operation: &str) -> String {
    format!(
        "{TARGET_PREFIX}_{API_VERSION}.{}",
        case_key(operation, CaseMode::Upper)
    )
}

/// Assemble one request: normalize the optional extra-fields argument
/// (absent means empty; a result that is not map-shaped is discarded),
/// merge in the required fields (required wins on a key collision), apply
/// `rules` to produce the wire body, and wrap the envelope.
///
/// The operation wrappers in [`crate::ops`] call this with
/// [`crate::rules::default_rules`]; it is public so callers with different
/// casing conventions can substitute their own rules per call.
pub fn build_request(
    operation: &str,
    required: Vec<(Key, Input)>,
    extra: Option<Input>,
    rules: &CaseRules,
) -> RequestDescriptor {
    let mut entries = match normalize(extra.unwrap_or_default()) {
        Value::Map(entries) => entries,
        _ => Vec::new(),
    };
    for (key, input) in required {
        insert(&mut entries, key, normalize(input));
    }
    let body = apply_casing(&Value::Map(entries), rules);
    let target = operation_target(operation);
    trace!(operation, target = %target, "built request descriptor");
    RequestDescriptor {
        method: Method::POST,
        path: "/".to_string(),
        headers: vec![
            (TARGET_HEADER, target),
            (CONTENT_TYPE_HEADER, CONTENT_TYPE.to_string()),
        ],
        body,
    }
}
