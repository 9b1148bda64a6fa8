//! One function per control-plane operation.
//!
//! Every wrapper takes its required arguments plus an optional extra-fields
//! argument (`None` means empty), runs the normalize/case pipeline with the
//! default rules, and returns the assembled [`RequestDescriptor`]. The only
//! error source is validation of enumerated arguments, checked before any
//! normalization runs.

use crate::error::{Error, Result};
use crate::request::{RequestDescriptor, build_request};
use crate::rules::default_rules;
use crate::value::{Input, Key};

pub const ACTION_CATEGORIES: &[&str] =
    &["Source", "Build", "Deploy", "Test", "Invoke", "Approval"];
pub const TRANSITION_TYPES: &[&str] = &["Inbound", "Outbound"];
pub const CONDITION_TYPES: &[&str] = &["BEFORE_ENTRY", "ON_SUCCESS"];
pub const RETRY_MODES: &[&str] = &["FAILED_ACTIONS", "ALL_ACTIONS"];

fn field(name: &str, value: impl Into<Input>) -> (Key, Input) {
    (Key::ident(name), value.into())
}

fn check_enum(argument: &'static str, value: &str, allowed: &'static [&'static str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            argument,
            value: value.to_string(),
            allowed,
        })
    }
}

fn request(
    operation: &str,
    required: Vec<(Key, Input)>,
    extra: Option<Input>,
) -> RequestDescriptor {
    build_request(operation, required, extra, &default_rules())
}

/// Confirm receipt of a job and claim it with the nonce returned by
/// `poll_for_jobs`.
pub fn acknowledge_job(job_id: &str, nonce: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "acknowledge_job",
        vec![field("job_id", job_id), field("nonce", nonce)],
        extra,
    ))
}

pub fn acknowledge_third_party_job(
    client_token: &str,
    job_id: &str,
    nonce: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "acknowledge_third_party_job",
        vec![
            field("client_token", client_token),
            field("job_id", job_id),
            field("nonce", nonce),
        ],
        extra,
    ))
}

/// Register a new custom action. `category` must be one of
/// [`ACTION_CATEGORIES`].
pub fn create_custom_action_type(
    category: &str,
    provider: &str,
    version: &str,
    input_artifact_details: Input,
    output_artifact_details: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("category", category, ACTION_CATEGORIES)?;
    Ok(request(
        "create_custom_action_type",
        vec![
            field("category", category),
            field("provider", provider),
            field("version", version),
            field("input_artifact_details", input_artifact_details),
            field("output_artifact_details", output_artifact_details),
        ],
        extra,
    ))
}

/// Create a pipeline from a full pipeline declaration.
pub fn create_pipeline(pipeline: Input, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "create_pipeline",
        vec![field("pipeline", pipeline)],
        extra,
    ))
}

pub fn delete_custom_action_type(
    category: &str,
    provider: &str,
    version: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("category", category, ACTION_CATEGORIES)?;
    Ok(request(
        "delete_custom_action_type",
        vec![
            field("category", category),
            field("provider", provider),
            field("version", version),
        ],
        extra,
    ))
}

pub fn delete_pipeline(name: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("delete_pipeline", vec![field("name", name)], extra))
}

pub fn delete_webhook(name: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("delete_webhook", vec![field("name", name)], extra))
}

pub fn deregister_webhook_with_third_party(
    webhook_name: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "deregister_webhook_with_third_party",
        vec![field("webhook_name", webhook_name)],
        extra,
    ))
}

/// `transition_type` must be one of [`TRANSITION_TYPES`].
pub fn disable_stage_transition(
    pipeline_name: &str,
    stage_name: &str,
    transition_type: &str,
    reason: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("transition_type", transition_type, TRANSITION_TYPES)?;
    Ok(request(
        "disable_stage_transition",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("transition_type", transition_type),
            field("reason", reason),
        ],
        extra,
    ))
}

pub fn enable_stage_transition(
    pipeline_name: &str,
    stage_name: &str,
    transition_type: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("transition_type", transition_type, TRANSITION_TYPES)?;
    Ok(request(
        "enable_stage_transition",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("transition_type", transition_type),
        ],
        extra,
    ))
}

pub fn get_action_type(
    category: &str,
    owner: &str,
    provider: &str,
    version: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("category", category, ACTION_CATEGORIES)?;
    Ok(request(
        "get_action_type",
        vec![
            field("category", category),
            field("owner", owner),
            field("provider", provider),
            field("version", version),
        ],
        extra,
    ))
}

pub fn get_job_details(job_id: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("get_job_details", vec![field("job_id", job_id)], extra))
}

pub fn get_pipeline(name: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("get_pipeline", vec![field("name", name)], extra))
}

pub fn get_pipeline_execution(
    pipeline_name: &str,
    pipeline_execution_id: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "get_pipeline_execution",
        vec![
            field("pipeline_name", pipeline_name),
            field("pipeline_execution_id", pipeline_execution_id),
        ],
        extra,
    ))
}

pub fn get_pipeline_state(name: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("get_pipeline_state", vec![field("name", name)], extra))
}

pub fn get_third_party_job_details(
    client_token: &str,
    job_id: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "get_third_party_job_details",
        vec![field("client_token", client_token), field("job_id", job_id)],
        extra,
    ))
}

pub fn list_action_executions(
    pipeline_name: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "list_action_executions",
        vec![field("pipeline_name", pipeline_name)],
        extra,
    ))
}

pub fn list_action_types(extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("list_action_types", Vec::new(), extra))
}

pub fn list_pipeline_executions(
    pipeline_name: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "list_pipeline_executions",
        vec![field("pipeline_name", pipeline_name)],
        extra,
    ))
}

pub fn list_pipelines(extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("list_pipelines", Vec::new(), extra))
}

pub fn list_tags_for_resource(
    resource_arn: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "list_tags_for_resource",
        vec![field("resource_arn", resource_arn)],
        extra,
    ))
}

pub fn list_webhooks(extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("list_webhooks", Vec::new(), extra))
}

/// `condition_type` must be one of [`CONDITION_TYPES`].
pub fn override_stage_condition(
    pipeline_name: &str,
    stage_name: &str,
    pipeline_execution_id: &str,
    condition_type: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("condition_type", condition_type, CONDITION_TYPES)?;
    Ok(request(
        "override_stage_condition",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("pipeline_execution_id", pipeline_execution_id),
            field("condition_type", condition_type),
        ],
        extra,
    ))
}

/// Poll for jobs acted on by the given action type. Workers call this in a
/// loop they own; the binding itself never loops or blocks.
pub fn poll_for_jobs(action_type_id: Input, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "poll_for_jobs",
        vec![field("action_type_id", action_type_id)],
        extra,
    ))
}

pub fn poll_for_third_party_jobs(
    action_type_id: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "poll_for_third_party_jobs",
        vec![field("action_type_id", action_type_id)],
        extra,
    ))
}

pub fn put_action_revision(
    pipeline_name: &str,
    stage_name: &str,
    action_name: &str,
    action_revision: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "put_action_revision",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("action_name", action_name),
            field("action_revision", action_revision),
        ],
        extra,
    ))
}

pub fn put_approval_result(
    pipeline_name: &str,
    stage_name: &str,
    action_name: &str,
    token: &str,
    result: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "put_approval_result",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("action_name", action_name),
            field("token", token),
            field("result", result),
        ],
        extra,
    ))
}

pub fn put_job_failure_result(
    job_id: &str,
    failure_details: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "put_job_failure_result",
        vec![
            field("job_id", job_id),
            field("failure_details", failure_details),
        ],
        extra,
    ))
}

/// Report success for a job. Execution details, output artifacts, and the
/// continuation token all travel in `extra`.
pub fn put_job_success_result(job_id: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "put_job_success_result",
        vec![field("job_id", job_id)],
        extra,
    ))
}

pub fn put_third_party_job_failure_result(
    job_id: &str,
    client_token: &str,
    failure_details: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "put_third_party_job_failure_result",
        vec![
            field("job_id", job_id),
            field("client_token", client_token),
            field("failure_details", failure_details),
        ],
        extra,
    ))
}

pub fn put_third_party_job_success_result(
    job_id: &str,
    client_token: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "put_third_party_job_success_result",
        vec![field("job_id", job_id), field("client_token", client_token)],
        extra,
    ))
}

pub fn put_webhook(webhook: Input, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request("put_webhook", vec![field("webhook", webhook)], extra))
}

pub fn register_webhook_with_third_party(
    webhook_name: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "register_webhook_with_third_party",
        vec![field("webhook_name", webhook_name)],
        extra,
    ))
}

/// `retry_mode` must be one of [`RETRY_MODES`].
pub fn retry_stage_execution(
    pipeline_name: &str,
    stage_name: &str,
    pipeline_execution_id: &str,
    retry_mode: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    check_enum("retry_mode", retry_mode, RETRY_MODES)?;
    Ok(request(
        "retry_stage_execution",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("pipeline_execution_id", pipeline_execution_id),
            field("retry_mode", retry_mode),
        ],
        extra,
    ))
}

pub fn rollback_stage(
    pipeline_name: &str,
    stage_name: &str,
    target_pipeline_execution_id: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "rollback_stage",
        vec![
            field("pipeline_name", pipeline_name),
            field("stage_name", stage_name),
            field("target_pipeline_execution_id", target_pipeline_execution_id),
        ],
        extra,
    ))
}

pub fn start_pipeline_execution(name: &str, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "start_pipeline_execution",
        vec![field("name", name)],
        extra,
    ))
}

pub fn stop_pipeline_execution(
    pipeline_name: &str,
    pipeline_execution_id: &str,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "stop_pipeline_execution",
        vec![
            field("pipeline_name", pipeline_name),
            field("pipeline_execution_id", pipeline_execution_id),
        ],
        extra,
    ))
}

pub fn tag_resource(
    resource_arn: &str,
    tags: Input,
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "tag_resource",
        vec![field("resource_arn", resource_arn), field("tags", tags)],
        extra,
    ))
}

pub fn untag_resource(
    resource_arn: &str,
    tag_keys: &[&str],
    extra: Option<Input>,
) -> Result<RequestDescriptor> {
    Ok(request(
        "untag_resource",
        vec![
            field("resource_arn", resource_arn),
            field("tag_keys", Input::list(tag_keys.iter().copied())),
        ],
        extra,
    ))
}

pub fn update_action_type(action_type: Input, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "update_action_type",
        vec![field("action_type", action_type)],
        extra,
    ))
}

pub fn update_pipeline(pipeline: Input, extra: Option<Input>) -> Result<RequestDescriptor> {
    Ok(request(
        "update_pipeline",
        vec![field("pipeline", pipeline)],
        extra,
    ))
}
