use serde::{Deserialize, Serialize};

use crate::error::{MotionError, MotionResult};
use crate::render::DomMutation;

pub const MUTATION_LOG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for recorded mutation streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationLogJsonContractV1 {
    pub schema_version: u32,
    pub mutations: Vec<DomMutation>,
}

pub fn mutations_to_json_contract_v1_pretty(mutations: &[DomMutation]) -> MotionResult<String> {
    let payload = MutationLogJsonContractV1 {
        schema_version: MUTATION_LOG_JSON_SCHEMA_V1,
        mutations: mutations.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        MotionError::InvalidData(format!("failed to serialize mutation log contract v1: {e}"))
    })
}

/// Accepts either a bare mutation array or the v1 envelope.
pub fn mutations_from_json_compat_str(input: &str) -> MotionResult<Vec<DomMutation>> {
    if let Ok(mutations) = serde_json::from_str::<Vec<DomMutation>>(input) {
        return Ok(mutations);
    }
    let payload: MutationLogJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        MotionError::InvalidData(format!("failed to parse mutation log json payload: {e}"))
    })?;
    if payload.schema_version != MUTATION_LOG_JSON_SCHEMA_V1 {
        return Err(MotionError::InvalidData(format!(
            "unsupported mutation log schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.mutations)
}
