use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, TextMeasurer};

use super::{YAxisEngine, YAxisFrame, YAxisFrameInput};

pub const Y_AXIS_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for frame snapshots used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: YAxisFrame,
}

impl YAxisFrame {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize y-axis frame json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = YAxisFrameJsonContractV1 {
            schema_version: Y_AXIS_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize y-axis frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<YAxisFrame>(input) {
            return Ok(frame);
        }
        let payload: YAxisFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse y-axis frame json payload: {e}"))
        })?;
        if payload.schema_version != Y_AXIS_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported y-axis frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl<R: Renderer, M: TextMeasurer> YAxisEngine<R, M> {
    /// Builds a frame (persisting its width) and returns it as a v1 contract.
    pub fn snapshot_json_contract_v1_pretty(
        &mut self,
        input: &YAxisFrameInput<'_>,
    ) -> ChartResult<String> {
        self.build_frame(input)?.to_json_contract_v1_pretty()
    }
}
