use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::LayoutFrame;

pub const LAYOUT_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: LayoutFrame,
}

impl LayoutFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutFrameJsonContractV1 {
            schema_version: LAYOUT_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<LayoutFrame>(input) {
            return Ok(frame);
        }
        let payload: LayoutFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout frame json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
