use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

use super::AnalysisDashboard;

pub const DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub dashboard: AnalysisDashboard,
}

impl AnalysisDashboard {
    pub fn to_json_pretty(&self) -> AnalysisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AnalysisError::InvalidConfig(format!("failed to serialize dashboard json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> AnalysisResult<String> {
        let payload = DashboardSnapshotJsonContractV1 {
            schema_version: DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
            dashboard: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AnalysisError::InvalidConfig(format!(
                "failed to serialize dashboard snapshot contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare dashboard or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> AnalysisResult<Self> {
        if let Ok(dashboard) = serde_json::from_str::<AnalysisDashboard>(input) {
            return Ok(dashboard);
        }
        let payload: DashboardSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AnalysisError::InvalidConfig(format!("failed to parse dashboard json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(AnalysisError::InvalidConfig(format!(
                "unsupported dashboard snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.dashboard)
    }
}
