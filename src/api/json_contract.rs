use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{HistogramPlot, UniformValue};
use crate::error::{ChartError, ChartResult};

pub const HISTOGRAM_PLOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramPlotJsonContractV1<V> {
    pub schema_version: u32,
    pub plot: HistogramPlot<V>,
}

impl<V: UniformValue + DeserializeOwned> HistogramPlot<V> {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize plot json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = HistogramPlotJsonContractV1 {
            schema_version: HISTOGRAM_PLOT_JSON_SCHEMA_V1,
            plot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize plot contract v1: {e}"))
        })
    }

    /// Accepts either a bare plot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plot) = serde_json::from_str::<HistogramPlot<V>>(input) {
            return Ok(plot);
        }
        let payload: HistogramPlotJsonContractV1<V> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse plot json payload: {e}")))?;
        if payload.schema_version != HISTOGRAM_PLOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported plot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plot)
    }
}
