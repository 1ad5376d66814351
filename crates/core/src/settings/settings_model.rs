use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::MAX_DECIMAL_SCALE;
use crate::errors::{Error, Result};
use crate::formatting::AmountFormat;
use crate::pipeline::{BalancePipeline, TieBreak};
use crate::ranking::PriorityTable;

/// User-facing configuration of the display pipeline.
///
/// Every field has a default, so an empty JSON object yields the standard
/// ranking and formatting policy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineSettings {
    pub priorities: BTreeMap<String, i32>,
    pub unranked_priority: i32,
    pub amount_format: AmountFormat,
    pub tie_break: TieBreak,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        let table = PriorityTable::default();
        Self {
            priorities: table.priorities().clone(),
            unranked_priority: table.unranked_priority(),
            amount_format: AmountFormat::default(),
            tie_break: TieBreak::default(),
        }
    }
}

impl PipelineSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: PipelineSettings = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("Invalid pipeline settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigIO(format!(
                "Failed to read settings from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let format = &self.amount_format;
        if format.max_fraction_digits > MAX_DECIMAL_SCALE {
            return Err(Error::InvalidConfigValue(format!(
                "maxFractionDigits must be at most {}, got {}",
                MAX_DECIMAL_SCALE, format.max_fraction_digits
            )));
        }
        if format.min_fraction_digits > format.max_fraction_digits {
            return Err(Error::InvalidConfigValue(format!(
                "minFractionDigits ({}) exceeds maxFractionDigits ({})",
                format.min_fraction_digits, format.max_fraction_digits
            )));
        }
        if let Some((chain, priority)) = self
            .priorities
            .iter()
            .find(|(_, priority)| **priority <= self.unranked_priority)
        {
            return Err(Error::InvalidConfigValue(format!(
                "Priority {} for '{}' is not above the unranked priority {}",
                priority, chain, self.unranked_priority
            )));
        }
        Ok(())
    }

    pub fn priority_table(&self) -> PriorityTable {
        PriorityTable::from_priorities(self.priorities.clone(), self.unranked_priority)
    }

    pub fn build_pipeline(&self) -> BalancePipeline {
        BalancePipeline::new(self.priority_table(), self.amount_format, self.tie_break)
    }
}
