//! Handoff payload for fleet assignment
//!
//! The downstream assignment step only needs the fleets and the headline
//! figures, stamped with a plan id and time.

use std::path::Path;

use chrono::{DateTime, Utc};
use haulplan_domain::Fleet;
use haulplan_types::Result;
use serde::{Deserialize, Serialize};

use crate::app::PlanningReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningHandoff {
    pub plan_id: String,
    pub planned_at: DateTime<Utc>,
    pub order_id: Option<String>,
    pub fleets: Vec<Fleet>,
    pub total_vehicles: usize,
    pub average_utilization: u32,
}

impl PlanningHandoff {
    pub fn from_report(report: &PlanningReport) -> Self {
        Self {
            plan_id: uuid::Uuid::new_v4().to_string(),
            planned_at: Utc::now(),
            order_id: report.order_id.clone(),
            fleets: report.fleets.clone(),
            total_vehicles: report.total_vehicles(),
            average_utilization: report.average_utilization(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the payload as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{plan, PlanningOptions};
    use tempfile::tempdir;

    #[test]
    fn test_handoff_from_sample_plan() {
        let report = plan(None, &PlanningOptions::new()).unwrap();
        let handoff = PlanningHandoff::from_report(&report);

        assert_eq!(handoff.fleets.len(), 3);
        assert_eq!(handoff.total_vehicles, 13);
        assert_eq!(handoff.average_utilization, 135);
        assert!(uuid::Uuid::parse_str(&handoff.plan_id).is_ok());
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let report = plan(None, &PlanningOptions::new()).unwrap();
        let a = PlanningHandoff::from_report(&report);
        let b = PlanningHandoff::from_report(&report);
        assert_ne!(a.plan_id, b.plan_id);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("handoff.json");

        let report = plan(None, &PlanningOptions::new()).unwrap();
        let handoff = PlanningHandoff::from_report(&report);
        handoff.save(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["fleets"][0]["id"], "FLT-001");
        assert_eq!(json["total_vehicles"], 13);

        let loaded = PlanningHandoff::load(&path).unwrap();
        assert_eq!(loaded, handoff);
    }
}
