//! Allocation result type

use serde::{Deserialize, Serialize};

use super::fleet::Fleet;
use super::vehicle::Vehicle;

/// Output of one allocation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetAllocation {
    /// Fleets in id order
    pub fleets: Vec<Fleet>,
    /// Vehicles left over once the fleet limit was reached
    #[serde(default)]
    pub unallocated: Vec<Vehicle>,
}

impl FleetAllocation {
    pub fn total_vehicles(&self) -> usize {
        self.fleets.iter().map(Fleet::vehicle_count).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.unallocated.is_empty()
    }
}
