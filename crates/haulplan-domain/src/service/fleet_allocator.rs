//! Fleet allocation - 6-position carrier layout
//!
//! Vehicles are taken from the front of the sequence six at a time. Within a
//! batch, position 0 goes to the top deck, 1-2 to the middle deck and 3-5 to
//! the bottom deck. Volume is a soft budget: only the vehicle count is a hard
//! limit, so utilization can exceed 100%.

use std::collections::VecDeque;

use log::{debug, warn};

use super::capacity::FleetCapacity;
use crate::model::{Deck, Fleet, FleetAllocation, FleetId, Vehicle};

/// Carrier slots: top 1 + middle 2 + bottom 3
pub const MAX_VEHICLES_PER_FLEET: usize = 6;

/// Upper bound on fleets produced by one run
pub const MAX_FLEETS_PER_RUN: usize = 11;

/// Slotting allocator
#[derive(Debug, Clone)]
pub struct FleetAllocator {
    capacity: FleetCapacity,
    max_fleets: usize,
}

impl FleetAllocator {
    pub fn new(capacity: FleetCapacity) -> Self {
        Self {
            capacity,
            max_fleets: MAX_FLEETS_PER_RUN,
        }
    }

    /// Override the fleet bound (at least one fleet)
    pub fn with_max_fleets(mut self, max_fleets: usize) -> Self {
        self.max_fleets = max_fleets.max(1);
        self
    }

    pub fn capacity(&self) -> FleetCapacity {
        self.capacity
    }

    pub fn max_fleets(&self) -> usize {
        self.max_fleets
    }

    /// Partition `vehicles` into fleets in sequence order
    ///
    /// Vehicles still queued when the fleet bound is reached are returned in
    /// `unallocated`, in their original order.
    pub fn allocate(&self, vehicles: &[Vehicle]) -> FleetAllocation {
        let mut remaining: VecDeque<Vehicle> = vehicles.iter().cloned().collect();
        let mut fleets = Vec::new();
        let mut fleet_index: u32 = 0;

        while !remaining.is_empty() {
            if fleets.len() >= self.max_fleets {
                warn!(
                    "Fleet limit {} reached with {} vehicle(s) still queued",
                    self.max_fleets,
                    remaining.len()
                );
                break;
            }

            fleet_index += 1;
            let batch_size = remaining.len().min(MAX_VEHICLES_PER_FLEET);
            let batch: Vec<Vehicle> = remaining.drain(..batch_size).collect();

            if let Some(fleet) = self.load_fleet(FleetId(fleet_index), batch) {
                debug!(
                    "{}: {} vehicle(s), {:.2} m³, {}%",
                    fleet.id,
                    fleet.vehicle_count(),
                    fleet.total_volume_m3,
                    fleet.utilization_percent
                );
                fleets.push(fleet);
            }
        }

        FleetAllocation {
            fleets,
            unallocated: remaining.into_iter().collect(),
        }
    }

    /// Slot one batch of up to six vehicles into decks
    fn load_fleet(&self, id: FleetId, batch: Vec<Vehicle>) -> Option<Fleet> {
        if batch.is_empty() {
            return None;
        }

        let capacity_m3 = self.capacity.value();
        let mut fleet = Fleet {
            id,
            name: id.name(),
            capacity_m3,
            top_deck: Vec::with_capacity(Deck::Top.slots()),
            middle_deck: Vec::with_capacity(Deck::Middle.slots()),
            bottom_deck: Vec::with_capacity(Deck::Bottom.slots()),
            total_volume_m3: 0.0,
            utilization_percent: 0,
            destinations: Vec::new(),
        };

        for (position, vehicle) in batch.into_iter().enumerate() {
            fleet.total_volume_m3 += vehicle.volume_m3;
            if let Some(ref destination) = vehicle.destination {
                if !fleet.destinations.contains(destination) {
                    fleet.destinations.push(destination.clone());
                }
            }
            match Deck::for_position(position) {
                Deck::Top => fleet.top_deck.push(vehicle),
                Deck::Middle => fleet.middle_deck.push(vehicle),
                Deck::Bottom => fleet.bottom_deck.push(vehicle),
            }
        }

        fleet.utilization_percent = utilization_percent(fleet.total_volume_m3, capacity_m3);
        Some(fleet)
    }
}

/// Allocate with the default fleet bound and return the fleets
///
/// Anything beyond the bound is dropped after a warning; use
/// [`FleetAllocator::allocate`] to get the leftovers back.
pub fn allocate(vehicles: &[Vehicle], capacity: FleetCapacity) -> Vec<Fleet> {
    FleetAllocator::new(capacity).allocate(vehicles).fleets
}

/// round(volume / capacity * 100), uncapped
fn utilization_percent(volume_m3: f64, capacity_m3: f64) -> u32 {
    (volume_m3 / capacity_m3 * 100.0).round() as u32
}
