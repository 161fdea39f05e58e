//! Fleet (carrier manifest) type definitions

use serde::{Deserialize, Serialize};

use super::vehicle::Vehicle;

/// Sequential fleet identifier, displayed as `FLT-001`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FleetId(pub u32);

impl FleetId {
    /// Display name (e.g. "Fleet 1")
    pub fn name(&self) -> String {
        format!("Fleet {}", self.0)
    }
}

impl std::fmt::Display for FleetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FLT-{:03}", self.0)
    }
}

impl TryFrom<String> for FleetId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix("FLT-")
            .and_then(|n| n.parse::<u32>().ok())
            .map(FleetId)
            .ok_or_else(|| format!("invalid fleet id: {}", value))
    }
}

impl From<FleetId> for String {
    fn from(id: FleetId) -> Self {
        id.to_string()
    }
}

/// Deck tier of a carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deck {
    /// Position 1
    Top,
    /// Positions 2-3
    Middle,
    /// Positions 4-6
    Bottom,
}

impl Deck {
    pub const ALL: [Deck; 3] = [Deck::Top, Deck::Middle, Deck::Bottom];

    /// Maximum number of vehicles on this deck
    pub fn slots(&self) -> usize {
        match self {
            Deck::Top => 1,
            Deck::Middle => 2,
            Deck::Bottom => 3,
        }
    }

    /// Deck for a 0-based position within a batch of up to six vehicles
    pub fn for_position(position: usize) -> Self {
        match position {
            0 => Deck::Top,
            1 | 2 => Deck::Middle,
            _ => Deck::Bottom,
        }
    }

    /// Top and middle decks form the upper partition
    pub fn is_upper(&self) -> bool {
        !matches!(self, Deck::Bottom)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Deck::Top => "Top",
            Deck::Middle => "Middle",
            Deck::Bottom => "Bottom",
        }
    }
}

/// A single carrier's computed cargo manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub id: FleetId,
    pub name: String,
    /// Nominal capacity in m³ (soft budget)
    pub capacity_m3: f64,
    pub top_deck: Vec<Vehicle>,
    pub middle_deck: Vec<Vehicle>,
    pub bottom_deck: Vec<Vehicle>,
    /// Sum of all assigned vehicle volumes
    pub total_volume_m3: f64,
    /// round(total / capacity * 100), may exceed 100
    pub utilization_percent: u32,
    /// Distinct destinations in first-seen order
    pub destinations: Vec<String>,
}

impl Fleet {
    pub fn deck(&self, deck: Deck) -> &[Vehicle] {
        match deck {
            Deck::Top => &self.top_deck,
            Deck::Middle => &self.middle_deck,
            Deck::Bottom => &self.bottom_deck,
        }
    }

    pub fn vehicle_count(&self) -> usize {
        self.top_deck.len() + self.middle_deck.len() + self.bottom_deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle_count() == 0
    }

    /// Vehicles on top and middle decks
    pub fn upper_count(&self) -> usize {
        self.top_deck.len() + self.middle_deck.len()
    }

    /// Vehicles on the bottom deck
    pub fn lower_count(&self) -> usize {
        self.bottom_deck.len()
    }

    pub fn upper_volume_m3(&self) -> f64 {
        self.top_deck
            .iter()
            .chain(&self.middle_deck)
            .map(|v| v.volume_m3)
            .sum()
    }

    pub fn lower_volume_m3(&self) -> f64 {
        self.bottom_deck.iter().map(|v| v.volume_m3).sum()
    }

    /// All vehicles in loading order (top, middle, bottom)
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.top_deck
            .iter()
            .chain(&self.middle_deck)
            .chain(&self.bottom_deck)
    }

    /// Vehicles with their deck and 1-based carrier position (1..=6)
    pub fn positions(&self) -> impl Iterator<Item = (Deck, usize, &Vehicle)> {
        Deck::ALL
            .into_iter()
            .flat_map(move |deck| self.deck(deck).iter().map(move |v| (deck, v)))
            .enumerate()
            .map(|(idx, (deck, v))| (deck, idx + 1, v))
    }
}
