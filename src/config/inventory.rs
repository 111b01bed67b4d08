//! Item-index tables for the CHASIDE inventory.
//!
//! The instrument assigns each of the 98 yes/no items to exactly one pool:
//! one area's interest pool (10 items per area) or one area's aptitude pool
//! (4 items per area). The tables below are the published assignment and are
//! loaded once per process.

use crate::core::Area;
use crate::errors::ChasideError;
use once_cell::sync::Lazy;

pub const ITEM_COUNT: usize = 98;
pub const INTEREST_ITEMS_PER_AREA: usize = 10;
pub const APTITUDE_ITEMS_PER_AREA: usize = 4;

/// Item assignment for one area. Indices are 1-based item numbers.
#[derive(Debug, Clone)]
pub struct AreaItems {
    pub area: Area,
    pub interest: [u16; INTEREST_ITEMS_PER_AREA],
    pub aptitude: [u16; APTITUDE_ITEMS_PER_AREA],
}

/// Validated item-index tables for the whole inventory.
///
/// Constructed once at startup and shared read-only across workers.
#[derive(Debug, Clone)]
pub struct InventoryDefinition {
    areas: Vec<AreaItems>,
    item_count: usize,
}

impl InventoryDefinition {
    /// Build a definition, checking structural invariants: every item index
    /// in 1..=item_count, assigned to exactly one pool overall, with exact
    /// per-area pool sizes enforced by the array types.
    pub fn new(areas: Vec<AreaItems>, item_count: usize) -> Result<Self, ChasideError> {
        if areas.len() != Area::ALL.len() {
            return Err(ChasideError::InvalidInventory(format!(
                "expected {} areas, got {}",
                Area::ALL.len(),
                areas.len()
            )));
        }
        let mut seen = vec![false; item_count + 1];
        let mut assigned = 0usize;
        for def in &areas {
            for &idx in def.interest.iter().chain(def.aptitude.iter()) {
                let idx = idx as usize;
                if idx == 0 || idx > item_count {
                    return Err(ChasideError::InvalidInventory(format!(
                        "item {} out of range 1..={} (area {})",
                        idx, item_count, def.area
                    )));
                }
                if seen[idx] {
                    return Err(ChasideError::InvalidInventory(format!(
                        "item {} assigned to more than one pool",
                        idx
                    )));
                }
                seen[idx] = true;
                assigned += 1;
            }
        }
        if assigned != item_count {
            return Err(ChasideError::InvalidInventory(format!(
                "{} of {} items assigned",
                assigned, item_count
            )));
        }
        Ok(Self { areas, item_count })
    }

    /// The published CHASIDE tables (98 items, 7 areas).
    pub fn chaside() -> &'static InventoryDefinition {
        &CHASIDE
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn interest_items(&self, area: Area) -> &[u16] {
        &self.items(area).interest
    }

    pub fn aptitude_items(&self, area: Area) -> &[u16] {
        &self.items(area).aptitude
    }

    fn items(&self, area: Area) -> &AreaItems {
        // areas is validated to hold all seven exactly once
        self.areas
            .iter()
            .find(|d| d.area == area)
            .unwrap_or_else(|| unreachable!("validated inventory missing area {area}"))
    }
}

static CHASIDE: Lazy<InventoryDefinition> = Lazy::new(|| {
    let areas = vec![
        AreaItems {
            area: Area::C,
            interest: [1, 12, 20, 53, 64, 71, 78, 85, 91, 98],
            aptitude: [2, 15, 46, 51],
        },
        AreaItems {
            area: Area::H,
            interest: [9, 25, 34, 41, 56, 67, 74, 80, 89, 95],
            aptitude: [30, 63, 72, 86],
        },
        AreaItems {
            area: Area::A,
            interest: [3, 11, 21, 28, 36, 45, 50, 57, 81, 96],
            aptitude: [22, 39, 76, 82],
        },
        AreaItems {
            area: Area::S,
            interest: [8, 16, 23, 33, 44, 52, 62, 70, 87, 92],
            aptitude: [4, 29, 40, 69],
        },
        AreaItems {
            area: Area::I,
            interest: [6, 19, 27, 38, 47, 54, 60, 75, 83, 97],
            aptitude: [10, 26, 59, 90],
        },
        AreaItems {
            area: Area::D,
            interest: [5, 14, 24, 31, 37, 48, 58, 65, 73, 84],
            aptitude: [13, 18, 43, 66],
        },
        AreaItems {
            area: Area::E,
            interest: [17, 32, 35, 42, 49, 61, 68, 77, 88, 93],
            aptitude: [7, 55, 79, 94],
        },
    ];
    InventoryDefinition::new(areas, ITEM_COUNT)
        .unwrap_or_else(|e| unreachable!("built-in CHASIDE tables are valid: {e}"))
});
