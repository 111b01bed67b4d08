//! Per-area aggregation of normalized answers.

use crate::config::InventoryDefinition;
use crate::core::Area;

/// Interest and aptitude yes-counts for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSums {
    pub interest: u32,
    pub aptitude: u32,
}

/// Sum the normalized values at one area's configured item indices.
///
/// Conservation holds by construction: every item index belongs to exactly
/// one pool, so summing `area_sums` over all areas recounts each "yes" item
/// exactly once.
pub fn area_sums(normalized: &[u8], inventory: &InventoryDefinition, area: Area) -> AreaSums {
    AreaSums {
        interest: sum_at(normalized, inventory.interest_items(area)),
        aptitude: sum_at(normalized, inventory.aptitude_items(area)),
    }
}

fn sum_at(normalized: &[u8], indices: &[u16]) -> u32 {
    indices
        .iter()
        .map(|&idx| {
            // indices are 1-based item numbers, validated against item_count
            normalized
                .get(idx as usize - 1)
                .copied()
                .unwrap_or(0) as u32
        })
        .sum()
}
