use crate::consts::{GRID_COLUMNS, HOME_ROW_SLOTS, LAYOUT_LEN};
use serde::{Deserialize, Serialize};

/// Grid coordinates of a slot. The fitness model treats the 45 slots as a
/// row-major grid of 13 columns, so rows here do not line up with the
/// physical keyboard rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPos {
    pub row: usize,
    pub col: usize,
}

#[inline(always)]
pub fn slot_pos(slot: usize) -> SlotPos {
    SlotPos {
        row: slot / GRID_COLUMNS,
        col: slot % GRID_COLUMNS,
    }
}

#[inline(always)]
pub fn manhattan(a: usize, b: usize) -> usize {
    let pa = slot_pos(a);
    let pb = slot_pos(b);
    pa.row.abs_diff(pb.row) + pa.col.abs_diff(pb.col)
}

#[inline(always)]
pub fn is_home_row(slot: usize) -> bool {
    HOME_ROW_SLOTS.contains(&slot)
}

/// Precomputed slot-to-slot distances for the 45-slot grid.
pub struct DistanceTable {
    table: [[u8; LAYOUT_LEN]; LAYOUT_LEN],
}

impl DistanceTable {
    pub fn new() -> Self {
        let mut table = [[0u8; LAYOUT_LEN]; LAYOUT_LEN];
        for (a, row) in table.iter_mut().enumerate() {
            for (b, cell) in row.iter_mut().enumerate() {
                *cell = manhattan(a, b) as u8;
            }
        }
        Self { table }
    }

    #[inline(always)]
    pub fn get(&self, a: usize, b: usize) -> u8 {
        self.table[a][b]
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical rows of the slot order: number, top, home, bottom.
pub const PHYSICAL_ROWS: [std::ops::Range<usize>; 4] = [0..12, 12..24, 24..35, 35..45];
