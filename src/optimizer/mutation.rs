use super::template::LayoutTemplate;
use crate::layouts::Layout;
use fastrand::Rng;

/// Swaps the letters of two distinct letter slots. Fixed slots are never
/// touched.
pub fn swap_mutation(layout: &mut Layout, template: &LayoutTemplate, rng: &mut Rng) {
    let slots = template.letter_slots();
    let a = rng.usize(0..slots.len());
    let mut b = rng.usize(0..slots.len() - 1);
    if b >= a {
        b += 1;
    }
    layout.swap(slots[a], slots[b]);
}
