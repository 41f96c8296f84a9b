use super::template::LayoutTemplate;
use crate::layouts::Layout;
use fastrand::Rng;

/// Single-point crossover over the letter sub-sequence of two parents.
///
/// Fixed slots come from the template (identical in both parents). The split
/// point is drawn from `1..letters`, so each child inherits at least one
/// letter from each parent.
pub fn crossover_single_point(
    p1: &Layout,
    p2: &Layout,
    template: &LayoutTemplate,
    rng: &mut Rng,
) -> (Layout, Layout) {
    let n = template.letter_slots().len();
    let point = rng.usize(1..n);
    crossover_at(p1, p2, template, point)
}

/// Deterministic half of [`crossover_single_point`]: splits at `point`.
pub fn crossover_at(
    p1: &Layout,
    p2: &Layout,
    template: &LayoutTemplate,
    point: usize,
) -> (Layout, Layout) {
    let s1 = template.letters(p1);
    let s2 = template.letters(p2);
    let point = point.min(s1.len());

    let c1 = splice_and_repair(&s1, &s2, point);
    let c2 = splice_and_repair(&s2, &s1, point);

    (template.with_letters(&c1), template.with_letters(&c2))
}

/// `head[..point] + tail[point..]`, with letters duplicated by the splice
/// replaced (left to right) by the letters the child is missing, taken in
/// the order they occur in `tail`.
///
/// Both inputs must be permutations of the same letter set.
fn splice_and_repair(head: &[u8], tail: &[u8], point: usize) -> Vec<u8> {
    let mut used = [false; 128];
    let mut child = Vec::with_capacity(head.len());
    let mut holes = Vec::new();

    for &c in &head[..point] {
        used[c as usize] = true;
        child.push(c);
    }

    for &c in &tail[point..] {
        if used[c as usize] {
            holes.push(child.len());
            child.push(0);
        } else {
            used[c as usize] = true;
            child.push(c);
        }
    }

    let mut donors = tail.iter().filter(|&&c| !used[c as usize]);
    for hole in holes {
        if let Some(&c) = donors.next() {
            child[hole] = c;
        }
    }

    child
}
