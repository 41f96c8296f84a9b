use crate::consts::LAYOUT_LEN;
use crate::error::{TfResult, TypeForgeError};
use crate::layouts::Layout;

/// The base layout of a run, split into the slots evolution may permute
/// (its ASCII letters) and the slots that stay fixed (everything else).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTemplate {
    base: Layout,
    letter_slots: Vec<usize>,
    fixed_slots: Vec<usize>,
    /// The base's letters, sorted. Every individual permutes exactly these.
    alphabet: Vec<u8>,
}

impl LayoutTemplate {
    pub fn new(base: Layout) -> TfResult<Self> {
        let mut letter_slots = Vec::new();
        let mut fixed_slots = Vec::new();

        for (i, &b) in base.as_bytes().iter().enumerate() {
            if b.is_ascii_alphabetic() {
                if b.is_ascii_uppercase() {
                    return Err(TypeForgeError::Validation(format!(
                        "base layout letters must be lowercase, found '{}' at slot {}",
                        b as char, i
                    )));
                }
                letter_slots.push(i);
            } else {
                fixed_slots.push(i);
            }
        }

        if letter_slots.len() < 2 {
            return Err(TypeForgeError::Validation(format!(
                "base layout needs at least 2 letter slots to evolve, found {}",
                letter_slots.len()
            )));
        }

        let mut alphabet: Vec<u8> = letter_slots.iter().map(|&i| base.key(i)).collect();
        alphabet.sort_unstable();

        Ok(Self {
            base,
            letter_slots,
            fixed_slots,
            alphabet,
        })
    }

    pub fn qwerty() -> Self {
        let base = Layout::qwerty();
        let letter_slots: Vec<usize> = (0..LAYOUT_LEN)
            .filter(|&i| base.key(i).is_ascii_alphabetic())
            .collect();
        let fixed_slots = (0..LAYOUT_LEN)
            .filter(|i| !letter_slots.contains(i))
            .collect();
        Self {
            base,
            alphabet: (b'a'..=b'z').collect(),
            letter_slots,
            fixed_slots,
        }
    }

    pub fn base(&self) -> &Layout {
        &self.base
    }

    pub fn letter_slots(&self) -> &[usize] {
        &self.letter_slots
    }

    pub fn fixed_slots(&self) -> &[usize] {
        &self.fixed_slots
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// The letters of `layout` in letter-slot order.
    pub fn letters(&self, layout: &Layout) -> Vec<u8> {
        self.letter_slots.iter().map(|&i| layout.key(i)).collect()
    }

    /// Places `letters` into the letter slots of the base, in order.
    /// `letters` must be a permutation of [`Self::alphabet`].
    pub fn with_letters(&self, letters: &[u8]) -> Layout {
        debug_assert_eq!(letters.len(), self.letter_slots.len());
        let mut keys = *self.base.as_bytes();
        for (&slot, &c) in self.letter_slots.iter().zip(letters) {
            keys[slot] = c;
        }
        Layout::from_keys_unchecked(keys)
    }

    /// True when `layout` keeps every fixed slot of the base and holds a
    /// permutation of the base's letters in the letter slots.
    pub fn conforms(&self, layout: &Layout) -> bool {
        if self
            .fixed_slots
            .iter()
            .any(|&i| layout.key(i) != self.base.key(i))
        {
            return false;
        }
        let mut letters = self.letters(layout);
        letters.sort_unstable();
        letters == self.alphabet
    }
}
