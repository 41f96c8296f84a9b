use crate::consts::{LAYOUT_LEN, POS_NOT_FOUND, QWERTY_BASE};
use crate::error::{TfResult, TypeForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A 45-slot keyboard layout in the fixed QWERTY slot order
/// `1234567890-=qwertyuiop[]asdfghjkl;'zxcvbnm,./`.
///
/// Every slot holds a distinct printable ASCII character.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Layout {
    keys: [u8; LAYOUT_LEN],
}

impl Layout {
    pub fn parse(s: &str) -> TfResult<Self> {
        let len = s.chars().count();
        if len != LAYOUT_LEN {
            return Err(TypeForgeError::Validation(format!(
                "layout must be exactly {} characters, got {}",
                LAYOUT_LEN, len
            )));
        }
        Self::from_bytes(s.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> TfResult<Self> {
        if bytes.len() != LAYOUT_LEN {
            return Err(TypeForgeError::Validation(format!(
                "layout must be exactly {} characters, got {}",
                LAYOUT_LEN,
                bytes.len()
            )));
        }

        let mut seen = [false; 128];
        let mut keys = [0u8; LAYOUT_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_graphic() {
                return Err(TypeForgeError::Validation(format!(
                    "slot {} holds a non-printable or non-ASCII character",
                    i
                )));
            }
            if seen[b as usize] {
                return Err(TypeForgeError::Validation(format!(
                    "character '{}' appears more than once",
                    b as char
                )));
            }
            seen[b as usize] = true;
            keys[i] = b;
        }
        Ok(Self { keys })
    }

    pub fn qwerty() -> Self {
        KnownLayout::Qwerty.layout()
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; LAYOUT_LEN] {
        &self.keys
    }

    #[inline(always)]
    pub fn key(&self, slot: usize) -> u8 {
        self.keys[slot]
    }

    /// Builds a layout without re-validating. Callers must only permute
    /// characters of an already valid layout.
    pub(crate) fn from_keys_unchecked(keys: [u8; LAYOUT_LEN]) -> Self {
        Self { keys }
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
    }

    /// Character -> slot index. Non-ASCII characters are never on a layout.
    pub fn pos_map(&self) -> [u8; 128] {
        let mut map = [POS_NOT_FOUND; 128];
        for (i, &b) in self.keys.iter().enumerate() {
            map[b as usize] = i as u8;
        }
        map
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.keys {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout(\"{}\")", self)
    }
}

impl FromStr for Layout {
    type Err = TypeForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Layout {
    type Error = TypeForgeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.to_string()
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
    ColemakDH,
    Workman,
}

impl KnownLayout {
    /// Number row, top row, home row and bottom row concatenated in slot order.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => QWERTY_BASE,
            Self::Dvorak => "1234567890[]',.pyfgcrl/=aoeuidhtns-;qjkxbmwvz",
            Self::Colemak => "1234567890-=qwfpgjluy;[]arstdhneio'zxcvbkm,./",
            Self::ColemakDH => "1234567890-=qwfpbjluy;[]arstgmneio'zxcdvkh,./",
            Self::Workman => "1234567890-=qdrwbjfup;[]ashtgyneoi'zxmcvkl,./",
        }
    }

    pub fn layout(&self) -> Layout {
        let mut keys = [0u8; LAYOUT_LEN];
        keys.copy_from_slice(self.get_str().as_bytes());
        Layout::from_keys_unchecked(keys)
    }
}

pub fn get_all_layouts() -> Vec<(KnownLayout, Layout)> {
    KnownLayout::iter().map(|k| (k, k.layout())).collect()
}

/// Accepts either a known layout name (`colemak_dh`) or a literal 45-char string.
pub fn resolve_layout(spec: &str) -> TfResult<Layout> {
    if let Ok(known) = KnownLayout::from_str(spec) {
        return Ok(known.layout());
    }
    Layout::parse(spec)
}
