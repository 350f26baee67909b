//! Character set definitions and glyph ramps.

use crate::error::{ConvertError, Result};

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from least dense (space) to most dense (@).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Detailed ramp (70 levels) for large outputs with fine gradients.
pub const DETAILED_CHARSET: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+', '_',
    '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f', 'j', 'r', 'x', 'n',
    'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p',
    'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Block character set (5 levels) using Unicode shade blocks.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Two-level set: empty or full block.
pub const BINARY_CHARSET: &[char] = &[' ', '█'];

/// Dot set (5 levels).
pub const DOTS_CHARSET: &[char] = &[' ', '.', '·', ':', '•'];

/// Named character set presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    #[default]
    Standard,
    /// Long ASCII ramp (70 levels)
    Detailed,
    /// Unicode shade blocks (5 levels)
    Blocks,
    /// Space and full block only
    Binary,
    /// Dots of increasing weight
    Dots,
}

impl CharSet {
    /// All presets, in listing order.
    pub const ALL: [CharSet; 5] = [
        CharSet::Standard,
        CharSet::Detailed,
        CharSet::Blocks,
        CharSet::Binary,
        CharSet::Dots,
    ];

    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Detailed => DETAILED_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Binary => BINARY_CHARSET,
            CharSet::Dots => DOTS_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Detailed => "detailed",
            CharSet::Blocks => "blocks",
            CharSet::Binary => "binary",
            CharSet::Dots => "dots",
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn ramp(&self) -> GlyphRamp {
        GlyphRamp {
            chars: self.chars().to_vec(),
        }
    }
}

/// Ordered glyph sequence, least dense first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from an explicit character list.
    ///
    /// Returns [`ConvertError::EmptyRamp`] for an empty list.
    pub fn new(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(ConvertError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    /// Build a ramp from user-supplied text, falling back to the standard
    /// ramp when the text is empty.
    ///
    /// Control characters (newlines, tabs, escapes) are dropped so every
    /// glyph occupies exactly one cell of its row.
    pub fn custom(text: &str) -> Self {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
        if chars.len() != text.chars().count() {
            log::warn!("Dropped control characters from custom charset");
        }
        if chars.is_empty() {
            log::debug!("Empty custom charset, falling back to standard ramp");
            return Self::default();
        }
        Self { chars }
    }

    /// Same glyphs in the opposite order.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        CharSet::Standard.ramp()
    }
}

impl std::fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
