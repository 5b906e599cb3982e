//! Emoji catalog
//!
//! Scans fixed Unicode code-point ranges, keeps every code point with a
//! canonical name, and orders the result so that `face` entries come first.

use crate::logging;
use std::collections::{HashMap, HashSet};

/// Entries whose name contains this term sort ahead of everything else.
pub const MARKER_TERM: &str = "face";

/// Blocks known to contain emoji, scanned in this order.
pub const EMOJI_BLOCKS: [CodeRange; 7] = [
    CodeRange::new(0x1F600, 0x1F64F, "Emoticons"),
    CodeRange::new(0x1F300, 0x1F5FF, "Misc Symbols and Pictographs"),
    CodeRange::new(0x1F680, 0x1F6FF, "Transport and Map Symbols"),
    CodeRange::new(0x1F900, 0x1F9FF, "Supplemental Symbols and Pictographs"),
    CodeRange::new(0x1FA70, 0x1FAFF, "Symbols and Pictographs Extended-A"),
    CodeRange::new(0x1FA00, 0x1FA6F, "Chess Symbols"),
    CodeRange::new(0x1F1E6, 0x1F1FF, "Regional Indicator Symbols"),
];

/// Inclusive range of code points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    pub start: u32,
    pub end: u32,
    pub label: &'static str,
}

impl CodeRange {
    pub const fn new(start: u32, end: u32, label: &'static str) -> Self {
        Self { start, end, label }
    }

    /// Unlabelled range, handy for ad-hoc scans
    pub const fn span(start: u32, end: u32) -> Self {
        Self::new(start, end, "")
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }

    /// Number of code points covered (zero when `start > end`)
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Valid scalar values in the range; surrogates are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        (self.start..=self.end).filter_map(char::from_u32)
    }
}

/// Resolves the canonical Unicode name of a character.
pub trait NameSource {
    fn name(&self, c: char) -> Option<String>;
}

/// The Unicode character database bundled by `unicode_names2`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNames;

impl NameSource for UnicodeNames {
    fn name(&self, c: char) -> Option<String> {
        unicode_names2::name(c).map(|n| n.to_string())
    }
}

/// Name table keyed by code point
impl NameSource for HashMap<u32, String> {
    fn name(&self, c: char) -> Option<String> {
        self.get(&(c as u32)).cloned()
    }
}

/// One tile in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub character: char,
    /// Lowercased canonical name, e.g. "face with tears of joy"
    pub name: String,
}

impl CatalogEntry {
    pub fn code_point(&self) -> u32 {
        self.character as u32
    }

    pub fn is_face(&self) -> bool {
        self.name.contains(MARKER_TERM)
    }

    /// `U+1F602` style label
    pub fn code_label(&self) -> String {
        format!("U+{:04X}", self.code_point())
    }

    fn sort_key(&self) -> (u8, u32) {
        (if self.is_face() { 0 } else { 1 }, self.code_point())
    }
}

/// Counters gathered while building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Scalar values visited across all ranges
    pub scanned: usize,
    /// Code points without a canonical name
    pub unnamed: usize,
    /// Code points seen again through an overlapping range
    pub duplicates: usize,
}

/// Immutable, ordered emoji collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    stats: BuildStats,
}

impl Catalog {
    /// Build from the bundled Unicode name database.
    pub fn build(ranges: &[CodeRange]) -> Self {
        Self::build_with(ranges, &UnicodeNames)
    }

    /// Build using an arbitrary name source.
    pub fn build_with<N: NameSource + ?Sized>(ranges: &[CodeRange], names: &N) -> Self {
        let mut stats = BuildStats::default();
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for range in ranges {
            for c in range.chars() {
                stats.scanned += 1;
                if !seen.insert(c) {
                    stats.duplicates += 1;
                    continue;
                }
                match names.name(c) {
                    Some(name) => entries.push(CatalogEntry {
                        character: c,
                        name: name.to_lowercase(),
                    }),
                    None => stats.unnamed += 1,
                }
            }
        }

        entries.sort_by_key(CatalogEntry::sort_key);

        logging::debug(
            "CATALOG",
            &format!(
                "Built catalog: {} ranges, {} scanned, {} unnamed, {} duplicates, {} entries",
                ranges.len(),
                stats.scanned,
                stats.unnamed,
                stats.duplicates,
                entries.len()
            ),
        );

        Self { entries, stats }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Look up the entry for a character
    pub fn find(&self, c: char) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.character == c)
    }

    /// Number of entries matching the marker term
    pub fn face_count(&self) -> usize {
        // Face entries form a prefix
        self.entries.partition_point(CatalogEntry::is_face)
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
