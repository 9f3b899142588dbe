//! Label to address map built from a filtered symbol dump.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::symbols::objdump::parse_line;
use crate::symbols::types::{ExtractStats, SymbolRecord};

/// Set of section names whose symbols denote code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSections(HashSet<String>);

impl TextSections {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextSections(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, section: &str) -> bool {
        self.0.contains(section)
    }
}

impl Default for TextSections {
    fn default() -> Self {
        TextSections::new([".text"])
    }
}

/// Map from label to address. A repeated label keeps its last address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    labels: HashMap<String, u64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, replacing any earlier address; returns the old one.
    pub fn insert(&mut self, label: impl Into<String>, address: u64) -> Option<u64> {
        self.labels.insert(label.into(), address)
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.labels.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn insert_record(&mut self, record: SymbolRecord) {
        if let Some(previous) = self.insert(record.label.clone(), record.address) {
            if previous != record.address {
                debug!(
                    label = %record.label,
                    previous = %format!("{:#x}", previous),
                    address = %format!("{:#x}", record.address),
                    "Label redefined, keeping later address"
                );
            }
        }
    }

    /// Parse dump lines in order and fold the text-section rows into the table.
    pub fn extend_from_lines<I, S>(&mut self, lines: I, sections: &TextSections) -> ExtractStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend_from_lines_with(lines, sections, |_| {})
    }

    /// Like [`extend_from_lines`](Self::extend_from_lines), calling
    /// `on_accept` for every record entered into the table.
    pub fn extend_from_lines_with<I, S, F>(
        &mut self,
        lines: I,
        sections: &TextSections,
        mut on_accept: F,
    ) -> ExtractStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&SymbolRecord),
    {
        let mut stats = ExtractStats::default();
        for line in lines {
            stats.lines_read += 1;
            let Some(record) = parse_line(line.as_ref()) else {
                continue;
            };
            stats.records_parsed += 1;
            if !sections.contains(&record.section) {
                continue;
            }
            on_accept(&record);
            self.insert_record(record);
            stats.addresses_extracted += 1;
        }
        stats
    }

    /// Build a fresh table from dump lines
    pub fn from_lines<I, S>(lines: I, sections: &TextSections) -> (Self, ExtractStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = SymbolTable::new();
        let stats = table.extend_from_lines(lines, sections);
        (table, stats)
    }
}

impl FromIterator<(String, u64)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut table = SymbolTable::new();
        for (label, address) in iter {
            table.insert(label, address);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &[&str] = &[
        "",
        "hello.elf:     file format elf32-patmos",
        "",
        "SYMBOL TABLE:",
        "00001000 l    d  .text\t00000000 .text",
        "00001040 g     F .text\t00000010 main",
        "00003000 g     O .rodata\t00000004 table",
        "00001050 l       .text\t00000000 .LBB0_1",
    ];

    #[test]
    fn test_from_lines_filters_sections() {
        let (table, stats) = SymbolTable::from_lines(DUMP, &TextSections::default());
        assert_eq!(table.get("main"), Some(0x1040));
        assert_eq!(table.get(".LBB0_1"), Some(0x1050));
        assert_eq!(table.get("table"), None);
        assert_eq!(stats.lines_read, 8);
        assert_eq!(stats.records_parsed, 4);
        assert_eq!(stats.addresses_extracted, 3);
    }

    #[test]
    fn test_custom_sections() {
        let sections = TextSections::new([".text", ".rodata"]);
        let (table, _) = SymbolTable::from_lines(DUMP, &sections);
        assert_eq!(table.get("table"), Some(0x3000));
    }

    #[test]
    fn test_last_label_wins() {
        let lines = [
            "00001000 g     F .text\t00000010 dup",
            "00002000 g     F .text\t00000010 dup",
        ];
        let (table, stats) = SymbolTable::from_lines(lines, &TextSections::default());
        assert_eq!(table.get("dup"), Some(0x2000));
        assert_eq!(table.len(), 1);
        // both rows count as extracted addresses
        assert_eq!(stats.addresses_extracted, 2);
    }

    #[test]
    fn test_accepted_records_reported_in_order() {
        let mut table = SymbolTable::new();
        let mut seen = Vec::new();
        let stats = table.extend_from_lines_with(DUMP, &TextSections::default(), |rec| {
            seen.push(rec.label.clone())
        });
        assert_eq!(seen, vec![".text", "main", ".LBB0_1"]);
        assert_eq!(stats.addresses_extracted, seen.len());
    }

    #[test]
    fn test_from_iterator() {
        let table: SymbolTable = vec![("a".to_string(), 1), ("a".to_string(), 2)]
            .into_iter()
            .collect();
        assert_eq!(table.get("a"), Some(2));
        assert!(table.contains("a"));
        assert!(!table.is_empty());
    }
}
