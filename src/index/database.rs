// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Database of canonical diagrams.
//!
//! Records are stored with canonical curve labels under their canonical
//! zones. Queries are canonicalized the same way and the results renamed
//! back to the caller's labels.

use crate::canonical::{canonical_label, canonicalize, CanonicalForm};
use crate::code::{Face, GaussCode};
use crate::error::{CodeError, DatabaseError, Result};
use crate::index::{DiagramIndex, DiagramRecord, Insertion};
use crate::zones::ZoneSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Diagram database backed by a [`DiagramIndex`].
#[derive(Debug, Clone, Default)]
pub struct DiagramDatabase {
    index: DiagramIndex,
}

impl DiagramDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> &DiagramIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Canonicalize `record` and store it.
    pub fn add(&mut self, record: DiagramRecord) -> Result<Insertion> {
        let form = canonicalize(&record.zones());
        let canonical = record.rename_curves(&form.inverse_map())?;
        let outcome = self.index.insert(&form.zones.to_vec(), canonical);
        debug!(zones = %form.zones, ?outcome, "add record");
        Ok(outcome)
    }

    /// Compute the zones of `code` drawn with `outer` outside and store it.
    pub fn add_diagram(&mut self, code: GaussCode, outer: Face) -> Result<Insertion> {
        self.add(DiagramRecord::from_diagram(code, outer)?)
    }

    fn rename_all<'a>(
        form: &CanonicalForm,
        records: impl IntoIterator<Item = &'a DiagramRecord>,
    ) -> Result<Vec<DiagramRecord>> {
        records
            .into_iter()
            .map(|r| r.rename_curves(&form.label_map))
            .collect()
    }

    /// Diagrams whose zones are exactly `zones` (the empty zone is ignored),
    /// labelled with the query's labels.
    pub fn lookup(&self, zones: &ZoneSet) -> Result<Vec<DiagramRecord>> {
        let form = canonicalize(&zones.without_empty());
        Self::rename_all(&form, self.index.lookup_exact(&form.zones.to_vec()))
    }

    /// Diagrams whose zones include `zones`, with at most `max_curves` curves.
    ///
    /// Without `max_curves` the largest curve label of the query bounds the
    /// search, and a query naming no curves finds the one-curve diagrams.
    /// Curves the query does not mention get fresh labels.
    pub fn lookup_supersets(
        &self,
        zones: &ZoneSet,
        max_curves: Option<usize>,
    ) -> Result<Vec<DiagramRecord>> {
        let form = canonicalize(&zones.without_empty());
        let max_label = match max_curves {
            Some(0) => String::new(),
            Some(n) => canonical_label(n - 1),
            None => form
                .zones
                .iter()
                .filter_map(|z| z.max_label())
                .max()
                .map(str::to_string)
                .unwrap_or_else(|| canonical_label(0)),
        };
        Self::rename_all(
            &form,
            self.index.lookup_supersets(&form.zones.to_vec(), &max_label),
        )
    }

    /// Parse the text form: records separated by blank lines. Duplicates
    /// are skipped.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut db = Self::new();
        let mut start = 1;
        let mut block: Vec<&str> = Vec::new();
        for (i, line) in text.lines().chain(std::iter::once("")).enumerate() {
            if !line.trim().is_empty() {
                if block.is_empty() {
                    start = i + 1;
                }
                block.push(line);
                continue;
            }
            if block.is_empty() {
                continue;
            }
            let record = block.join("\n").parse::<DiagramRecord>().map_err(|e| match e {
                CodeError::Format { line, message } => CodeError::Format {
                    line: line + start - 1,
                    message,
                },
                other => other,
            })?;
            block.clear();
            if db.add(record)? == Insertion::Duplicate {
                debug!(line = start, "skipped duplicate record");
            }
        }
        Ok(db)
    }

    /// Text form of every record, blank-line separated.
    pub fn to_text(&self) -> String {
        let blocks: Vec<String> = self.index.records().iter().map(|r| r.to_string()).collect();
        blocks.join("\n\n")
    }

    pub fn load_text(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let db = Self::from_text(&text)?;
        info!(path = %path.as_ref().display(), records = db.len(), "loaded text database");
        Ok(db)
    }

    /// Read a binary index file written by [`DiagramDatabase::save`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let index: DiagramIndex = bincode::deserialize_from(reader)?;
        info!(path = %path.as_ref().display(), records = index.len(), "opened database");
        Ok(Self { index })
    }

    /// Write the whole index to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DatabaseError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        bincode::serialize_into(&mut writer, &self.index)?;
        writer.flush()?;
        info!(path = %path.as_ref().display(), records = self.len(), "saved database");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "-1,A-1\n{(1+ 1+,+)}\nA: 1+\n\n\
                        -1,A-1,B-1,AB-1\n{(1- 2+,-),(2- 1+,-)}\nA: 1- 2+\nB: 1+ 2-\n";

    #[test]
    fn test_lookup_uses_query_labels() {
        let db = DiagramDatabase::from_text(TEXT).unwrap();
        assert_eq!(db.len(), 2);
        let found = db.lookup(&"0,P,Q,PQ".parse().unwrap()).unwrap();
        assert_eq!(found.len(), 1);
        let labels: Vec<&str> = found[0].code().labels().collect();
        assert_eq!(labels, vec!["P", "Q"]);
    }

    #[test]
    fn test_superset_lookup_respects_curve_limit() {
        let db = DiagramDatabase::from_text(TEXT).unwrap();
        let zones: ZoneSet = "X".parse().unwrap();
        assert_eq!(db.lookup_supersets(&zones, Some(2)).unwrap().len(), 2);
        assert_eq!(db.lookup_supersets(&zones, None).unwrap().len(), 1);
        let wide = db.lookup_supersets(&zones, Some(2)).unwrap();
        let venn = wide.iter().find(|r| r.curve_count() == 2).unwrap();
        let mut labels: Vec<&str> = venn.code().labels().collect();
        labels.sort();
        assert_eq!(labels, vec!["B", "X"]);
    }

    #[test]
    fn test_empty_superset_query_finds_single_curves() {
        let db = DiagramDatabase::from_text(TEXT).unwrap();
        let found = db.lookup_supersets(&"0".parse().unwrap(), None).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].code().is_simple_loop());
        assert_eq!(db.lookup_supersets(&ZoneSet::new(), Some(2)).unwrap().len(), 2);
    }

    #[test]
    fn test_duplicates_skipped_on_load() {
        let text = format!("{}\n{}", TEXT, TEXT);
        let db = DiagramDatabase::from_text(&text).unwrap();
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_load_error_line_is_absolute() {
        let text = "-1,A-1\n{(1+ 1+,+)}\nA: 1+\n\n-1,A-1\n{(1+ 1+,+)}\nA 1+";
        assert!(matches!(
            DiagramDatabase::from_text(text),
            Err(CodeError::Format { line: 7, .. })
        ));
    }
}
