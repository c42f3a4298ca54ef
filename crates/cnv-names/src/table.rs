use csv::ReaderBuilder;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::debug;

use crate::errors::TableError;
use crate::model::ResolvedVariable;
use crate::pattern::Pattern;

/// The bundled channel-name table, versioned with the crate. No runtime
/// configuration can substitute it; tests build reduced tables through
/// `PatternTable::load` instead.
static CHANNEL_NAMES_CSV: &str = include_str!("../data/channel_names.csv");

static BUILTIN: OnceCell<PatternTable> = OnceCell::new();

#[derive(Debug, Deserialize)]
struct RawRow {
    pattern: String,
    variable: String,
    display_unit: String,
    bare_unit: String,
}

/// One row of the table: a compiled pattern plus the metadata it resolves to.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub pattern: Pattern,
    pub variable: String,
    pub display_unit: String,
    pub bare_unit: String,
}

impl PatternEntry {
    pub fn resolved(&self) -> ResolvedVariable {
        ResolvedVariable {
            variable: self.variable.clone(),
            display_unit: self.display_unit.clone(),
            bare_unit: self.bare_unit.clone(),
        }
    }
}

/// The ordered channel pattern table. Declaration order is load-bearing:
/// `lookup` returns the first matching entry, so more specific literal rows
/// are declared ahead of digit-class rows sharing the same prefix. The table
/// is immutable once loaded.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Parses CSV text with a `pattern,variable,display_unit,bare_unit`
    /// header into an ordered table. Row indices in errors count data rows
    /// from zero, excluding the header.
    pub fn load(csv_text: &str) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_text.as_bytes());

        let mut entries = Vec::new();
        for (row_index, record) in reader.deserialize::<RawRow>().enumerate() {
            let row = record.map_err(|source| TableError::Csv { source })?;
            let required = [
                ("pattern", &row.pattern),
                ("variable", &row.variable),
                ("display_unit", &row.display_unit),
                ("bare_unit", &row.bare_unit),
            ];
            for (field, value) in required {
                if value.is_empty() {
                    return Err(TableError::MissingField { row_index, field });
                }
            }
            let pattern = Pattern::compile(&row.pattern).map_err(|message| {
                TableError::MalformedPattern {
                    row_index,
                    pattern: row.pattern.clone(),
                    message,
                }
            })?;
            entries.push(PatternEntry {
                pattern,
                variable: row.variable,
                display_unit: row.display_unit,
                bare_unit: row.bare_unit,
            });
        }

        debug!(entry_count = entries.len(), "loaded channel pattern table");
        Ok(Self { entries })
    }

    /// Loads the table bundled with the crate.
    pub fn load_builtin() -> Result<Self, TableError> {
        Self::load(CHANNEL_NAMES_CSV)
    }

    /// Entries in declared order.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in declared order, whose pattern matches the whole
    /// label. The scan short-circuits; this is the specificity tie-break.
    pub fn lookup(&self, label: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.pattern.matches(label))
    }
}

/// The process-wide table, loaded once on first use and read-only after
/// that, so concurrent readers need no synchronization.
pub fn builtin_table() -> Result<&'static PatternTable, TableError> {
    BUILTIN.get_or_try_init(PatternTable::load_builtin)
}
