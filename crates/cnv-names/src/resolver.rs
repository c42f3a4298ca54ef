use tracing::trace;

use crate::model::Resolution;
use crate::table::PatternTable;

/// Resolves raw channel labels against a borrowed, immutable table. Copyable
/// and stateless; `resolve` does no I/O and is safe to call from any number
/// of threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    table: &'t PatternTable,
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t PatternTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t PatternTable {
        self.table
    }

    /// Maps one raw label to its canonical metadata. `Unresolved` carries the
    /// original label back to the caller; it is a normal outcome for
    /// user-defined or unlisted instrument channels.
    pub fn resolve(&self, label: &str) -> Resolution {
        match self.table.lookup(label) {
            Some(entry) => {
                trace!(label, variable = %entry.variable, "resolved channel label");
                Resolution::Resolved(entry.resolved())
            }
            None => {
                trace!(label, "no pattern matched channel label");
                Resolution::Unresolved {
                    label: label.to_string(),
                }
            }
        }
    }

    /// Resolves a sequence of labels, one `Resolution` per label in order.
    /// Matches how a file's header names are processed as a batch.
    pub fn resolve_all<'a, I>(&self, labels: I) -> Vec<Resolution>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels.into_iter().map(|label| self.resolve(label)).collect()
    }
}

/// Extracts the raw channel label from a CNV header name entry such as
/// `"t090C: Temperature [ITS-90, deg C]"`. Everything after the first colon
/// is descriptive text.
pub fn header_short_name(entry: &str) -> &str {
    match entry.split_once(':') {
        Some((short, _)) => short.trim(),
        None => entry.trim(),
    }
}
