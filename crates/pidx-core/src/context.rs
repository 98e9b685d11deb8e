//! Context formatting for the task-context assembler.

use crate::store::PatternStore;
use pidx_common::PatternId;

/// Format a set of pattern IDs as `"{id}: {description}"` lines.
///
/// One line per resolvable ID, joined by newlines, in the order given.
/// IDs that do not resolve are silently omitted — no placeholder line.
pub fn format_context(store: &PatternStore, ids: &[PatternId]) -> String {
    ids.iter()
        .filter_map(|id| store.get(id))
        .map(|p| format!("{}: {}", p.id, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}
