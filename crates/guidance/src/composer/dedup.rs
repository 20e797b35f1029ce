//! Deduplication helpers for composed list fields.
//!
//! The same guidance fact is often contributed by more than one source table
//! (stage playbook, charge record, category fallback). Every list field is
//! deduplicated by exact string equality before the document is returned;
//! first-occurrence order is kept so source priority stays visible.

use std::collections::{HashMap, HashSet};

use shared_types::ImmediateAction;

/// Drop exact duplicates, keeping the first occurrence of each string.
pub fn dedup_strings(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

/// Merge actions with equal text, keeping first-occurrence order and the
/// highest urgency contributed for that text.
pub fn dedup_actions(items: Vec<ImmediateAction>) -> Vec<ImmediateAction> {
    let mut index_by_text: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<ImmediateAction> = Vec::with_capacity(items.len());
    for item in items {
        match index_by_text.get(&item.action) {
            Some(&idx) => {
                if item.urgency.weight() > out[idx].urgency.weight() {
                    out[idx].urgency = item.urgency;
                }
            }
            None => {
                index_by_text.insert(item.action.clone(), out.len());
                out.push(item);
            }
        }
    }
    out
}
