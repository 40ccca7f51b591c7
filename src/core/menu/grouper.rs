/*!
Grouping of classified entries by translated type label.

Ordering is case-insensitive lexicographic, both for type groups and for
the leaves inside a group. Ties under case folding are broken by the exact
label and then by the entry identifier, so the result never depends on the
order entries were registered in.
*/

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::core::algorithm::{AlgorithmEntry, TypeTranslator};
use crate::core::error::Error;
use crate::core::invocation::InvocationRef;

/// Case-insensitive comparison used for every menu label.
///
/// Labels equal under case folding fall back to a byte-wise comparison so the
/// order stays total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// A classified entry inside a type group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedEntry {
    /// Registry identifier of the source entry
    pub entry_id: String,
    /// How the leaf is executed
    pub invocation: InvocationRef,
}

/// All entries sharing one translated type label
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGroup {
    label: String,
    entries: Vec<GroupedEntry>,
}

impl TypeGroup {
    /// Translated type label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Entries in display order
    pub fn entries(&self) -> &[GroupedEntry] {
        &self.entries
    }

    /// Invocations in display order
    pub fn invocations(&self) -> impl Iterator<Item = &InvocationRef> {
        self.entries.iter().map(|e| &e.invocation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Output of [`MenuGrouper::group`]
#[derive(Debug, Default)]
pub struct GroupedMenu {
    groups: Vec<TypeGroup>,
    rejected: Vec<Error>,
}

impl GroupedMenu {
    /// Type groups in display order
    pub fn groups(&self) -> &[TypeGroup] {
        &self.groups
    }

    /// Entries excluded from the menu, one error per entry
    pub fn rejected(&self) -> &[Error] {
        &self.rejected
    }

    /// Consume the result, handing back the rejections
    pub fn into_parts(self) -> (Vec<TypeGroup>, Vec<Error>) {
        (self.groups, self.rejected)
    }

    /// Flat leaf list in display order, each paired with its group label
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &InvocationRef)> {
        self.groups
            .iter()
            .flat_map(|g| g.invocations().map(move |inv| (g.label(), inv)))
    }

    /// Total number of leaves
    pub fn leaf_count(&self) -> usize {
        self.groups.iter().map(TypeGroup::len).sum()
    }
}

/// Groups and orders classified entries
pub struct MenuGrouper<'a> {
    translator: &'a dyn TypeTranslator,
}

impl<'a> MenuGrouper<'a> {
    pub fn new(translator: &'a dyn TypeTranslator) -> Self {
        Self { translator }
    }

    /// Group `(entry, raw type)` pairs.
    ///
    /// Entries without an invocation mechanism are left out of every group and
    /// reported in [`GroupedMenu::rejected`]. Duplicate display labels are kept
    /// as separate leaves.
    pub fn group<I>(&self, entries: I) -> GroupedMenu
    where
        I: IntoIterator<Item = (AlgorithmEntry, String)>,
    {
        // Keyed by the case-folded label; "Hash" and "hash" share one submenu
        let mut buckets: BTreeMap<String, (Vec<String>, Vec<GroupedEntry>)> = BTreeMap::new();
        let mut rejected = Vec::new();

        for (entry, raw_type) in entries {
            // The type is registered even when the entry is rejected below
            let label = self.translator.translate(&raw_type);
            let bucket = buckets.entry(label.to_lowercase()).or_default();
            bucket.0.push(label);

            let invocation = match InvocationRef::classify(&entry) {
                Ok(invocation) => invocation,
                Err(err) => {
                    rejected.push(err);
                    continue;
                }
            };

            bucket.1.push(GroupedEntry {
                entry_id: entry.id().to_string(),
                invocation,
            });
        }

        let mut groups: Vec<TypeGroup> = buckets
            .into_values()
            .map(|(mut spellings, mut entries)| {
                spellings.sort_by(|a, b| compare_labels(a, b));
                entries.sort_by(|a, b| {
                    compare_labels(a.invocation.label(), b.invocation.label())
                        .then_with(|| a.entry_id.cmp(&b.entry_id))
                });
                TypeGroup {
                    label: spellings.swap_remove(0),
                    entries,
                }
            })
            .collect();
        groups.sort_by(|a, b| compare_labels(&a.label, &b.label));

        GroupedMenu { groups, rejected }
    }
}
