//! Regrouping and sorting of the user section.
//!
//! Entries are grouped under the comments that precede them. A comment that
//! follows a path opens a new group; consecutive comments share one group.
//! Blank lines are dropped and re-emitted canonically between groups.

use crate::document::Document;
use crate::entry::Entry;

/// Options for [`Document::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    /// Sort paths case-insensitively within each group.
    pub sort_paths: bool,
    /// Sort groups case-insensitively by their comments.
    pub sort_groups: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            sort_paths: true,
            sort_groups: false,
        }
    }
}

#[derive(Debug, Default)]
struct Group {
    comments: Vec<String>,
    paths: Vec<String>,
}

impl Group {
    fn sort_key(&self) -> (bool, String) {
        // Comment-only groups stay behind the others; moving one in front of a
        // group would merge the two headings on the next sort.
        (self.paths.is_empty(), self.comments.join("\n").to_lowercase())
    }
}

impl Document {
    /// Regroup and reorder the user entries.
    ///
    /// The result starts with a blank line separating it from the generated
    /// section and has one blank line between groups. Sorting is idempotent.
    pub fn sort(&mut self, options: SortOptions) {
        let mut groups = group_entries(&self.entries);

        if options.sort_groups {
            groups.sort_by_cached_key(Group::sort_key);
        }

        let mut entries = vec![Entry::Blank];
        for mut group in groups {
            if options.sort_paths {
                group.paths.sort_by_cached_key(|path| path.to_lowercase());
            }
            entries.extend(group.comments.into_iter().map(Entry::Comment));
            entries.extend(group.paths.into_iter().map(Entry::Path));
            entries.push(Entry::Blank);
        }

        if entries.last().is_some_and(Entry::is_blank) {
            entries.pop();
        }

        tracing::debug!(entries = entries.len(), ?options, "Sorted user entries");
        self.entries = entries;
    }

    /// Whether [`Document::sort`] with `options` would leave the entries unchanged.
    pub fn is_sorted(&self, options: SortOptions) -> bool {
        let mut sorted = Document::with_entries(self.entries.clone());
        sorted.sort(options);
        sorted.entries == self.entries
    }
}

fn group_entries(entries: &[Entry]) -> Vec<Group> {
    let mut groups = vec![Group::default()];

    for entry in entries {
        match entry {
            Entry::Path(path) => {
                if let Some(current) = groups.last_mut() {
                    current.paths.push(path.clone());
                }
            }
            Entry::Comment(comment) => match groups.last_mut() {
                Some(current) if current.paths.is_empty() => {
                    current.comments.push(comment.clone());
                }
                _ => groups.push(Group {
                    comments: vec![comment.clone()],
                    paths: Vec::new(),
                }),
            },
            Entry::Blank => {}
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries(doc: &Document) -> Vec<String> {
        doc.entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn sorts_paths_within_groups() {
        let mut doc = Document::parse("# Section A\nfoo\nbar\n# Section B\nbaz\n").unwrap();
        doc.sort(SortOptions::default());

        assert_eq!(
            doc.entries,
            vec![
                Entry::Blank,
                Entry::comment("Section A"),
                Entry::path("bar"),
                Entry::path("foo"),
                Entry::Blank,
                Entry::comment("Section B"),
                Entry::path("baz"),
            ]
        );
    }

    #[test]
    fn path_sort_is_case_insensitive_and_stable() {
        let mut doc = Document::parse("b\nA\na\nB\n").unwrap();
        doc.sort(SortOptions::default());
        assert_eq!(entries(&doc), vec!["", "A", "a", "b", "B"]);
    }

    #[test]
    fn consecutive_comments_share_a_group() {
        let mut doc = Document::parse("# One\n\n# Two\nx\n# Three\ny\n").unwrap();
        doc.sort(SortOptions::default());
        assert_eq!(entries(&doc), vec!["", "# One", "# Two", "x", "", "# Three", "y"]);
    }

    #[test]
    fn sort_paths_disabled_keeps_order() {
        let mut doc = Document::parse("z\n\n\na\n").unwrap();
        doc.sort(SortOptions {
            sort_paths: false,
            sort_groups: false,
        });
        assert_eq!(entries(&doc), vec!["", "z", "a"]);
    }

    #[test]
    fn sort_groups_orders_by_comments() {
        let mut doc = Document::parse("loose\n# beta\nb\n# Alpha\na\n").unwrap();
        doc.sort(SortOptions {
            sort_paths: true,
            sort_groups: true,
        });
        assert_eq!(
            entries(&doc),
            vec!["", "loose", "", "# Alpha", "a", "", "# beta", "b"]
        );
    }

    #[test]
    fn sort_groups_keeps_trailing_comment_group_last() {
        let mut doc = Document::parse("# B\nx\n# A\n").unwrap();
        let options = SortOptions {
            sort_paths: true,
            sort_groups: true,
        };
        doc.sort(options);
        assert_eq!(entries(&doc), vec!["", "# B", "x", "", "# A"]);
        assert!(doc.is_sorted(options));
    }

    #[test]
    fn empty_document_sorts_to_single_blank() {
        let mut doc = Document::new();
        doc.sort(SortOptions::default());
        assert_eq!(doc.entries, vec![Entry::Blank]);
    }

    #[test]
    fn is_sorted_detects_unsorted_entries() {
        let doc = Document::parse("\nb\na\n").unwrap();
        assert!(!doc.is_sorted(SortOptions::default()));

        let mut sorted = doc.clone();
        sorted.sort(SortOptions::default());
        assert!(sorted.is_sorted(SortOptions::default()));
    }
}
