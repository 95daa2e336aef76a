use std::collections::BTreeMap;

use crate::style::LineCategory;

/// Ordered mapping from line number to [`LineCategory`].
///
/// Used both for the raw classifier output and the resolved table. Tables
/// are owned by a single lex pass and rebuilt on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    lines: BTreeMap<usize, LineCategory>,
}

/// A maximal run of consecutive non-default lines, `begin..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub begin: usize,
    pub end: usize,
}

impl Run {
    pub fn line_count(self) -> usize {
        self.end - self.begin + 1
    }

    pub fn contains(self, line: usize) -> bool {
        (self.begin..=self.end).contains(&line)
    }

    pub fn lines(self) -> std::ops::RangeInclusive<usize> {
        self.begin..=self.end
    }
}

impl LineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `category` for `line`, replacing any earlier entry.
    pub fn insert(&mut self, line: usize, category: LineCategory) {
        self.lines.insert(line, category);
    }

    pub fn get(&self, line: usize) -> Option<LineCategory> {
        self.lines.get(&line).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first_line(&self) -> Option<usize> {
        self.lines.keys().next().copied()
    }

    pub fn last_line(&self) -> Option<usize> {
        self.lines.keys().next_back().copied()
    }

    /// Entries in ascending line order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, LineCategory)> + '_ {
        self.lines.iter().map(|(&line, &category)| (line, category))
    }

    /// Maximal runs of consecutive non-default lines, in line order.
    ///
    /// A gap in line numbering ends a run just like a default line does.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut open: Option<Run> = None;

        for (line, category) in self.iter() {
            if category.is_default() {
                runs.extend(open.take());
                continue;
            }
            open = match open {
                Some(run) if run.end + 1 == line => Some(Run { end: line, ..run }),
                other => {
                    runs.extend(other);
                    Some(Run {
                        begin: line,
                        end: line,
                    })
                }
            };
        }
        runs.extend(open);
        runs
    }
}

impl FromIterator<(usize, LineCategory)> for LineTable {
    fn from_iter<I: IntoIterator<Item = (usize, LineCategory)>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
