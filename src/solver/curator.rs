//! Result curation: deduplication, ranking, and sorted views
//!
//! Turns raw walker output into the three orderings shown to the user. Every
//! step is a pure function of its input, so re-running it on the same
//! occurrences yields identical views.

use crate::core::{Occurrence, Rank, RankedResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

/// Length of words shown in the five-letter view
pub const FIVE_LETTER_LEN: usize = 5;

/// What counts as a duplicate occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    /// Same word along the same path (every way to trace a word is kept)
    #[default]
    Path,
    /// Same word, whatever the path; keeps the least path in row-major order
    Word,
}

/// Word → frequency rank lookup
#[derive(Debug, Clone, Default)]
pub struct RankTable {
    ranks: FxHashMap<String, Rank>,
}

impl RankTable {
    /// Build a table from a frequency ordering, most common first
    ///
    /// A word's rank is its position in `frequency_order`. Words missing from
    /// `dictionary` are ignored. A word listed twice keeps its last position.
    pub fn new<F, D>(frequency_order: F, dictionary: D) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let dictionary: FxHashSet<String> = dictionary
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        let mut ranks = FxHashMap::default();
        for (position, word) in frequency_order.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if dictionary.contains(&word) {
                ranks.insert(word, Rank::new(position));
            }
        }

        Self { ranks }
    }

    /// Rank of `word`, `UNRANKED` when absent
    #[must_use]
    pub fn get(&self, word: &str) -> Rank {
        self.ranks.get(word).copied().unwrap_or(Rank::UNRANKED)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Collapse duplicate occurrences
///
/// In `Path` mode the first appearance of each (word, path) pair is kept, in
/// input order. In `Word` mode one occurrence per word survives: the one with
/// the least path, so the choice does not depend on walk order.
#[must_use]
pub fn dedup(raw: Vec<Occurrence>, mode: DedupMode) -> Vec<Occurrence> {
    match mode {
        DedupMode::Path => {
            let mut seen: FxHashSet<Occurrence> = FxHashSet::default();
            raw.into_iter()
                .filter(|occurrence| seen.insert(occurrence.clone()))
                .collect()
        }
        DedupMode::Word => {
            let mut best: FxHashMap<String, Occurrence> = FxHashMap::default();
            for occurrence in raw {
                match best.get_mut(&occurrence.word) {
                    Some(kept) if occurrence.path < kept.path => *kept = occurrence,
                    Some(_) => {}
                    None => {
                        best.insert(occurrence.word.clone(), occurrence);
                    }
                }
            }
            best.into_values().collect()
        }
    }
}

/// Attach each occurrence's frequency rank
#[must_use]
pub fn attach_rank(occurrences: Vec<Occurrence>, ranks: &RankTable) -> Vec<RankedResult> {
    occurrences
        .into_iter()
        .map(|occurrence| {
            let rank = ranks.get(&occurrence.word);
            RankedResult::new(occurrence, rank)
        })
        .collect()
}

/// The three result orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Longest first, then most common, then alphabetical
    AllWords,
    /// Shortest first, then most common, then alphabetical
    SmallestFirst,
    /// Five-letter words only, most common first
    FiveLetter,
}

impl ViewKind {
    pub const ALL: [Self; 3] = [Self::AllWords, Self::SmallestFirst, Self::FiveLetter];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AllWords => "All Words",
            Self::SmallestFirst => "Smallest to Largest",
            Self::FiveLetter => "5-Letter Words",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::AllWords => 0,
            Self::SmallestFirst => 1,
            Self::FiveLetter => 2,
        }
    }

    /// Next view, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::AllWords => Self::SmallestFirst,
            Self::SmallestFirst => Self::FiveLetter,
            Self::FiveLetter => Self::AllWords,
        }
    }

    /// Previous view, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::AllWords => Self::FiveLetter,
            Self::SmallestFirst => Self::AllWords,
            Self::FiveLetter => Self::SmallestFirst,
        }
    }

    /// Parse a CLI view name: "all", "small", "five" (and the long forms)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" | "all-words" => Some(Self::AllWords),
            "small" | "smallest" | "smallest-first" => Some(Self::SmallestFirst),
            "five" | "5" | "five-letter" => Some(Self::FiveLetter),
            _ => None,
        }
    }
}

/// Sorted projections of one ranked-result set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Views {
    pub all_words: Vec<RankedResult>,
    pub smallest_first: Vec<RankedResult>,
    pub five_letter: Vec<RankedResult>,
}

impl Views {
    /// Sort `results` into the three views
    ///
    /// Ties left by each view's keys are broken by word, then path.
    #[must_use]
    pub fn build(results: &[RankedResult]) -> Self {
        let mut all_words = results.to_vec();
        all_words.sort_by(|a, b| {
            (Reverse(a.len()), a.rank, a.word(), a.path())
                .cmp(&(Reverse(b.len()), b.rank, b.word(), b.path()))
        });

        let mut smallest_first = results.to_vec();
        smallest_first.sort_by(|a, b| {
            (a.len(), a.rank, a.word(), a.path()).cmp(&(b.len(), b.rank, b.word(), b.path()))
        });

        let mut five_letter: Vec<RankedResult> = results
            .iter()
            .filter(|r| r.len() == FIVE_LETTER_LEN)
            .cloned()
            .collect();
        five_letter.sort_by(|a, b| (a.rank, a.word(), a.path()).cmp(&(b.rank, b.word(), b.path())));

        Self {
            all_words,
            smallest_first,
            five_letter,
        }
    }

    #[must_use]
    pub fn get(&self, kind: ViewKind) -> &[RankedResult] {
        match kind {
            ViewKind::AllWords => &self.all_words,
            ViewKind::SmallestFirst => &self.smallest_first,
            ViewKind::FiveLetter => &self.five_letter,
        }
    }

    /// Number of results (every view but the five-letter one holds them all)
    #[must_use]
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

/// Dedup, rank, and sort in one pass
#[must_use]
pub fn curate(raw: Vec<Occurrence>, ranks: &RankTable, mode: DedupMode) -> Views {
    let ranked = attach_rank(dedup(raw, mode), ranks);
    Views::build(&ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Path};

    fn occ(word: &str, pairs: &[(usize, usize)]) -> Occurrence {
        Occurrence::new(
            word.to_string(),
            Path::new(pairs.iter().map(|&(r, c)| Coord::new(r, c)).collect()),
        )
    }

    fn sample() -> Vec<Occurrence> {
        vec![
            occ("cat", &[(0, 0), (0, 1), (0, 2)]),
            occ("cats", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
            occ("sat", &[(0, 3), (0, 1), (0, 2)]),
            occ("crate", &[(0, 0), (1, 0), (0, 1), (0, 2), (1, 2)]),
            occ("cat", &[(0, 0), (1, 1), (0, 2)]),
            occ("caste", &[(0, 0), (0, 1), (1, 1), (0, 2), (1, 2)]),
        ]
    }

    fn words(results: &[RankedResult]) -> Vec<&str> {
        results.iter().map(RankedResult::word).collect()
    }

    #[test]
    fn rank_table_uses_position_and_ignores_unknown_words() {
        let table = RankTable::new(["the", "cats", "cat"], ["cat", "cats"]);
        assert_eq!(table.get("cats"), Rank::new(1));
        assert_eq!(table.get("cat"), Rank::new(2));
        assert_eq!(table.get("the"), Rank::UNRANKED);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rank_table_repeat_keeps_last_position() {
        let table = RankTable::new(["cat", "dog", "cat"], ["cat", "dog"]);
        assert_eq!(table.get("cat"), Rank::new(2));
    }

    #[test]
    fn rank_table_empty() {
        let table = RankTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get("cat"), Rank::UNRANKED);
    }

    #[test]
    fn dedup_collapses_exact_duplicates() {
        let mut raw = sample();
        raw.extend(sample());
        let unique = dedup(raw, DedupMode::Path);
        assert_eq!(unique, sample());
    }

    #[test]
    fn dedup_path_mode_keeps_alternate_paths() {
        let unique = dedup(sample(), DedupMode::Path);
        assert_eq!(unique.iter().filter(|o| o.word == "cat").count(), 2);
    }

    #[test]
    fn dedup_word_mode_keeps_least_path() {
        let mut unique = dedup(sample(), DedupMode::Word);
        unique.sort();
        let cats: Vec<&Occurrence> = unique.iter().filter(|o| o.word == "cat").collect();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].path, occ("cat", &[(0, 0), (0, 1), (0, 2)]).path);

        // Independent of input order
        let mut reversed = sample();
        reversed.reverse();
        let mut again = dedup(reversed, DedupMode::Word);
        again.sort();
        assert_eq!(unique, again);
    }

    #[test]
    fn attach_rank_marks_missing_words_unranked() {
        let table = RankTable::new(["cat"], ["cat", "sat"]);
        let ranked = attach_rank(sample(), &table);
        assert_eq!(ranked[0].rank, Rank::new(0));
        assert_eq!(ranked[2].rank, Rank::UNRANKED);
    }

    #[test]
    fn all_words_view_longest_first() {
        let table = RankTable::new(["caste", "cat", "crate", "sat"], ["cat", "caste", "crate", "sat", "cats"]);
        let views = curate(sample(), &table, DedupMode::Path);
        assert_eq!(words(&views.all_words), vec!["caste", "crate", "cats", "cat", "cat", "sat"]);
    }

    #[test]
    fn smallest_first_view_shortest_first() {
        let table = RankTable::new(["sat", "cat"], ["cat", "sat"]);
        let views = curate(sample(), &table, DedupMode::Path);
        assert_eq!(
            words(&views.smallest_first),
            vec!["sat", "cat", "cat", "cats", "caste", "crate"]
        );
    }

    #[test]
    fn five_letter_view_filters_and_ranks() {
        let table = RankTable::new(["crate", "caste"], ["crate", "caste"]);
        let views = curate(sample(), &table, DedupMode::Path);
        assert_eq!(words(&views.five_letter), vec!["crate", "caste"]);
        assert!(views.five_letter.iter().all(|r| r.len() == FIVE_LETTER_LEN));
    }

    #[test]
    fn views_hold_same_multiset() {
        let views = curate(sample(), &RankTable::default(), DedupMode::Path);
        let mut all = views.all_words.clone();
        let mut small = views.smallest_first.clone();
        all.sort_by(|a, b| a.occurrence.cmp(&b.occurrence));
        small.sort_by(|a, b| a.occurrence.cmp(&b.occurrence));
        assert_eq!(all, small);

        let fives: Vec<&RankedResult> = views.all_words.iter().filter(|r| r.len() == 5).collect();
        assert_eq!(fives.len(), views.five_letter.len());
    }

    #[test]
    fn curation_is_idempotent() {
        let table = RankTable::new(["cat", "sat"], ["cat", "sat"]);
        let first = curate(sample(), &table, DedupMode::Path);
        let second = curate(sample(), &table, DedupMode::Path);
        assert_eq!(first, second);

        let mut shuffled = sample();
        shuffled.rotate_left(2);
        assert_eq!(first, curate(shuffled, &table, DedupMode::Path));
    }

    #[test]
    fn view_kind_cycles() {
        for kind in ViewKind::ALL {
            assert_eq!(kind.next().previous(), kind);
            assert_eq!(ViewKind::ALL[kind.index()], kind);
        }
        assert_eq!(ViewKind::from_name("five"), Some(ViewKind::FiveLetter));
        assert_eq!(ViewKind::from_name("nope"), None);
    }

    #[test]
    fn empty_input_gives_empty_views() {
        let views = curate(Vec::new(), &RankTable::default(), DedupMode::Path);
        assert!(views.is_empty());
        assert!(views.five_letter.is_empty());
    }
}
