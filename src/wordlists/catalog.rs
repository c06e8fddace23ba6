//! Word catalogs grouped by length
//!
//! A catalog is built once from raw lines, keeps only legal words, and must
//! cover every level length from `MIN_LENGTH` to `MAX_LENGTH`.

use super::loader::load_from_file;
use crate::core::{Dictionary, MAX_LENGTH, MIN_LENGTH, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Errors raised while building a catalog
#[derive(Debug)]
pub enum CatalogError {
    /// No legal word of `length` letters in the source
    MissingLength { length: usize, source_name: String },
    /// The source file could not be read
    Io { source_name: String, error: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLength {
                length,
                source_name,
            } => write!(f, "No words of length {length} found in {source_name}"),
            Self::Io { source_name, error } => {
                write!(f, "Failed to read {source_name}: {error}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::MissingLength { .. } => None,
        }
    }
}

/// Legal words grouped by length
///
/// Each bucket is sorted and free of duplicates. Immutable once built.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    name: String,
    buckets: FxHashMap<usize, Vec<Word>>,
}

impl WordCatalog {
    /// Build a catalog from raw lines
    ///
    /// Line terminators are stripped, illegal entries are skipped, and
    /// duplicates collapse into one entry.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingLength` naming the shortest level length
    /// with no legal words.
    ///
    /// # Examples
    /// ```
    /// use word_game::wordlists::WordCatalog;
    ///
    /// let result = WordCatalog::build("tiny.txt", ["bake", "cake"]);
    /// assert!(result.is_err()); // nothing of length 5..=13
    /// ```
    pub fn build<I, S>(name: impl Into<String>, lines: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let mut buckets: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut skipped = 0usize;

        for line in lines {
            let line = line.as_ref().trim_end_matches(['\r', '\n']);
            match Word::new(line) {
                Ok(word) => buckets.entry(word.len()).or_default().push(word),
                Err(_) => skipped += 1,
            }
        }

        for bucket in buckets.values_mut() {
            bucket.sort_unstable_by(|a, b| a.text().cmp(b.text()));
            bucket.dedup_by(|a, b| a.text() == b.text());
        }

        if let Some(length) =
            (MIN_LENGTH..=MAX_LENGTH).find(|length| buckets.get(length).is_none_or(Vec::is_empty))
        {
            return Err(CatalogError::MissingLength {
                length,
                source_name: name,
            });
        }

        let catalog = Self { name, buckets };
        debug!(source = %catalog.name, skipped, "filtered illegal entries");
        info!(source = %catalog.name, words = catalog.len(), "built word catalog");

        Ok(catalog)
    }

    /// Build a catalog from an embedded word list
    ///
    /// # Errors
    ///
    /// See [`WordCatalog::build`].
    pub fn from_slice(name: &str, slice: &[&str]) -> Result<Self, CatalogError> {
        Self::build(name, slice.iter().copied())
    }

    /// Build a catalog from a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or
    /// `CatalogError::MissingLength` as for [`WordCatalog::build`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let lines = load_from_file(path).map_err(|error| CatalogError::Io {
            source_name: source_name.clone(),
            error,
        })?;
        Self::build(source_name, lines)
    }

    /// Name of the source this catalog was built from
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All words of a given length, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Check whether `word` is in the catalog
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words_of_length(word.len())
            .binary_search_by(|w| w.text().cmp(word))
            .is_ok()
    }

    /// Pick a word of `length` letters uniformly at random
    ///
    /// Returns `None` only for lengths outside the level range.
    pub fn pick_random<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.words_of_length(length).choose(rng)
    }
}

impl Dictionary for WordCatalog {
    fn contains(&self, word: &str) -> bool {
        Self::contains(self, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// One legal word per level length, "aaaa" through "aaaaaaaaaaaaa"
    fn full_coverage() -> Vec<String> {
        (MIN_LENGTH..=MAX_LENGTH).map(|n| "a".repeat(n)).collect()
    }

    #[test]
    fn build_groups_by_length() {
        let mut lines = full_coverage();
        lines.extend(["bake".to_string(), "code".to_string(), "river".to_string()]);

        let catalog = WordCatalog::build("test", &lines).unwrap();
        let fours: Vec<&str> = catalog.words_of_length(4).iter().map(Word::text).collect();
        assert_eq!(fours, vec!["aaaa", "bake", "code"]);
        assert_eq!(catalog.words_of_length(5).len(), 2);
        assert_eq!(catalog.len(), 13);
    }

    #[test]
    fn build_collapses_duplicates() {
        let mut lines = full_coverage();
        lines.extend(["code\n", "code", "code\r\n"].map(String::from));

        let catalog = WordCatalog::build("test", &lines).unwrap();
        assert_eq!(catalog.words_of_length(4).len(), 2);
    }

    #[test]
    fn build_skips_illegal_entries() {
        let mut lines = full_coverage();
        lines.extend(
            ["Code", "co-de", "naïve", "abc", " lamp", "administration", ""].map(String::from),
        );

        let catalog = WordCatalog::build("test", &lines).unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.contains("Code"));
        assert!(!catalog.contains("lamp"));
    }

    #[test]
    fn build_reports_missing_length() {
        let lines: Vec<String> = full_coverage()
            .into_iter()
            .filter(|w| w.len() != 9)
            .collect();

        let err = WordCatalog::build("words.txt", &lines).unwrap_err();
        match &err {
            CatalogError::MissingLength {
                length,
                source_name,
            } => {
                assert_eq!(*length, 9);
                assert_eq!(source_name, "words.txt");
            }
            CatalogError::Io { .. } => panic!("unexpected error: {err}"),
        }
        assert_eq!(err.to_string(), "No words of length 9 found in words.txt");
    }

    #[test]
    fn build_reports_shortest_missing_length() {
        let err = WordCatalog::build("empty", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingLength { length: 4, .. }));
    }

    #[test]
    fn contains_checks_exact_word() {
        let mut lines = full_coverage();
        lines.push("planet".to_string());

        let catalog = WordCatalog::build("test", &lines).unwrap();
        assert!(catalog.contains("planet"));
        assert!(!catalog.contains("plane"));
        assert!(!catalog.contains("PLANET"));
        assert!(Dictionary::contains(&catalog, "planet"));
    }

    #[test]
    fn pick_random_returns_word_of_length() {
        let mut lines = full_coverage();
        lines.extend(["bake", "code", "lamp"].map(String::from));
        let catalog = WordCatalog::build("test", &lines).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for length in MIN_LENGTH..=MAX_LENGTH {
            let word = catalog.pick_random(length, &mut rng).unwrap();
            assert_eq!(word.len(), length);
            assert!(catalog.contains(word.text()));
        }
        assert!(catalog.pick_random(3, &mut rng).is_none());
        assert!(catalog.pick_random(14, &mut rng).is_none());
    }

    #[test]
    fn pick_random_reaches_every_word() {
        let mut lines = full_coverage();
        lines.extend(["bake", "code", "lamp"].map(String::from));
        let catalog = WordCatalog::build("test", &lines).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalog.pick_random(4, &mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn from_file_reads_words() -> io::Result<()> {
        let mut file = NamedTempFile::new()?;
        for word in full_coverage() {
            writeln!(file, "{word}")?;
        }
        write!(file, "garden\r\n")?;

        let catalog = WordCatalog::from_file(file.path()).unwrap();
        assert!(catalog.contains("garden"));
        assert_eq!(catalog.name(), file.path().display().to_string());
        Ok(())
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordCatalog::from_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
