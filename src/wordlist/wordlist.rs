use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::trie::trie::{ImmutableTrie, Trie};
use crate::wordlist::trie::trienode::ImmutableTrieNode;

/// A dictionary loaded once and queried many times: the trie shared by every
/// lookup, plus the words bucketed by length for the longest-first scan.
pub struct Wordlist<'a> {
    builder: Trie<'a>,
    trie: ImmutableTrie<'a>,
    by_length: RefCell<BTreeMap<usize, Vec<String>>>,
    count: Cell<usize>,
}

#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> &'a str {
        match self.delimiter {
            None => line,
            Some(d) => line.split(d).nth(self.word_column.unwrap_or(0)).unwrap_or(""),
        }
    }
}

/// A word that is fully made of at least two other dictionary words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundWord {
    pub word: String,
    pub pieces: usize,
}

impl<'a> Wordlist<'a> {
    pub fn new() -> Wordlist<'a> {
        Wordlist {
            builder: Trie::new(),
            trie: ImmutableTrie::new(),
            by_length: RefCell::new(BTreeMap::new()),
            count: Cell::new(0),
        }
    }

    pub fn load_file(&'a self, filename: &str, format: FileFormat) -> usize {
        println!("Reading words from {:#?}", &filename);

        let file = File::open(filename).unwrap();
        let buf_reader = BufReader::new(file);

        let start = Instant::now();
        let mut failures: usize = 0;

        for line in buf_reader.lines() {
            match line {
                Ok(line) => {
                    let word = normalize(format.parse_line(&line));
                    if word.len() > 0 {
                        self.add(word);
                    }
                }
                Err(_e) => {
                    failures += 1;
                }
            }
        }
        self.builder.build(&self.trie);

        let count = self.count.get();
        println!("Read {} words in {}s [{} failures]",
                 count, start.elapsed().as_millis() as f64 / 1000.0, failures);
        count
    }

    pub fn load_words<'f, I>(&'a self, items: I)
        where I: IntoIterator<Item=&'f str> {
        for item in items {
            let word = normalize(item);
            if word.len() > 0 {
                self.add(word);
            }
        }
        self.builder.build(&self.trie);
    }

    fn add(&'a self, word: String) {
        self.builder.add(&word);
        self.by_length.borrow_mut()
            .entry(word.len())
            .or_insert_with(Vec::new)
            .push(word);
        self.count.set(self.count.get() + 1);
    }

    pub fn word_count(&self) -> usize {
        self.count.get()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn segment(&self, word: &str) -> Option<usize> {
        self.trie.segment(word)
    }

    /// Every word that splits into two or more other dictionary words,
    /// longest length first, load order within a length. Buckets are scanned
    /// in parallel; the indexed collect keeps results in bucket order, so the
    /// output matches [`Wordlist::find_compounds_sequential`] exactly.
    pub fn find_compounds(&self) -> Vec<CompoundWord> {
        let root = match self.trie.root.get() {
            Some(root) => root,
            None => return vec![],
        };
        let by_length = self.by_length.borrow();

        let mut compounds = vec![];
        for (_, bucket) in by_length.iter().rev() {
            let mut found: Vec<CompoundWord> = bucket.par_iter()
                .filter_map(|word| Self::as_compound(root, word))
                .collect();
            compounds.append(&mut found);
        }
        compounds
    }

    pub fn find_compounds_sequential(&self) -> Vec<CompoundWord> {
        let root = match self.trie.root.get() {
            Some(root) => root,
            None => return vec![],
        };
        let by_length = self.by_length.borrow();

        by_length.iter().rev()
            .flat_map(|(_, bucket)| bucket.iter().filter_map(|word| Self::as_compound(root, word)))
            .collect()
    }

    fn as_compound(root: &ImmutableTrieNode, word: &str) -> Option<CompoundWord> {
        match root.segment(word, 0, word.len() - 1) {
            Some(pieces) if pieces > 1 => Some(CompoundWord {
                word: word.to_string(),
                pieces,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::wordlist::{CompoundWord, FileFormat, Wordlist};

    fn compound(word: &str, pieces: usize) -> CompoundWord {
        CompoundWord { word: word.to_string(), pieces }
    }

    #[test]
    fn reports_only_words_made_of_other_words() {
        let wl = Wordlist::new();
        wl.load_words(vec!["cat", "cats", "dog", "catsdog"]);

        assert_eq!(wl.find_compounds(), vec![compound("catsdog", 2)]);
    }

    #[test]
    fn a_lone_dictionary_word_is_not_a_compound() {
        let wl = Wordlist::new();
        wl.load_words(vec!["cat"]);

        assert!(wl.find_compounds().is_empty());
        assert_eq!(wl.segment("cat"), Some(1));
    }

    #[test]
    fn longer_lengths_are_reported_first() {
        let wl = Wordlist::new();
        wl.load_words(vec!["catdogcat", "catdog", "cat", "dog"]);

        assert_eq!(wl.find_compounds(),
                   vec![compound("catdogcat", 3), compound("catdog", 2)]);
    }

    #[test]
    fn equal_lengths_keep_load_order() {
        let wl = Wordlist::new();
        wl.load_words(vec!["dogcat", "catdog", "cat", "dog"]);

        assert_eq!(wl.find_compounds(),
                   vec![compound("dogcat", 2), compound("catdog", 2)]);
    }

    #[test]
    fn two_letter_compounds_come_before_their_pieces() {
        let wl = Wordlist::new();
        wl.load_words(vec!["a", "b", "ab"]);

        assert_eq!(wl.find_compounds(), vec![compound("ab", 2)]);
    }

    #[test]
    fn parallel_and_sequential_scans_agree() {
        let pieces = vec!["cat", "dog", "rat", "bird", "fish", "worm", "one", "two"];
        let mut words: Vec<String> = pieces.iter().map(|x| x.to_string()).collect();
        for a in &pieces {
            for b in &pieces {
                words.push(format!("{}{}", a, b));
            }
        }
        words.push("catdogfishrat".to_string());
        words.push("notaconcatenation".to_string());

        let wl = Wordlist::new();
        wl.load_words(words.iter().map(|x| x.as_str()));

        let parallel = wl.find_compounds();
        let sequential = wl.find_compounds_sequential();
        assert!(!parallel.is_empty());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn loader_normalizes_and_counts() {
        let wl = Wordlist::new();
        wl.load_words(vec!["Cat", "DOG", "CATS", "cat-s-dog", ""]);

        assert_eq!(wl.word_count(), 4);
        assert!(wl.contains("cat"));
        assert!(wl.contains("dog"));
        assert!(wl.contains("cats"));
        assert!(wl.contains("catsdog"));
        assert_eq!(wl.find_compounds(), vec![compound("catsdog", 2)]);
    }

    #[test]
    fn reads_words_from_a_file() {
        let mut path = std::env::temp_dir();
        path.push("compound_finder_wordlist_test.txt");
        std::fs::write(&path, "cat\ncats\ndog\ncatsdog\n").unwrap();

        let wl = Wordlist::new();
        let count = wl.load_file(path.to_str().unwrap(), FileFormat::builder().build());

        assert_eq!(count, 4);
        assert_eq!(wl.find_compounds(), vec![compound("catsdog", 2)]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_format_picks_the_word_column() {
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        assert_eq!(format.parse_line("12\tcat\textra"), "cat");
        assert_eq!(format.parse_line("12"), "");

        let plain = FileFormat::builder().build();
        assert_eq!(plain.parse_line("cat"), "cat");
    }
}
