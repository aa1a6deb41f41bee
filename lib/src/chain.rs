use crate::archive::CandidateWord;
use crate::letters::*;
use crate::results::LetterBoxedError;
use std::cmp::Ordering;
use std::result::Result;
use std::sync::Arc;

/// One word in a chain, along with the letters it newly covered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordLink {
    start_letter: Letter,
    end_letter: Letter,
    word: Arc<CandidateWord>,
    added_coverage: LetterMask,
}

impl WordLink {
    /// Creates a link for `word` appended to a chain that had already covered `previous`.
    pub fn new(word: Arc<CandidateWord>, previous: LetterMask) -> WordLink {
        WordLink {
            start_letter: word.first_letter(),
            end_letter: word.last_letter(),
            added_coverage: word.coverage().difference(previous),
            word,
        }
    }

    pub fn start_letter(&self) -> Letter {
        self.start_letter
    }

    pub fn end_letter(&self) -> Letter {
        self.end_letter
    }

    pub fn word(&self) -> &CandidateWord {
        &self.word
    }

    /// The letters this word covered that no earlier word in the chain had covered.
    pub fn added_coverage(&self) -> LetterMask {
        self.added_coverage
    }
}

/// Identifies a node in a [`ChainArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(usize);

/// A sequence of words where each word starts with the letter the previous word ended with.
///
/// A `WordChain` is a small value that points at its last word in a [`ChainArena`]. Extending a
/// chain never changes it, so any number of longer chains can share it as a prefix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordChain {
    tip: Option<ChainId>,
    end_letter: Letter,
    coverage: LetterMask,
    word_count: usize,
    letter_count: usize,
}

impl WordChain {
    /// A chain with no words, no coverage, and no end letter.
    pub fn empty() -> WordChain {
        WordChain {
            tip: None,
            end_letter: Letter::NONE,
            coverage: LetterMask::EMPTY,
            word_count: 0,
            letter_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tip.is_none()
    }

    /// The last letter of the last word, or [`Letter::NONE`] for an empty chain.
    pub fn end_letter(&self) -> Letter {
        self.end_letter
    }

    /// The letters used by any word in the chain.
    pub fn coverage(&self) -> LetterMask {
        self.coverage
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The total number of letters across all words, counting repeats.
    pub fn letter_count(&self) -> usize {
        self.letter_count
    }
}

#[derive(Debug)]
struct ChainNode {
    parent: Option<ChainId>,
    link: WordLink,
}

/// Append-only storage for the words of many chains that share prefixes.
///
/// Chains passed to an arena's methods must have been produced by that same arena.
#[derive(Debug, Default)]
pub struct ChainArena {
    nodes: Vec<ChainNode>,
}

impl ChainArena {
    pub fn new() -> ChainArena {
        ChainArena { nodes: Vec::new() }
    }

    /// The number of words stored across all chains.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a new chain with `word` appended to `chain`. `chain` itself is unchanged.
    ///
    /// Fails with [`LetterBoxedError::ChainBreak`] if `chain` is not empty and `word` does not
    /// start with the chain's end letter.
    ///
    /// ```
    /// use letter_boxed_solver::SideLetters;
    /// use letter_boxed_solver::details::*;
    /// use std::sync::Arc;
    ///
    /// let board = SideLetters::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// let leg = Arc::new(CandidateWord::new("leg", &board).unwrap());
    /// let gal = Arc::new(CandidateWord::new("gal", &board).unwrap());
    ///
    /// let mut arena = ChainArena::new();
    /// let chain = arena.extend(&WordChain::empty(), &leg).unwrap();
    /// let longer = arena.extend(&chain, &gal).unwrap();
    ///
    /// assert_eq!(chain.word_count(), 1);
    /// assert_eq!(longer.coverage().to_string(), "aegl");
    /// assert_eq!(arena.words(&longer), vec!["leg", "gal"]);
    /// assert!(arena.extend(&longer, &gal).is_err());
    /// ```
    pub fn extend(
        &mut self,
        chain: &WordChain,
        word: &Arc<CandidateWord>,
    ) -> Result<WordChain, LetterBoxedError> {
        if !chain.is_empty() && word.first_letter() != chain.end_letter {
            return Err(LetterBoxedError::ChainBreak {
                expected: chain.end_letter,
                found: word.first_letter(),
            });
        }
        let id = ChainId(self.nodes.len());
        self.nodes.push(ChainNode {
            parent: chain.tip,
            link: WordLink::new(Arc::clone(word), chain.coverage),
        });
        Ok(WordChain {
            tip: Some(id),
            end_letter: word.last_letter(),
            coverage: chain.coverage | word.coverage(),
            word_count: chain.word_count + 1,
            letter_count: chain.letter_count + word.len(),
        })
    }

    /// The links of the given chain, from first word to last.
    pub fn links(&self, chain: &WordChain) -> Vec<&WordLink> {
        let mut links = Vec::with_capacity(chain.word_count);
        let mut maybe_id = chain.tip;
        while let Some(id) = maybe_id {
            let node = &self.nodes[id.0];
            links.push(&node.link);
            maybe_id = node.parent;
        }
        links.reverse();
        links
    }

    /// The words of the given chain, from first to last.
    pub fn words(&self, chain: &WordChain) -> Vec<&str> {
        self.links(chain)
            .into_iter()
            .map(|link| link.word().as_str())
            .collect()
    }

    /// Compares two chains' word sequences alphabetically, word by word.
    pub fn cmp_words(&self, a: &WordChain, b: &WordChain) -> Ordering {
        if a.tip == b.tip {
            return Ordering::Equal;
        }
        self.words(a).cmp(&self.words(b))
    }
}
