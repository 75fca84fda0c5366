//! Neighbor-count sets and the [`RuleSet`] transition policy.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;

/// A set of alive-neighbor counts, implemented as a dynamically-sized bitset.
///
/// Used by [`RuleSet`] to hold the survive and born count sets. Counts are
/// arbitrary non-negative integers; values exceeding any topology's maximum
/// degree are representable and simply never trigger during a step.
#[derive(Clone, Debug, Default)]
pub struct CountSet {
    bits: Vec<u64>,
}

impl CountSet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty count set.
    pub fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Insert a neighbor count into the set.
    pub fn insert(&mut self, count: u32) {
        let word = count as usize / Self::BITS_PER_WORD;
        let bit = count as usize % Self::BITS_PER_WORD;
        if word >= self.bits.len() {
            self.bits.resize(word + 1, 0);
        }
        self.bits[word] |= 1u64 << bit;
    }

    /// Check whether the set contains a neighbor count.
    pub fn contains(&self, count: u32) -> bool {
        let word = count as usize / Self::BITS_PER_WORD;
        let bit = count as usize % Self::BITS_PER_WORD;
        word < self.bits.len() && (self.bits[word] & (1u64 << bit)) != 0
    }

    /// Returns `true` if the set contains no counts.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Returns the number of counts in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the counts in the set, in ascending order.
    pub fn iter(&self) -> CountSetIter<'_> {
        CountSetIter {
            bits: &self.bits,
            word_idx: 0,
            bit_idx: 0,
        }
    }
}

impl PartialEq for CountSet {
    fn eq(&self, other: &Self) -> bool {
        let max_len = self.bits.len().max(other.bits.len());
        for i in 0..max_len {
            let a = self.bits.get(i).copied().unwrap_or(0);
            let b = other.bits.get(i).copied().unwrap_or(0);
            if a != b {
                return false;
            }
        }
        true
    }
}

impl Eq for CountSet {}

impl FromIterator<u32> for CountSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::empty();
        for count in iter {
            set.insert(count);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CountSet {
    type Item = u32;
    type IntoIter = CountSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the counts in a [`CountSet`], yielding values in ascending order.
pub struct CountSetIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    bit_idx: usize,
}

impl Iterator for CountSetIter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.bits.len() {
            let word = self.bits[self.word_idx];
            while self.bit_idx < 64 {
                let bit = self.bit_idx;
                self.bit_idx += 1;
                if word & (1u64 << bit) != 0 {
                    return Some((self.word_idx * 64 + bit) as u32);
                }
            }
            self.word_idx += 1;
            self.bit_idx = 0;
        }
        None
    }
}

/// The transition policy: which alive-neighbor counts keep a live cell
/// alive, and which bring a dead cell to life.
///
/// Immutable once constructed; the engine replaces it wholesale via
/// `set_rules`. The sets are deliberately unvalidated; counts beyond any
/// cell's maximum possible degree never trigger and are not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    survive: CountSet,
    born: CountSet,
}

impl RuleSet {
    /// Construct a rule set from explicit survive and born count sets.
    pub fn new(survive: CountSet, born: CountSet) -> Self {
        Self { survive, born }
    }

    /// Conway's Game of Life: survive on 2 or 3 neighbors, born on 3.
    pub fn classic_life() -> Self {
        Self {
            survive: [2, 3].into_iter().collect(),
            born: [3].into_iter().collect(),
        }
    }

    /// Counts at which a currently-alive cell remains alive.
    pub fn survive(&self) -> &CountSet {
        &self.survive
    }

    /// Counts at which a currently-dead cell becomes alive.
    pub fn born(&self) -> &CountSet {
        &self.born
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::classic_life()
    }
}

/// Parse one comma-separated side of a rulestring into a [`CountSet`].
///
/// An empty (or all-whitespace) side is the empty set.
fn parse_counts(side: &str) -> Result<CountSet, RuleError> {
    let side = side.trim();
    let mut set = CountSet::empty();
    if side.is_empty() {
        return Ok(set);
    }
    for entry in side.split(',') {
        let entry = entry.trim();
        let count: u32 = entry.parse().map_err(|_| RuleError::MalformedRuleString {
            detail: format!("expected a decimal neighbor count, got {entry:?}"),
        })?;
        set.insert(count);
    }
    Ok(set)
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse `"2,3/3"`-style notation: survive counts, a `/`, born counts.
    ///
    /// Either side may be empty. ASCII whitespace around entries is
    /// accepted. Anything else (a missing or repeated separator, or a
    /// non-decimal entry) is rejected.
    fn from_str(s: &str) -> Result<Self, RuleError> {
        let mut sides = s.split('/');
        let survive = sides.next().unwrap_or("");
        let born = sides.next().ok_or_else(|| RuleError::MalformedRuleString {
            detail: "missing '/' separator between survive and born counts".to_string(),
        })?;
        if sides.next().is_some() {
            return Err(RuleError::MalformedRuleString {
                detail: "more than one '/' separator".to_string(),
            });
        }
        Ok(Self {
            survive: parse_counts(survive)?,
            born: parse_counts(born)?,
        })
    }
}

impl fmt::Display for RuleSet {
    /// Render the canonical rulestring: ascending counts, no whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, count) in self.survive.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{count}")?;
        }
        write!(f, "/")?;
        for (i, count) in self.born.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{count}")?;
        }
        Ok(())
    }
}
