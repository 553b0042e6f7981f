//! Similarity engine — longest-common-substring match percentage.
//!
//! The score of two strings is built by taking their longest common
//! substring, then repeating the search on the pieces left of it and on the
//! pieces right of it, until nothing more matches. The matched character
//! count `m` turns into a percentage as `200 * m / (len(a) + len(b))`,
//! rounded down.
//!
//! # Determinism
//!
//! When several common substrings share the maximal length, the one with the
//! smallest start in the first string wins, then the smallest start in the
//! second. Because that greedy split can depend on argument order, the count
//! is taken in both orders and the larger one is used, which makes
//! [`similarity`] symmetric.
//!
//! # Resources
//!
//! Work is driven by an explicit stack of pending slice pairs instead of
//! recursion, and every LCS search reuses one pair of DP rows. Memory is
//! `O(len(b))` for the rows plus at most `O(min(len(a), len(b)))` stack
//! frames. [`SimilarityEngine`] adds an upper bound on input length so a
//! caller can refuse pathological terms before doing cubic work.

use crate::error::{Error, Result};

/// Default upper bound, in characters, on each input of
/// [`SimilarityEngine::score`].
pub const DEFAULT_MAX_TERM_CHARS: usize = 256;

/// Percentage similarity of `a` and `b`, `0..=100`.
///
/// Two empty strings score 0, as does any pair where one side is empty.
/// Characters are compared as Unicode scalar values.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    percent(&a, &b)
}

/// Number of characters matched between `a` and `b` (the larger of the two
/// argument orders).
pub fn similar_chars(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    symmetric_matches(&a, &b)
}

/// A similarity scorer with an input size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityEngine {
    max_chars: usize,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_TERM_CHARS)
    }
}

impl SimilarityEngine {
    pub fn with_limit(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Like [`similarity`], but fails with [`Error::TermTooLong`] if either
    /// input is longer than the limit.
    pub fn score(&self, a: &str, b: &str) -> Result<u8> {
        let a = self.chars_within_limit(a)?;
        let b = self.chars_within_limit(b)?;
        Ok(percent(&a, &b))
    }

    fn chars_within_limit(&self, s: &str) -> Result<Vec<char>> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() > self.max_chars {
            return Err(Error::TermTooLong {
                len: chars.len(),
                limit: self.max_chars,
            });
        }
        Ok(chars)
    }
}

fn percent(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0;
    }
    let matched = symmetric_matches(a, b);
    // matched <= min(len a, len b), so the quotient is at most 100.
    (200 * matched / total) as u8
}

fn symmetric_matches(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    matched_chars(a, b).max(matched_chars(b, a))
}

/// Half-open slice bounds into `a` and `b` still waiting to be matched.
#[derive(Debug, Clone, Copy)]
struct Pending {
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
}

/// A common substring: length and start offsets in each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Common {
    len: usize,
    a_at: usize,
    b_at: usize,
}

/// Reusable DP rows for [`longest_common`].
struct Rows {
    next: Vec<usize>,
    cur: Vec<usize>,
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut rows = Rows {
        next: Vec::with_capacity(b.len() + 1),
        cur: Vec::with_capacity(b.len() + 1),
    };
    let mut stack = vec![Pending {
        a_lo: 0,
        a_hi: a.len(),
        b_lo: 0,
        b_hi: b.len(),
    }];
    let mut total = 0;

    while let Some(p) = stack.pop() {
        if p.a_lo == p.a_hi || p.b_lo == p.b_hi {
            continue;
        }
        let Some(common) = longest_common(&a[p.a_lo..p.a_hi], &b[p.b_lo..p.b_hi], &mut rows)
        else {
            continue;
        };
        total += common.len;

        let a_at = p.a_lo + common.a_at;
        let b_at = p.b_lo + common.b_at;
        stack.push(Pending {
            a_lo: a_at + common.len,
            a_hi: p.a_hi,
            b_lo: b_at + common.len,
            b_hi: p.b_hi,
        });
        stack.push(Pending {
            a_lo: p.a_lo,
            a_hi: a_at,
            b_lo: p.b_lo,
            b_hi: b_at,
        });
    }

    total
}

/// Longest common substring of `a` and `b`, or `None` if they share no
/// character.
///
/// `next[j]` holds the common-prefix length of `a[i + 1..]` and `b[j..]`
/// while row `i` is filled in `cur`. Rows are walked from the back, so a
/// later candidate of equal length always starts earlier (in `a`, then in
/// `b`) and replaces the current best.
fn longest_common(a: &[char], b: &[char], rows: &mut Rows) -> Option<Common> {
    let n = b.len();
    rows.next.clear();
    rows.next.resize(n + 1, 0);
    rows.cur.clear();
    rows.cur.resize(n + 1, 0);

    let mut best: Option<Common> = None;
    for i in (0..a.len()).rev() {
        for j in (0..n).rev() {
            let len = if a[i] == b[j] { rows.next[j + 1] + 1 } else { 0 };
            rows.cur[j] = len;
            if len > 0 && best.map_or(true, |c| len >= c.len) {
                best = Some(Common {
                    len,
                    a_at: i,
                    b_at: j,
                });
            }
        }
        std::mem::swap(&mut rows.next, &mut rows.cur);
    }
    best
}
