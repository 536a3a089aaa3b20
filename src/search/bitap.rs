//! Approximate substring matching with the bitap (shift-or) algorithm.
//!
//! A [`Pattern`] is compiled once per query and then scored against many field
//! values. The cost of a match combines how many edits it needed with how far
//! from the expected location it starts:
//!
//! ```text
//! cost = errors / pattern_len + |location - position| / distance
//! ```
//!
//! so `0.0` is an exact match at the expected location and anything above the
//! threshold is discarded. Matching is case-insensitive.

use crate::config::SearchOptions;
use std::collections::HashMap;

/// Longest pattern the 64-bit state masks can represent.
pub(crate) const MAX_PATTERN_LEN: usize = 64;

/// The subset of [`SearchOptions`] that shapes a single field match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BitapOptions {
    pub(crate) threshold: f64,
    pub(crate) location: usize,
    pub(crate) distance: usize,
}

impl From<&SearchOptions> for BitapOptions {
    fn from(options: &SearchOptions) -> Self {
        Self {
            threshold: options.threshold,
            location: options.location,
            distance: options.distance,
        }
    }
}

impl Default for BitapOptions {
    fn default() -> Self {
        Self::from(&SearchOptions::default())
    }
}

/// A lower-cased query compiled into per-character bit masks.
#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    text: String,
    chars: Vec<char>,
    /// For each character, the bits of the pattern positions it occupies.
    /// Position `i` maps to bit `len - i - 1`. Empty for over-long patterns.
    alphabet: HashMap<char, u64>,
}

impl Pattern {
    pub(crate) fn new(query: &str) -> Self {
        let text = query.to_lowercase();
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();

        let mut alphabet = HashMap::new();
        if len <= MAX_PATTERN_LEN {
            for (i, c) in chars.iter().enumerate() {
                *alphabet.entry(*c).or_insert(0u64) |= 1u64 << (len - i - 1);
            }
        }

        Self {
            text,
            chars,
            alphabet,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Cost of the best match of this pattern in `text`, or `None` when no
    /// match stays within the threshold.
    pub(crate) fn cost(&self, text: &str, options: &BitapOptions) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let lowered = text.to_lowercase();
        if lowered == self.text {
            return Some(0.0);
        }

        let text: Vec<char> = lowered.chars().collect();
        if self.chars.len() > MAX_PATTERN_LEN {
            return self.exact_cost(&text, options);
        }
        self.search(&text, options)
    }

    fn score(&self, errors: usize, position: usize, options: &BitapOptions) -> f64 {
        let accuracy = errors as f64 / self.chars.len() as f64;
        let proximity = options.location.abs_diff(position);

        if options.distance == 0 {
            return if proximity == 0 { accuracy } else { 1.0 };
        }
        accuracy + proximity as f64 / options.distance as f64
    }

    /// Fallback for patterns too long for the bit masks: exact occurrences only.
    fn exact_cost(&self, text: &[char], options: &BitapOptions) -> Option<f64> {
        [
            find_from(text, &self.chars, options.location),
            rfind_until(text, &self.chars, options.location),
        ]
        .into_iter()
        .flatten()
        .map(|position| self.score(0, position, options))
        .filter(|cost| *cost <= options.threshold)
        .min_by(f64::total_cmp)
    }

    fn search(&self, text: &[char], options: &BitapOptions) -> Option<f64> {
        let pattern_len = self.chars.len();
        let location = options.location;
        let mut threshold = options.threshold;

        // Exact occurrences near the expected location tighten the threshold
        // before the error levels are explored.
        if let Some(position) = find_from(text, &self.chars, location) {
            threshold = threshold.min(self.score(0, position, options));
            if let Some(position) = rfind_until(text, &self.chars, location + pattern_len) {
                threshold = threshold.min(self.score(0, position, options));
            }
        }

        let match_bit = 1u64 << (pattern_len - 1);
        let mut best_position = None;
        let mut last_bits: Vec<u64> = Vec::new();
        let mut bin_max = pattern_len + text.len();

        for errors in 0..pattern_len {
            // Binary search for how far from `location` a match with this many
            // errors could still be under the threshold.
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if self.score(errors, location + bin_mid, options) <= threshold {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            bin_max = bin_mid;

            let mut start = (location + 1).saturating_sub(bin_mid).max(1);
            let finish = (location + bin_mid).min(text.len()) + pattern_len;

            let mut bits = vec![0u64; finish + 2];
            bits[finish + 1] = (1u64 << errors) - 1;

            let mut j = finish;
            while j >= start {
                let position = j - 1;
                let char_match = text
                    .get(position)
                    .and_then(|c| self.alphabet.get(c))
                    .copied()
                    .unwrap_or(0);

                bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
                if errors > 0 {
                    let previous = |k: usize| last_bits.get(k).copied().unwrap_or(0);
                    bits[j] |= (((previous(j + 1) | previous(j)) << 1) | 1) | previous(j + 1);
                }

                if bits[j] & match_bit != 0 {
                    let cost = self.score(errors, position, options);
                    if cost <= threshold {
                        threshold = cost;
                        best_position = Some(position);
                        if position <= location {
                            break;
                        }
                        // Matches further right than this one can only score worse.
                        start = (2 * location).saturating_sub(position).max(1);
                    }
                }
                j -= 1;
            }

            // No match with one more error can beat the current best.
            if self.score(errors + 1, location, options) > threshold {
                break;
            }
            last_bits = bits;
        }

        best_position.map(|_| threshold)
    }
}

/// First index `>= from` where `needle` occurs in `haystack`.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..].starts_with(needle))
}

/// Last index `<= until` where `needle` occurs in `haystack`.
fn rfind_until(haystack: &[char], needle: &[char], until: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let last = (haystack.len() - needle.len()).min(until);
    (0..=last).rev().find(|&i| haystack[i..].starts_with(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn cost(query: &str, text: &str) -> Option<f64> {
        Pattern::new(query).cost(text, &BitapOptions::default())
    }

    #[rstest]
    #[case("loadurl", "loadURL")]
    #[case("BrowserWindow", "browserwindow")]
    #[case("CLOSED", "closed")]
    fn test_case_insensitive_equality_is_free(#[case] query: &str, #[case] text: &str) {
        check!(cost(query, text) == Some(0.0));
    }

    #[rstest]
    #[case("close", "closed", 0.0)]
    #[case("close", "window-all-closed", 0.11)]
    #[case("window", "getAllWindows", 0.06)]
    fn test_substring_cost_is_proximity(
        #[case] query: &str,
        #[case] text: &str,
        #[case] expected: f64,
    ) {
        let options = BitapOptions {
            threshold: 1.0,
            ..BitapOptions::default()
        };
        let actual = Pattern::new(query).cost(text, &options).unwrap();
        check!((actual - expected).abs() < 1e-9, "{} in {}: {}", query, text, actual);
    }

    #[test]
    fn test_far_substring_exceeds_threshold() {
        // "close" starts at offset 13, costing 0.13 > 0.1.
        check!(cost("close", "Emitted when closed.").is_none());
    }

    #[rstest]
    #[case("setbackgroundcolr", "setBackgroundColor")] // deletion
    #[case("setbackgroundcoloor", "setBackgroundColor")] // insertion
    #[case("setbackgroumdcolor", "setBackgroundColor")] // substitution
    fn test_single_typo_in_long_pattern(#[case] query: &str, #[case] text: &str) {
        let actual = cost(query, text);
        check!(actual.is_some(), "{} should fuzzily match {}", query, text);
        let actual = actual.unwrap();
        check!(actual > 0.0);
        check!(actual <= 0.1);
    }

    #[rstest]
    #[case("zzzzz", "BrowserWindow")]
    #[case("loadurl", "Loads the given URL.")]
    #[case("quti", "quit")] // four characters leave no room for an error
    fn test_no_match(#[case] query: &str, #[case] text: &str) {
        check!(cost(query, text).is_none());
    }

    #[test]
    fn test_empty_inputs() {
        check!(cost("", "anything").is_none());
        check!(cost("abc", "").is_none());
    }

    #[test]
    fn test_errors_allowed_grow_with_threshold() {
        let loose = BitapOptions {
            threshold: 0.4,
            ..BitapOptions::default()
        };
        check!(Pattern::new("quti").cost("quit", &loose).is_some());
    }

    #[test]
    fn test_zero_distance_requires_expected_location() {
        let options = BitapOptions {
            threshold: 0.5,
            location: 0,
            distance: 0,
        };
        check!(Pattern::new("menu").cost("menubar", &options) == Some(0.0));
        check!(Pattern::new("menu").cost("appmenu", &options).is_none());
    }

    #[test]
    fn test_long_pattern_falls_back_to_exact_search() {
        let query = "a".repeat(MAX_PATTERN_LEN + 1);
        let text = format!("{}b", query);
        check!(cost(&query, &text) == Some(0.0));
        check!(cost(&query, &"a".repeat(MAX_PATTERN_LEN)).is_none());
    }

    #[rstest]
    #[case("abcabc", "abc", 0, Some(0))]
    #[case("abcabc", "abc", 1, Some(3))]
    #[case("abcabc", "abd", 0, None)]
    #[case("ab", "abc", 0, None)]
    fn test_find_from(
        #[case] haystack: &str,
        #[case] needle: &str,
        #[case] from: usize,
        #[case] expected: Option<usize>,
    ) {
        let haystack: Vec<char> = haystack.chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        check!(find_from(&haystack, &needle, from) == expected);
    }

    #[rstest]
    #[case("abcabc", "abc", 10, Some(3))]
    #[case("abcabc", "abc", 2, Some(0))]
    #[case("xxabc", "abc", 1, None)]
    fn test_rfind_until(
        #[case] haystack: &str,
        #[case] needle: &str,
        #[case] until: usize,
        #[case] expected: Option<usize>,
    ) {
        let haystack: Vec<char> = haystack.chars().collect();
        let needle: Vec<char> = needle.chars().collect();
        check!(rfind_until(&haystack, &needle, until) == expected);
    }
}
