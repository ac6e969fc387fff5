use std::collections::{BTreeSet, HashSet, VecDeque};

pub const PREFIXES: [&str; 3] = ["", "my", "the"];
pub const SUFFIXES: [&str; 5] = ["", "123", "!", "@", "007"];

fn leet_glyphs(c: char) -> &'static [char] {
    match c.to_ascii_lowercase() {
        'a' => &['4', '@'],
        'e' => &['3'],
        'i' => &['1'],
        'o' => &['0'],
        's' => &['5'],
        't' => &['7'],
        _ => &[],
    }
}

/// Leet variants of `word`: the word itself, then one variant per
/// (position, glyph) pair with ONLY that position substituted.
///
/// Substitutions are deliberately not combined across positions ("test"
/// yields "7est" and "tes7" but never "7es7"); the permutation space stays
/// linear in word length.
pub fn leet_variants(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut variants = vec![word.to_string()];

    for (i, &c) in chars.iter().enumerate() {
        for &glyph in leet_glyphs(c) {
            let variant: String = chars
                .iter()
                .enumerate()
                .map(|(j, &orig)| if j == i { glyph } else { orig })
                .collect();
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }

    variants
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Case and reversal forms of a base token, unchanged form first, then the
/// leet expansion of each form. Deduplicated, insertion-ordered so the
/// plainest candidates stream out earliest under tight limits.
pub fn expand_variants(token: &str) -> Vec<String> {
    let mut variants = Vec::new();

    let case_forms = [
        token.to_string(),
        token.to_lowercase(),
        token.to_uppercase(),
        capitalize(token),
        token.chars().rev().collect(),
    ];

    for form in &case_forms {
        if !variants.contains(form) {
            variants.push(form.clone());
        }
    }

    for form in case_forms {
        for variant in leet_variants(&form) {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }

    variants
}

/// Lazy stream of candidate words for a token/year set.
///
/// Owns the seen-set for its run, so every yielded word is unique. One
/// (variant, prefix, suffix) combination is expanded per step; the full
/// cartesian product is never materialized. Dropping the iterator ends the
/// run; it is not restartable.
pub struct Candidates {
    bases: Vec<String>,
    years: Vec<String>,
    seen: HashSet<String>,
    pending: VecDeque<String>,
    variants: Vec<String>,
    base_idx: usize,
    variant_idx: usize,
    combo_idx: usize,
}

pub fn generate(tokens: &BTreeSet<String>, years: &BTreeSet<String>) -> Candidates {
    Candidates {
        bases: tokens.iter().cloned().collect(),
        years: years.iter().cloned().collect(),
        seen: HashSet::new(),
        pending: VecDeque::new(),
        variants: Vec::new(),
        base_idx: 0,
        variant_idx: 0,
        combo_idx: 0,
    }
}

impl Candidates {
    /// Expands the next (variant, prefix, suffix) combination into `pending`.
    /// Returns `None` once every base is exhausted.
    fn step(&mut self) -> Option<()> {
        while self.variant_idx >= self.variants.len() {
            let base = self.bases.get(self.base_idx)?;
            self.variants = expand_variants(base);
            self.variant_idx = 0;
            self.combo_idx = 0;
            self.base_idx += 1;
        }

        let variant = &self.variants[self.variant_idx];
        let prefix = PREFIXES[self.combo_idx / SUFFIXES.len()];
        let suffix = SUFFIXES[self.combo_idx % SUFFIXES.len()];
        let word = format!("{prefix}{variant}{suffix}");

        if self.seen.insert(word.clone()) {
            self.pending.push_back(word.clone());
        }

        // Year combinations attach to the affixed word, and are attempted
        // even when the word itself was a duplicate.
        for year in &self.years {
            for candidate in [format!("{word}{year}"), format!("{year}{word}")] {
                if self.seen.insert(candidate.clone()) {
                    self.pending.push_back(candidate);
                }
            }
        }

        self.combo_idx += 1;
        if self.combo_idx >= PREFIXES.len() * SUFFIXES.len() {
            self.combo_idx = 0;
            self.variant_idx += 1;
        }

        Some(())
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(word);
            }
            self.step()?;
        }
    }
}
