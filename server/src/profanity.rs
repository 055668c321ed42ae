/// Banned-term matcher for player names.
///
/// Terms are normalized once when the set is built. Each candidate is
/// normalized into two views before the containment test:
///
/// - `spaced`: lowercase tokens joined by single spaces. Catches exact
///   tokens, terms embedded in longer tokens, and multi-word phrases.
/// - `collapsed`: like `spaced`, but every run of two or more single-character
///   tokens is glued into one word, so `"f u c k"` reads as `"fuck"`.
///
/// Only single-character runs are glued, so ordinary multi-word names keep
/// their word boundaries.
#[derive(Debug, Clone, Default)]
pub struct BannedWords {
    terms: Vec<String>,
}

impl BannedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = words
            .into_iter()
            .map(|w| normalize_term(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        terms.sort();
        terms.dedup();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when any banned term appears in `candidate`, in plain or
    /// letter-spaced form. Case-insensitive.
    pub fn matches(&self, candidate: &str) -> bool {
        let tokens = tokenize(candidate);
        if tokens.is_empty() {
            return false;
        }

        let spaced = tokens.join(" ");
        let collapsed = collapse_single_letters(&tokens);
        self.terms
            .iter()
            .any(|term| spaced.contains(term.as_str()) || collapsed.contains(term.as_str()))
    }
}

fn normalize_term(word: &str) -> String {
    tokenize(word).join(" ")
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_ascii_lowercase())
        .collect()
}

/// Glue runs of single-character tokens: `["mother", "f", "u", "c", "k"]`
/// becomes `"mother fuck"`. A lone single-character token stays separate.
fn collapse_single_letters(tokens: &[String]) -> String {
    let mut words: Vec<String> = Vec::with_capacity(tokens.len());
    let mut run = String::new();

    for token in tokens {
        if token.chars().count() == 1 {
            run.push_str(token);
            continue;
        }
        if !run.is_empty() {
            words.push(std::mem::take(&mut run));
        }
        words.push(token.clone());
    }
    if !run.is_empty() {
        words.push(run);
    }

    words.join(" ")
}
