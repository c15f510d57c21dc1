use crate::align::align;
use crate::normalize::{normalize, tokenize_chars, tokenize_words};

/// Metrics for a single reference/hypothesis pair.
///
/// Operation counts are word-level. `wer` is `f64::INFINITY` when the
/// reference has no words but the hypothesis does; every other input
/// yields finite rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMetrics {
    pub wer: f64,
    pub cer: f64,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
    pub total_words: usize,
    pub total_chars: usize,
    pub sentences: usize,
}

/// Metrics folded over a batch of pairs.
///
/// `wer` is micro-averaged (summed counts, divided once); `cer` is
/// macro-averaged (mean of the per-pair ratios). The asymmetry is
/// deliberate and load-bearing for downstream comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchMetrics {
    pub wer: f64,
    pub cer: f64,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
    pub total_words: usize,
    pub total_chars: usize,
    pub sentences: usize,
}

/// Score one hypothesis against one reference.
///
/// With `normalize_text` set, both strings go through [`normalize`]
/// first; otherwise words are the raw whitespace-split tokens and
/// characters the raw code points.
pub fn score_pair(reference: &str, hypothesis: &str, normalize_text: bool) -> PairMetrics {
    let (ref_text, hyp_text) = if normalize_text {
        (normalize(reference), normalize(hypothesis))
    } else {
        (reference.to_string(), hypothesis.to_string())
    };

    let ref_words = tokenize_words(&ref_text);
    let hyp_words = tokenize_words(&hyp_text);
    let total_words = ref_words.len();

    if total_words == 0 {
        // Cannot score against an empty reference except for equality.
        let wer = if hyp_words.is_empty() { 0.0 } else { f64::INFINITY };
        return PairMetrics {
            wer,
            cer: 0.0,
            substitutions: 0,
            deletions: 0,
            insertions: hyp_words.len(),
            total_words: 0,
            total_chars: 0,
            sentences: 1,
        };
    }

    let words = align(&ref_words, &hyp_words);
    let wer = words.distance as f64 / total_words as f64;

    let (ref_chars, hyp_chars) = if normalize_text {
        (tokenize_chars(&ref_text), tokenize_chars(&hyp_text))
    } else {
        (
            ref_text.chars().collect::<Vec<_>>(),
            hyp_text.chars().collect::<Vec<_>>(),
        )
    };
    let total_chars = ref_chars.len();
    let cer = if total_chars > 0 {
        align(&ref_chars, &hyp_chars).distance as f64 / total_chars as f64
    } else {
        0.0
    };

    PairMetrics {
        wer,
        cer,
        substitutions: words.substitutions,
        deletions: words.deletions,
        insertions: words.insertions,
        total_words,
        total_chars,
        sentences: 1,
    }
}

/// Score a batch of (reference, hypothesis) pairs.
///
/// An empty batch yields an all-zero record, not an error.
pub fn score_batch<'a, I>(pairs: I, normalize_text: bool) -> BatchMetrics
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut substitutions = 0usize;
    let mut deletions = 0usize;
    let mut insertions = 0usize;
    let mut total_words = 0usize;
    let mut total_chars = 0usize;
    let mut cer_sum = 0.0f64;
    let mut sentences = 0usize;

    for (reference, hypothesis) in pairs {
        let pair = score_pair(reference, hypothesis, normalize_text);
        substitutions += pair.substitutions;
        deletions += pair.deletions;
        insertions += pair.insertions;
        total_words += pair.total_words;
        total_chars += pair.total_chars;
        cer_sum += pair.cer;
        sentences += 1;
    }

    let errors = substitutions + deletions + insertions;
    let wer = if total_words == 0 {
        0.0
    } else {
        errors as f64 / total_words as f64
    };
    let cer = if sentences == 0 {
        0.0
    } else {
        cer_sum / sentences as f64
    };

    BatchMetrics {
        wer,
        cer,
        substitutions,
        deletions,
        insertions,
        total_words,
        total_chars,
        sentences,
    }
}
