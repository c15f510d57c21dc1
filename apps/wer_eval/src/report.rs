use anyhow::Context;
use asr_metrics::{BatchMetrics, PairMetrics};
use serde::{Serialize, Serializer};
use std::path::Path;

/// WER can legitimately be infinite (empty reference, non-empty
/// hypothesis). JSON has no encoding for that and serde_json would emit
/// `null`, so infinite rates are written as the string `"inf"`.
fn rate<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str("inf")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsRecord {
    #[serde(serialize_with = "rate")]
    pub wer: f64,
    #[serde(serialize_with = "rate")]
    pub wer_percent: f64,
    pub cer: f64,
    pub cer_percent: f64,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
    pub total_words: usize,
    pub total_chars: usize,
    pub sentences: usize,
}

impl From<PairMetrics> for MetricsRecord {
    fn from(m: PairMetrics) -> Self {
        MetricsRecord {
            wer: m.wer,
            wer_percent: m.wer * 100.0,
            cer: m.cer,
            cer_percent: m.cer * 100.0,
            substitutions: m.substitutions,
            deletions: m.deletions,
            insertions: m.insertions,
            total_words: m.total_words,
            total_chars: m.total_chars,
            sentences: m.sentences,
        }
    }
}

impl From<BatchMetrics> for MetricsRecord {
    fn from(m: BatchMetrics) -> Self {
        MetricsRecord {
            wer: m.wer,
            wer_percent: m.wer * 100.0,
            cer: m.cer,
            cer_percent: m.cer * 100.0,
            substitutions: m.substitutions,
            deletions: m.deletions,
            insertions: m.insertions,
            total_words: m.total_words,
            total_chars: m.total_chars,
            sentences: m.sentences,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairResult {
    pub id: String,
    pub reference: String,
    pub hypothesis: String,
    #[serde(flatten)]
    pub metrics: MetricsRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub generated_at: String,
    pub input: String,
    pub normalized: bool,
    #[serde(flatten)]
    pub metrics: MetricsRecord,
}

pub fn write_results_jsonl(path: &Path, results: &[PairResult]) -> anyhow::Result<()> {
    let mut out = String::new();
    for r in results {
        out.push_str(&serde_json::to_string(r)?);
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn print_summary_table(summary: &Summary, results: &[PairResult], threshold: Option<f64>) {
    let m = &summary.metrics;
    eprintln!();
    eprintln!("=== WER Eval Summary ===");
    eprintln!("sentences   : {}", m.sentences);
    eprintln!("ref_words   : {}", m.total_words);
    eprintln!("ref_chars   : {}", m.total_chars);
    eprintln!(
        "agg WER     : {:.4} (S={} D={} I={})",
        m.wer, m.substitutions, m.deletions, m.insertions
    );
    eprintln!("agg CER     : {:.4}", m.cer);
    if let Some(t) = threshold {
        eprintln!("threshold   : {:.4}", t);
    }

    // Worst 10 pairs by WER (infinite ones sort first).
    let mut worst = results
        .iter()
        .map(|r| (r.id.as_str(), r.metrics.wer))
        .collect::<Vec<_>>();
    worst.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    eprintln!();
    eprintln!("worst_wer:");
    for (id, w) in worst.into_iter().take(10) {
        eprintln!("  {:>8.4}  {}", w, id);
    }
}
