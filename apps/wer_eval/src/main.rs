mod input;
mod report;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSONL file of {"reference": ..., "hypothesis": ...} records.
    #[arg(long)]
    input: PathBuf,

    /// Output directory for results + summary (default: target/wer_eval).
    #[arg(long, default_value = "target/wer_eval")]
    out_dir: PathBuf,

    /// Score raw strings without lowercasing/punctuation stripping.
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Max pairs to score (0 = no limit).
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Optional aggregate WER threshold for pass/fail.
    #[arg(long)]
    wer_threshold: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create out dir {}", args.out_dir.display()))?;

    let mut pairs = input::read_pairs_jsonl(&args.input)?;
    if args.limit > 0 && pairs.len() > args.limit {
        pairs.truncate(args.limit);
    }
    let normalize = !args.raw;
    eprintln!(
        "[wer_eval] scoring {} pairs (normalize={})",
        pairs.len(),
        normalize
    );

    // One DP table lives at a time; long batches stay bounded in memory.
    let mut results = Vec::with_capacity(pairs.len());
    for (i, rec) in pairs.iter().enumerate() {
        let metrics = asr_metrics::score_pair(&rec.reference, &rec.hypothesis, normalize);
        results.push(report::PairResult {
            id: rec
                .id
                .clone()
                .unwrap_or_else(|| format!("pair-{}", i + 1)),
            reference: rec.reference.clone(),
            hypothesis: rec.hypothesis.clone(),
            metrics: metrics.into(),
        });
    }

    let batch = asr_metrics::score_batch(
        pairs.iter().map(|r| (r.reference.as_str(), r.hypothesis.as_str())),
        normalize,
    );

    let results_path = args.out_dir.join("results.jsonl");
    report::write_results_jsonl(&results_path, &results)?;
    eprintln!(
        "[wer_eval] results: {} entries -> {}",
        results.len(),
        results_path.display()
    );

    let summary = report::Summary {
        generated_at: Local::now().to_rfc3339(),
        input: args.input.display().to_string(),
        normalized: normalize,
        metrics: batch.into(),
    };
    let summary_path = args.out_dir.join("summary.json");
    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    report::print_summary_table(&summary, &results, args.wer_threshold);

    if let Some(th) = args.wer_threshold {
        if batch.wer > th {
            anyhow::bail!(
                "aggregate WER {:.4} exceeds threshold {:.4}",
                batch.wer,
                th
            );
        }
    }

    Ok(())
}
