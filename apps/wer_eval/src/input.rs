use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub reference: String,
    pub hypothesis: String,
}

/// Read `{"reference": ..., "hypothesis": ...}` records, one JSON object
/// per line. Blank lines are skipped; an empty file is a valid empty batch.
pub fn read_pairs_jsonl(path: &Path) -> anyhow::Result<Vec<PairRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut pairs = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let rec: PairRecord = serde_json::from_str(line).with_context(|| {
            format!("Invalid pair record at {}:{}", path.display(), lineno + 1)
        })?;
        pairs.push(rec);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pairs_jsonl() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let p = dir.path().join("pairs.jsonl");
        fs::write(
            &p,
            concat!(
                "{\"reference\": \"HELLO WORLD\", \"hypothesis\": \"hello world\"}\n",
                "\n",
                "{\"id\": \"utt-1\", \"reference\": \"IT'S ME\", \"hypothesis\": \"its me\"}\n",
            ),
        )?;
        let pairs = read_pairs_jsonl(&p)?;
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].reference, "HELLO WORLD");
        assert!(pairs[0].id.is_none());
        assert_eq!(pairs[1].id.as_deref(), Some("utt-1"));
        Ok(())
    }

    #[test]
    fn test_read_pairs_jsonl_empty_is_ok() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let p = dir.path().join("pairs.jsonl");
        fs::write(&p, "")?;
        assert!(read_pairs_jsonl(&p)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_pairs_jsonl_rejects_bad_line() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let p = dir.path().join("pairs.jsonl");
        fs::write(&p, "{\"reference\": \"a\"}\n")?;
        let err = read_pairs_jsonl(&p).unwrap_err();
        assert!(err.to_string().contains(":1"));
        Ok(())
    }
}
