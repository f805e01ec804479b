// File: src/sampling.rs
use crate::error::CorpusError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Picks `count` distinct lines of `lines` at random.
pub fn sample_lines<'a, R: rand::Rng + ?Sized>(
    lines: &'a [String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'a String>, CorpusError> {
    if count > lines.len() {
        return Err(CorpusError::SampleTooLarge {
            requested: count,
            available: lines.len(),
        });
    }
    Ok(lines.choose_multiple(rng, count).collect())
}

/// Writes a random `count`-line subset of `input` to `output`.
///
/// The output is written to a temporary file next to it and moved into place,
/// so a failed run never leaves a truncated corpus behind. `seed` makes the
/// selection reproducible.
pub fn sample_corpus(
    input: &Path,
    output: &Path,
    count: usize,
    seed: Option<u64>,
) -> Result<usize, CorpusError> {
    let reader = BufReader::new(File::open(input)?);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picked = sample_lines(&lines, count, &mut rng)?;

    let parent_dir = output
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        for line in &picked {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
    }
    temp_file.persist(output).map_err(|e| CorpusError::Io(e.error))?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        available = lines.len(),
        count,
        "sampled corpus"
    );
    Ok(picked.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn corpus_lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{i} {i}")).collect()
    }

    #[test]
    fn test_sample_is_distinct_subset() {
        let lines = corpus_lines(50);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_lines(&lines, 20, &mut rng).unwrap();
        let unique: HashSet<&String> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(picked.iter().all(|line| lines.contains(*line)));
    }

    #[test]
    fn test_sample_too_large() {
        let lines = corpus_lines(3);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_lines(&lines, 4, &mut rng),
            Err(CorpusError::SampleTooLarge { requested: 4, available: 3 })
        ));
    }

    #[test]
    fn test_sample_corpus_file_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full.txt");
        fs::write(&input, corpus_lines(100).join("\n")).unwrap();

        let first = dir.path().join("a.txt");
        let second = dir.path().join("nested/b.txt");
        assert_eq!(sample_corpus(&input, &first, 10, Some(42)).unwrap(), 10);
        assert_eq!(sample_corpus(&input, &second, 10, Some(42)).unwrap(), 10);

        let a = fs::read_to_string(&first).unwrap();
        assert_eq!(a, fs::read_to_string(&second).unwrap());
        assert_eq!(a.lines().count(), 10);
    }
}
