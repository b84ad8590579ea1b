//! Reconciliation pipeline: load → compare → tabulate → alpha.
//!
//! 1. Load every configured export pair (each file read once)
//! 2. Compare the first pair's schemes and write the comparison report
//! 3. Build the binary and text tables for every pair, in pair order
//! 4. Re-read the binary table and write the alpha results
//!
//! Each output file is fully written before the next stage starts.

use std::path::{Path, PathBuf};

use anyhow::Context;
use irr_alpha::{AlphaTable, PresenceTable};
use irr_config::{FilePair, IrrConfig};
use irr_export::CoderExport;
use irr_report::{ComparisonTable, HEADER, SchemeComparison};
use serde::Serialize;

use crate::progress::Progress;

/// Paths of the four files a run produces.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputPaths {
    pub comparison: PathBuf,
    pub binary: PathBuf,
    pub text: PathBuf,
    pub results: PathBuf,
}

/// What a run did, printed as JSON unless `--quiet`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub pairs: usize,
    pub rows: usize,
    pub schemes_match: bool,
    pub skipped_foreign: usize,
    pub missing_in_coder2: usize,
    pub outputs: OutputPaths,
    pub alphas: AlphaTable,
}

struct LoadedPair {
    coder1: CoderExport,
    coder2: CoderExport,
}

/// Run the whole reconciliation for a validated config.
pub fn run(config: &IrrConfig) -> anyhow::Result<RunSummary> {
    let output = &config.output;
    let outputs = OutputPaths {
        comparison: output.comparison_path(),
        binary: output.binary_path(),
        text: output.text_path(),
        results: output.results_path(),
    };
    std::fs::create_dir_all(&output.dir).with_context(|| {
        format!("failed to create output directory {}", output.dir.display())
    })?;

    let pairs = load_pairs(&config.inputs.pairs())?;
    let Some(first) = pairs.first() else {
        anyhow::bail!("no export pairs configured");
    };

    // Scheme comparison: first pair only.
    let comparison = SchemeComparison::between(&first.coder1, &first.coder2);
    if !comparison.schemes_match() {
        tracing::warn!(
            coder1 = %first.coder1.label(),
            coder2 = %first.coder2.label(),
            "coding schemes differ; coder 1's scheme is used for the tables"
        );
    }
    if pairs.len() > 1 {
        tracing::info!(
            skipped = pairs.len() - 1,
            "only the first export pair is scheme-compared"
        );
    }
    let report = comparison.render(&first.coder1.label(), &first.coder2.label());
    write_file(&outputs.comparison, &report)?;

    // Comparison tables for every pair.
    let mut binary = format!("{HEADER}\n");
    let mut text = format!("{HEADER}\n");
    let mut rows = 0;
    let mut skipped_foreign = 0;
    let mut missing_in_coder2 = 0;

    let progress = Progress::bar(pairs.len() as u64, "building comparison tables");
    for pair in &pairs {
        progress.set_message(&pair.coder1.label());
        let table = ComparisonTable::between(&pair.coder1, &pair.coder2);
        binary.push_str(&table.binary_lines());
        text.push_str(&table.text_lines());
        rows += table.rows.len();
        skipped_foreign += table.skipped_foreign;
        missing_in_coder2 += table.missing_in_coder2;
        progress.inc(1);
    }
    progress.finish_and_clear();

    write_file(&outputs.binary, &binary)?;
    write_file(&outputs.text, &text)?;
    tracing::info!(rows, pairs = pairs.len(), "wrote comparison tables");

    // Reliability from the table on disk.
    let presence = PresenceTable::read(&outputs.binary)
        .with_context(|| format!("failed to read back {}", outputs.binary.display()))?;
    let alphas = presence.alpha_table();
    write_file(&outputs.results, &alphas.to_csv())?;

    Ok(RunSummary {
        pairs: pairs.len(),
        rows,
        schemes_match: comparison.schemes_match(),
        skipped_foreign,
        missing_in_coder2,
        outputs,
        alphas,
    })
}

fn load_pairs(pairs: &[FilePair]) -> anyhow::Result<Vec<LoadedPair>> {
    pairs
        .iter()
        .map(|pair| {
            Ok(LoadedPair {
                coder1: load_export(&pair.coder1)?,
                coder2: load_export(&pair.coder2)?,
            })
        })
        .collect()
}

fn load_export(path: &Path) -> anyhow::Result<CoderExport> {
    CoderExport::load(path).with_context(|| format!("failed to load export {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
