// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch housing-pattern analysis.
//!
//! Scans a directory for `*.json` house models, analyzes each and
//! writes the pattern graph next to the model as two plain-text files:
//! `<stem>_nodes.txt` with one `"id" "label"` line per pattern, and
//! `<stem>_edges.txt` with one `"from" "to"` line per edge. Files are
//! processed in parallel; a model that fails to parse is logged and
//! skipped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use plan_dna_model::House;
use plan_dna_rules::{analyze, Analysis};
use rayon::prelude::*;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "plan-dna", version, about = "Housing-pattern analysis of floor-plan models")]
struct Args {
    /// Directory containing *.json house models
    #[arg(default_value = "models")]
    models_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    if !args.models_dir.is_dir() {
        bail!("no directory named {}", args.models_dir.display());
    }

    let mut models: Vec<PathBuf> = fs::read_dir(&args.models_dir)
        .with_context(|| format!("reading {}", args.models_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    models.sort();
    if models.is_empty() {
        bail!("no *.json models in {}", args.models_dir.display());
    }

    let analyzed: usize = models
        .par_iter()
        .map(|path| match process(path) {
            Ok(()) => 1,
            Err(err) => {
                error!(path = %path.display(), %err, "model skipped");
                0
            }
        })
        .sum();

    info!(analyzed, total = models.len(), "batch complete");
    if analyzed == 0 {
        bail!("no model could be analyzed");
    }
    Ok(())
}

fn process(path: &Path) -> Result<()> {
    let house = House::from_json_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let analysis = analyze(&house);
    write_graph(&analysis, path)?;
    info!(
        path = %path.display(),
        patterns = analysis.nodes.len(),
        edges = analysis.edges.len(),
        "model analyzed"
    );
    Ok(())
}

/// Write `<stem>_nodes.txt` and `<stem>_edges.txt` next to the model.
fn write_graph(analysis: &Analysis, model_path: &Path) -> Result<()> {
    let stem = model_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("model path has no UTF-8 file stem")?;

    let nodes: String = analysis
        .nodes
        .iter()
        .map(|(id, label)| format!("\"{id}\" \"{label}\"\n"))
        .collect();
    let edges: String = analysis
        .edges
        .iter()
        .map(|(from, to)| format!("\"{from}\" \"{to}\"\n"))
        .collect();

    let sibling = |suffix: &str| model_path.with_file_name(format!("{stem}{suffix}"));
    fs::write(sibling("_nodes.txt"), nodes)
        .with_context(|| format!("writing nodes for {}", model_path.display()))?;
    fs::write(sibling("_edges.txt"), edges)
        .with_context(|| format!("writing edges for {}", model_path.display()))?;
    Ok(())
}
