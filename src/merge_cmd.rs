//! Merge command: combine every per-year document into one snapshot.

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span};

use koyomi_io::{MergeConfig, merge_years, write_json};

use crate::cli::MergeArgs;
use crate::config::MergeToml;

/// Run the merge step.
pub fn run(args: MergeArgs, config: &MergeToml) -> Result<()> {
    let _cmd = info_span!("merge").entered();

    // 1. CLI lists replace config lists
    let dirs = if args.dirs.is_empty() {
        config.search_dirs.clone()
    } else {
        args.dirs
    };
    let outputs = if args.outputs.is_empty() {
        config.outputs.clone()
    } else {
        args.outputs
    };
    if dirs.is_empty() {
        bail!("no search directories: set [merge].search_dirs in config or use --dir");
    }
    if outputs.is_empty() {
        bail!("no output paths: set [merge].outputs in config or use --output");
    }

    // 2. Discover and load
    let created_at = Local::now().date_naive();
    let merge_cfg = MergeConfig::default().with_search_dirs(dirs);
    let result = merge_years(&merge_cfg, created_at).context("nothing to merge")?;

    // 3. Write every copy
    for path in &outputs {
        write_json(path, result.document())
            .with_context(|| format!("failed to write merged data: {}", path.display()))?;
        info!(path = %path.display(), "merged data written");
    }
    info!(
        created_at = %created_at,
        n_years = result.n_years(),
        n_skipped = result.skipped().len(),
        "merge complete"
    );

    Ok(())
}
