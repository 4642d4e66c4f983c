use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{Level, info, span};

use crate::cli::args::CliArgs;
use crate::cli::config::{ResolvedOptions, options_from_path};
use crate::cli::fs::materialize;
use tsbind_common::ParsedInfo;
use tsbind_emitter::{ArtifactKind, ArtifactPlan};

/// Summary of one generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Written files, in output order.
    pub written_files: Vec<PathBuf>,
    pub declarations: usize,
    pub prototypes: usize,
    pub globals: usize,
}

impl GenerateResult {
    fn from_plan(plan: &ArtifactPlan, written_files: Vec<PathBuf>) -> Self {
        Self {
            written_files,
            declarations: plan.count(ArtifactKind::Declaration),
            prototypes: plan.count(ArtifactKind::Prototype),
            globals: plan.count(ArtifactKind::Global),
        }
    }
}

pub fn load_model(path: &Path) -> Result<ParsedInfo> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read declaration model: {}", path.display()))?;
    ParsedInfo::from_json_str(&source)
        .with_context(|| format!("failed to parse declaration model: {}", path.display()))
}

/// Project `model` and render every artifact, without touching the disk.
pub fn plan_model(model: &ParsedInfo, options: &ResolvedOptions) -> Result<ArtifactPlan> {
    let processed = tsbind_solver::process(model, &options.solver)
        .context("failed to project declaration model")?;
    Ok(tsbind_emitter::plan(&processed, &options.emitter))
}

/// Run the whole pipeline for `args`. Relative paths resolve against `cwd`.
pub fn generate(args: &CliArgs, cwd: &Path) -> Result<GenerateResult> {
    let _span = span!(Level::INFO, "generate").entered();

    let input = cwd.join(&args.input);
    let out_dir = cwd.join(&args.out_dir);
    let config = args.config.as_ref().map(|path| cwd.join(path));

    let options = options_from_path(config.as_deref())?;
    let model = load_model(&input)?;
    let plan = plan_model(&model, &options)?;

    let written = materialize(&plan, &out_dir)
        .with_context(|| format!("failed to write bindings to {}", out_dir.display()))?;

    let result = GenerateResult::from_plan(&plan, written);
    info!(
        files = result.written_files.len(),
        declarations = result.declarations,
        prototypes = result.prototypes,
        globals = result.globals,
        "generation finished"
    );
    Ok(result)
}
