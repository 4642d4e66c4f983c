use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use tsbind_emitter::{EmitterOptions, NewLine};
use tsbind_solver::SolverOptions;

/// Line terminator as spelled in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineSetting {
    Lf,
    Crlf,
}

impl From<NewLineSetting> for NewLine {
    fn from(value: NewLineSetting) -> Self {
        match value {
            NewLineSetting::Lf => NewLine::Lf,
            NewLineSetting::Crlf => NewLine::CrLf,
        }
    }
}

/// Contents of a `--config` file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub global_scope_interface: Option<String>,
    #[serde(default)]
    pub new_line: Option<NewLineSetting>,
}

/// Settings handed to the solver and the emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub solver: SolverOptions,
    pub emitter: EmitterOptions,
}

pub fn parse_config(source: &str) -> Result<ConfigFile> {
    serde_json::from_str(source).context("invalid config file")
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Overlay `config` on the defaults, rejecting values that would produce
/// uncompilable output.
pub fn resolve_options(config: &ConfigFile) -> Result<ResolvedOptions> {
    let mut resolved = ResolvedOptions::default();

    if let Some(namespace) = &config.namespace {
        validate_namespace(namespace)?;
        resolved.emitter.namespace = namespace.clone();
    }
    if let Some(name) = &config.global_scope_interface {
        if !is_identifier(name) {
            bail!("globalScopeInterface must be an interface name, got '{name}'");
        }
        resolved.solver.global_scope_interface = name.clone();
    }
    if let Some(new_line) = config.new_line {
        resolved.emitter.new_line = new_line.into();
    }

    Ok(resolved)
}

/// Load and resolve an optional config file; `None` yields the defaults.
pub fn options_from_path(path: Option<&Path>) -> Result<ResolvedOptions> {
    match path {
        Some(path) => resolve_options(&load_config(path)?),
        None => Ok(ResolvedOptions::default()),
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.split('.').all(is_identifier) {
        Ok(())
    } else {
        bail!("namespace must be a dotted sequence of identifiers, got '{namespace}'")
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
