//! The artifact plan: every file a run produces, in output order.

use crate::declaration::emit_declaration_file;
use crate::options::EmitterOptions;
use crate::shim::{emit_global_file, emit_prototype_file};
use rustc_hash::FxHashSet;
use tracing::debug;
use tsbind_solver::{InterfaceOrigin, ProcessedInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `I<Name>.cs`
    Declaration,
    /// `<Name>Prototype.cs`
    Prototype,
    /// `<name>Global.cs`
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    pub kind: ArtifactKind,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactPlan {
    artifacts: Vec<Artifact>,
}

impl ArtifactPlan {
    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, file_name: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.file_name == file_name)
    }

    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts
            .iter()
            .filter(|artifact| artifact.kind == kind)
            .count()
    }

    /// File names planned more than once, each reported once.
    pub fn duplicate_file_names(&self) -> Vec<&str> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut reported: FxHashSet<&str> = FxHashSet::default();
        let mut duplicates = Vec::new();
        for artifact in &self.artifacts {
            let name = artifact.file_name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

impl<'p> IntoIterator for &'p ArtifactPlan {
    type Item = &'p Artifact;
    type IntoIter = std::slice::Iter<'p, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Render every artifact for `processed`.
///
/// Order: each source interface's declaration followed by its prototype
/// shim (when it has one), then one file per loose global.
pub fn plan(processed: &ProcessedInfo, options: &EmitterOptions) -> ArtifactPlan {
    let mut plan = ArtifactPlan::default();

    for (view, class) in processed.pairs() {
        match &view.origin {
            InterfaceOrigin::Source => {
                plan.push(Artifact {
                    file_name: format!("{}.cs", view.name),
                    kind: ArtifactKind::Declaration,
                    contents: emit_declaration_file(view, options),
                });
                if view.has_prototype {
                    plan.push(Artifact {
                        file_name: format!("{}.cs", class.name),
                        kind: ArtifactKind::Prototype,
                        contents: emit_prototype_file(class, options),
                    });
                }
            }
            InterfaceOrigin::LooseGlobal { global_name } => {
                debug!(global = %global_name, "emitting loose global");
                plan.push(Artifact {
                    file_name: format!("{}.cs", class.name),
                    kind: ArtifactKind::Global,
                    contents: emit_global_file(view, class, options),
                });
            }
        }
    }

    debug!(
        artifacts = plan.len(),
        declarations = plan.count(ArtifactKind::Declaration),
        prototypes = plan.count(ArtifactKind::Prototype),
        globals = plan.count(ArtifactKind::Global),
        "artifact plan ready"
    );
    plan
}
