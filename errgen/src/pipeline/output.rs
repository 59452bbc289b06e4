use std::path::{Path, PathBuf};

/// One rendered file waiting to be written or compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// A domain's rendered Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentArtifact {
    pub domain: String,
    pub artifact: Artifact,
}

/// Everything one run produces, rendered in memory before any write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub source: Artifact,
    pub documents: Vec<DocumentArtifact>,
    pub definitions: usize,
}

impl GenerationPlan {
    /// Every artifact, source first, then documents in domain order
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        std::iter::once(&self.source).chain(self.documents.iter().map(|doc| &doc.artifact))
    }
}

/// Summary of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub source_path: PathBuf,
    /// `(domain, path)` for every Markdown document, in domain order
    pub markdown_files: Vec<(String, PathBuf)>,
    pub definitions: usize,
}

impl GenerationReport {
    pub fn domains(&self) -> usize {
        self.markdown_files.len()
    }

    /// Path written for `domain`, if any
    pub fn markdown_path(&self, domain: &str) -> Option<&Path> {
        self.markdown_files
            .iter()
            .find(|(d, _)| d == domain)
            .map(|(_, path)| path.as_path())
    }
}

impl From<&GenerationPlan> for GenerationReport {
    fn from(plan: &GenerationPlan) -> Self {
        Self {
            source_path: plan.source.path.clone(),
            markdown_files: plan
                .documents
                .iter()
                .map(|doc| (doc.domain.clone(), doc.artifact.path.clone()))
                .collect(),
            definitions: plan.definitions,
        }
    }
}
