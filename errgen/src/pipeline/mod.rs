//! Generation pipeline: render the source module and every domain document,
//! then write them out
//!
//! Rendering and validation finish for every artifact before the first file is
//! written, so a bad domain or missing output path leaves the disk untouched.

mod error;
pub mod output;

pub use error::GenerateError;
pub use output::{Artifact, DocumentArtifact, GenerationPlan, GenerationReport};

use crate::codegen::{validate_domain, MarkdownGenerator, SourceGenerator};
use crate::config::GeneratorPreferences;
use crate::definition::{duplicate_codes, partition_by_domain, Registry};
use crate::logging::codes;
use crate::{log_debug, log_success, log_warning};
use std::fs;
use std::path::{Path, PathBuf};

/// Generate both artifacts with default preferences
pub fn generate(
    source_path: impl AsRef<Path>,
    markdown_dir: impl AsRef<Path>,
    registry: &Registry,
) -> Result<GenerationReport, GenerateError> {
    Generator::default().generate(source_path, markdown_dir, registry)
}

/// Generate both artifacts with explicit preferences
pub fn generate_with_preferences(
    source_path: impl AsRef<Path>,
    markdown_dir: impl AsRef<Path>,
    registry: &Registry,
    preferences: &GeneratorPreferences,
) -> Result<GenerationReport, GenerateError> {
    Generator::new(preferences.clone()).generate(source_path, markdown_dir, registry)
}

/// Paths whose on-disk content differs from what would be generated
pub fn verify(
    source_path: impl AsRef<Path>,
    markdown_dir: impl AsRef<Path>,
    registry: &Registry,
) -> Result<Vec<PathBuf>, GenerateError> {
    Generator::default().verify(source_path, markdown_dir, registry)
}

/// Location of a domain's document under `markdown_dir`
pub fn markdown_path(markdown_dir: &Path, domain: &str) -> PathBuf {
    markdown_dir.join(domain).join(format!("{}.md", domain))
}

/// Owns both renderers; the Markdown title cache lives as long as the generator.
#[derive(Debug, Clone)]
pub struct Generator {
    preferences: GeneratorPreferences,
    source: SourceGenerator,
    markdown: MarkdownGenerator,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorPreferences::default())
    }
}

impl Generator {
    pub fn new(preferences: GeneratorPreferences) -> Self {
        Self::with_markdown_generator(preferences, MarkdownGenerator::new())
    }

    /// Use a caller-supplied Markdown generator, e.g. one sharing a title cache
    pub fn with_markdown_generator(
        preferences: GeneratorPreferences,
        markdown: MarkdownGenerator,
    ) -> Self {
        Self {
            source: SourceGenerator::new(&preferences.generator_name),
            preferences,
            markdown,
        }
    }

    pub fn preferences(&self) -> &GeneratorPreferences {
        &self.preferences
    }

    pub fn markdown_generator(&self) -> &MarkdownGenerator {
        &self.markdown
    }

    /// Render and validate everything without touching the filesystem
    pub fn plan(
        &self,
        source_path: impl AsRef<Path>,
        markdown_dir: impl AsRef<Path>,
        registry: &Registry,
    ) -> Result<GenerationPlan, GenerateError> {
        let source_path = source_path.as_ref();
        let markdown_dir = markdown_dir.as_ref();

        // Stage 1: source module
        if source_path.as_os_str().is_empty() {
            return Err(GenerateError::source_stage(GenerateError::EmptyOutputPath));
        }
        let source_content = self
            .source
            .render(registry)
            .map_err(GenerateError::source_stage)?;

        if self.preferences.warn_duplicate_codes {
            for (code, keys) in duplicate_codes(registry) {
                log_warning!("Error code shared by several registry keys",
                    "code" => code,
                    "keys" => keys.join(","));
            }
        }

        // Stage 2: per-domain documents
        let partitions = partition_by_domain(registry);
        for domain in partitions.keys() {
            validate_domain(domain).map_err(|e| GenerateError::domain_stage(domain, e))?;
        }
        if !partitions.is_empty() && markdown_dir.as_os_str().is_empty() {
            return Err(GenerateError::EmptyMarkdownDir);
        }

        let mut documents = Vec::with_capacity(partitions.len());
        for (domain, definitions) in &partitions {
            let content = self
                .markdown
                .render(domain, definitions)
                .map_err(|e| GenerateError::domain_stage(domain, e))?;

            log_debug!("Rendered markdown",
                "domain" => domain,
                "definitions" => definitions.len());

            documents.push(DocumentArtifact {
                domain: domain.clone(),
                artifact: Artifact {
                    path: markdown_path(markdown_dir, domain),
                    content,
                },
            });
        }

        Ok(GenerationPlan {
            source: Artifact {
                path: source_path.to_path_buf(),
                content: source_content,
            },
            documents,
            definitions: registry.len(),
        })
    }

    /// Render everything, then write the source file and one document per domain
    pub fn generate(
        &self,
        source_path: impl AsRef<Path>,
        markdown_dir: impl AsRef<Path>,
        registry: &Registry,
    ) -> Result<GenerationReport, GenerateError> {
        let plan = self.plan(source_path, markdown_dir, registry)?;

        write_artifact(&plan.source).map_err(GenerateError::source_stage)?;
        log_success!(codes::success::SOURCE_WRITTEN, "Source file written",
            "path" => plan.source.path.display(),
            "definitions" => plan.definitions);

        for document in &plan.documents {
            write_artifact(&document.artifact)
                .map_err(|e| GenerateError::domain_stage(&document.domain, e))?;
            log_success!(codes::success::MARKDOWN_WRITTEN, "Markdown written",
                "domain" => document.domain,
                "path" => document.artifact.path.display());
        }

        let report = GenerationReport::from(&plan);
        log_success!(codes::success::GENERATION_COMPLETED, "Generation completed",
            "definitions" => report.definitions,
            "domains" => report.domains());
        Ok(report)
    }

    /// Compare rendered content with the files on disk.
    ///
    /// Returns the paths that are missing or stale; nothing is written.
    pub fn verify(
        &self,
        source_path: impl AsRef<Path>,
        markdown_dir: impl AsRef<Path>,
        registry: &Registry,
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let plan = self.plan(source_path, markdown_dir, registry)?;

        let stale: Vec<PathBuf> = plan
            .artifacts()
            .filter(|artifact| {
                fs::read_to_string(&artifact.path)
                    .map(|existing| existing != artifact.content)
                    .unwrap_or(true)
            })
            .map(|artifact| artifact.path.clone())
            .collect();

        for path in &stale {
            log_debug!("Stale generated file", "path" => path.display());
        }
        Ok(stale)
    }
}

/// Write one artifact, creating its parent directories
fn write_artifact(artifact: &Artifact) -> Result<(), GenerateError> {
    if let Some(parent) = artifact.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
        }
    }
    fs::write(&artifact.path, &artifact.content).map_err(|e| GenerateError::io(&artifact.path, e))
}
