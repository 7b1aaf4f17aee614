//! Template discovery from a local templates root
//!
//! Every subdirectory of the root is a template. Discovery is stateless: each
//! call re-reads the disk, so results always reflect its current contents.

use super::metadata::Metadata;
use crate::error::{Error, Result};
use crate::product::ProductConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// README file parsed for template metadata
pub const README_FILE: &str = "README.md";

/// A scaffoldable project skeleton found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub language: String,
    pub path: PathBuf,
    /// Raw README text, empty when the template has no README
    pub readme: String,
}

impl Template {
    /// Final path segment of the template directory
    pub fn dir_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Name for display, falling back to the directory name
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.dir_name()
        } else {
            self.name.as_str()
        }
    }

    /// True if `name` matches the template name or directory name, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            || self.dir_name().to_lowercase() == name.to_lowercase()
    }
}

/// Lists templates under a templates root
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
}

impl TemplateRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the templates root from an explicit override, the product's
    /// environment variable, or the product default, in that order
    pub fn from_config<C: ProductConfig>(config: &C, templates_dir: Option<PathBuf>) -> Self {
        let root = templates_dir
            .or_else(|| std::env::var_os(config.templates_dir_env()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(config.default_templates_dir()));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the templates root, in directory-listing order
    pub fn discover(&self) -> Result<Vec<Template>> {
        let discovery_err = |source: io::Error| Error::Discovery {
            path: self.root.clone(),
            source,
        };

        let mut templates = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(discovery_err)? {
            let entry = entry.map_err(discovery_err)?;
            if !entry.file_type().map_err(discovery_err)?.is_dir() {
                continue;
            }
            templates.push(load_template(entry.path()));
        }

        Ok(templates)
    }

    /// Find the first template whose name or directory name matches, ignoring case
    pub fn lookup(&self, name: &str) -> Result<Template> {
        self.discover()?
            .into_iter()
            .find(|t| t.matches(name))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

/// Build a template record. An unreadable README reads as empty text.
fn load_template(path: PathBuf) -> Template {
    let readme = fs::read(path.join(README_FILE))
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();

    let meta = Metadata::parse(&readme);
    Template {
        name: meta.name,
        description: meta.description,
        language: meta.language,
        path,
        readme,
    }
}
