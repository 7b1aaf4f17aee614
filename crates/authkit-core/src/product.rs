//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to tell the core where templates live by
//! default and what to say once a project has been created.

use std::path::Path;

/// Configuration trait for a scaffolding CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Templates root used when neither a flag nor the environment overrides it
    fn default_templates_dir(&self) -> &'static str {
        "templates"
    }

    /// Environment variable name for overriding the templates root
    fn templates_dir_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project_dir: &Path, project_name: &str) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
