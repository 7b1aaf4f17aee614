//! AuthKit Core - scaffolding library behind the `authkit` CLI
//!
//! This library discovers project templates in a local templates root and
//! copies a chosen one into a new project directory, replacing the
//! `{{PROJECT_NAME}}` token with the project's name.
//!
//! # Architecture
//!
//! - **Templates** - README metadata parsing, discovery/lookup, manifests, copying
//! - **Runtime** - required-tool lookup on PATH for template pre-flight checks
//! - **Scaffold** - the interactive select-then-name flow over any reader/writer
//! - **TUI** - optional cliclack framing around the flow (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use authkit_core::{Scaffolder, TemplateRegistry};
//!
//! let registry = TemplateRegistry::new("templates");
//! for template in registry.discover()? {
//!     println!("{}: {}", template.display_name(), template.description);
//! }
//!
//! let stdin = std::io::stdin();
//! let scaffolder = Scaffolder::new(registry, std::env::current_dir()?);
//! scaffolder.run(stdin.lock(), std::io::stdout())?;
//! # Ok::<(), authkit_core::Error>(())
//! ```

pub mod error;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use product::ProductConfig;
pub use runtime::{check_env, ToolInfo};
pub use scaffold::{Scaffolded, Scaffolder};
pub use templates::{copy_template, Metadata, Template, TemplateManifest, TemplateRegistry};

#[cfg(feature = "tui")]
pub use tui::run;
