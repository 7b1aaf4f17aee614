//! Template discovery, metadata parsing, and copying
//!
//! This module provides:
//! - README metadata parsing (name, description, language)
//! - Template discovery and lookup under a templates root
//! - Optional per-template manifests with pre-flight requirements
//! - Directory copying with `{{PROJECT_NAME}}` substitution

pub mod copier;
pub mod manifest;
pub mod metadata;
pub mod registry;

pub use copier::{copy_template, PLACEHOLDER};
pub use manifest::{check_compatibility, TemplateManifest};
pub use metadata::Metadata;
pub use registry::{Template, TemplateRegistry};
