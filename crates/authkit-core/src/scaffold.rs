//! Interactive project scaffolding
//!
//! A single linear run: list templates, read a numeric selection, read a
//! project name, then copy the chosen template into `<cwd>/<project name>`.
//! Each answer is read exactly once; an invalid answer aborts the run.

use crate::error::{Error, Result};
use crate::runtime::check_env;
use crate::templates::{copy_template, Template, TemplateManifest, TemplateRegistry};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Component, Path, PathBuf};

/// Outcome of a successful scaffold
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub template: Template,
    pub project_name: String,
    pub project_dir: PathBuf,
    /// Copied files, relative to `project_dir`
    pub files: Vec<PathBuf>,
}

/// Runs the interactive init flow against a template registry
#[derive(Debug, Clone)]
pub struct Scaffolder {
    registry: TemplateRegistry,
    cwd: PathBuf,
    skip_env_check: bool,
    version_check: Option<(String, String)>,
}

impl Scaffolder {
    /// New projects are created under `cwd`
    pub fn new(registry: TemplateRegistry, cwd: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            cwd: cwd.into(),
            skip_env_check: false,
            version_check: None,
        }
    }

    /// Skip the template's required-tool check
    pub fn skip_env_check(mut self, skip: bool) -> Self {
        self.skip_env_check = skip;
        self
    }

    /// Warn when a template asks for a newer CLI than `cli_version`
    pub fn version_check(mut self, cli_version: &str, upgrade_command: &str) -> Self {
        self.version_check = Some((cli_version.to_string(), upgrade_command.to_string()));
        self
    }

    /// Run the prompts, reading answers from `input` and writing to `output`
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Scaffolded> {
        let mut templates = self.registry.discover()?;
        if templates.is_empty() {
            return Err(Error::NoTemplates(self.registry.root().to_path_buf()));
        }

        writeln!(output, "{}", "Select a template:".bold())?;
        for (i, t) in templates.iter().enumerate() {
            writeln!(output, "[{}] {} ({})", i + 1, t.display_name(), t.language)?;
        }

        let answer = prompt(&mut input, &mut output, "Enter number: ")?;
        let index = parse_selection(&answer, templates.len())?;
        let template = templates.swap_remove(index);

        let project_name = prompt(&mut input, &mut output, "Project name: ")?;
        if project_name.is_empty() {
            return Err(Error::EmptyName);
        }

        let relative = relative_project_path(&project_name);
        if relative.as_os_str().is_empty() {
            return Err(Error::EmptyName);
        }

        let project_dir = self.cwd.join(relative);
        if project_dir.exists() {
            return Err(Error::AlreadyExists(project_dir));
        }

        self.preflight(&template, &mut output)?;

        writeln!(
            output,
            "Scaffolding {} into {}...",
            template.display_name().cyan(),
            project_dir.display()
        )?;
        let files = copy_template(&template.path, &project_dir, &project_name)
            .map_err(|e| Error::Scaffold(Box::new(e)))?;
        writeln!(output, "{}", "Project scaffolded successfully.".green())?;

        Ok(Scaffolded {
            template,
            project_name,
            project_dir,
            files,
        })
    }

    fn preflight<W: Write>(&self, template: &Template, output: &mut W) -> Result<()> {
        let manifest = TemplateManifest::load(&template.path)?;

        if let Some((cli_version, upgrade_command)) = &self.version_check {
            if let Some(warning) = manifest.compatibility_warning(cli_version, upgrade_command) {
                writeln!(output, "{} {}", "Warning:".yellow(), warning)?;
            }
        }

        if !self.skip_env_check {
            check_env(&manifest.requires)?;
        }
        Ok(())
    }
}

/// Print `question` and read one trimmed line. End of input reads as empty.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Drop root and drive prefixes so the name always resolves under the working directory
fn relative_project_path(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::ParentDir | Component::CurDir
            )
        })
        .collect()
}

/// Turn a 1-based answer into an index into `count` templates
fn parse_selection(answer: &str, count: usize) -> Result<usize> {
    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(Error::InvalidSelection {
            input: answer.to_string(),
            count,
        }),
    }
}
