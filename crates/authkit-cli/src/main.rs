//! AuthKit CLI - Scaffold secure authentication backends from templates

use anyhow::Result;
use authkit_core::tui::InitArgs;
use authkit_core::{ProductConfig, TemplateManifest, TemplateRegistry};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// AuthKit product configuration
#[derive(Clone)]
pub struct AuthKitConfig;

impl ProductConfig for AuthKitConfig {
    fn name(&self) -> &'static str {
        "authkit"
    }

    fn display_name(&self) -> &'static str {
        "AuthKit"
    }

    fn templates_dir_env(&self) -> &'static str {
        "AUTHKIT_TEMPLATES_DIR"
    }

    fn cli_description(&self) -> &'static str {
        "AuthKit CLI for scaffolding secure authentication backends."
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install authkit-cli --force"
    }

    fn next_steps(&self, dir: &Path, project_name: &str) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", project_name));
        }
        steps.push("Follow the README.md for setup instructions.".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    /// Directory containing one subdirectory per template
    #[arg(long = "templates-dir", global = true)]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available templates
    List,
    /// Show details for a specific template
    Info(TemplateArg),
    /// Scaffold a new project from a template
    Init(CliInitArgs),
    /// Check that the tools a template needs are installed
    Check(TemplateArg),
    /// Print the version number
    Version,
}

#[derive(Parser, Debug)]
pub struct TemplateArg {
    /// Template name or directory name (case-insensitive)
    pub template: String,
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Skip the template's required-tool check
    #[arg(long = "skip-env-check")]
    pub skip_env_check: bool,
}

/// clap command named and described by the product config
fn cli<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .about(config.cli_description())
}

fn parse_args<C: ProductConfig>(config: &C) -> Args {
    let matches = cli(config).get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn version_line<C: ProductConfig>(config: &C) -> String {
    format!("{} CLI version {}", config.display_name(), CLI_VERSION)
}

fn list(registry: &TemplateRegistry) -> Result<()> {
    let templates = registry.discover()?;
    println!("{}", "Available templates:".bold());
    for t in &templates {
        println!("- {}: {}", t.display_name().cyan(), t.description);
    }
    Ok(())
}

fn info(registry: &TemplateRegistry, name: &str) -> Result<()> {
    let template = registry.lookup(name)?;
    let manifest = TemplateManifest::load(&template.path)?;

    println!("{} {}", "Name:".bold(), template.name);
    println!("{} {}", "Description:".bold(), template.description);
    println!("{} {}", "Language:".bold(), template.language);
    println!("{} {}", "Path:".bold(), template.path.display());
    if !manifest.requires.is_empty() {
        println!("{} {}", "Requires:".bold(), manifest.requires.join(", "));
    }
    if !template.readme.is_empty() {
        println!();
        println!("{}", "README:".bold());
        println!("{}", template.readme);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = AuthKitConfig;
    let args = parse_args(&config);

    if args.version {
        println!("{}", version_line(&config));
        return Ok(());
    }

    match args.command {
        Some(Command::List) => {
            let registry = TemplateRegistry::from_config(&config, args.templates_dir);
            list(&registry)
        }
        Some(Command::Info(arg)) => {
            let registry = TemplateRegistry::from_config(&config, args.templates_dir);
            info(&registry, &arg.template)
        }
        Some(Command::Check(arg)) => {
            authkit_core::tui::run_check(&config, args.templates_dir, &arg.template, CLI_VERSION)?;
            Ok(())
        }
        Some(Command::Version) => {
            println!("{}", version_line(&config));
            Ok(())
        }
        Some(Command::Init(init_args)) => {
            let init_args = InitArgs {
                templates_dir: args.templates_dir,
                skip_env_check: init_args.skip_env_check,
            };
            run_init(&config, init_args)
        }
        None => {
            // No subcommand provided, default to init behavior (interactive mode)
            let init_args = InitArgs {
                templates_dir: args.templates_dir,
                ..Default::default()
            };
            run_init(&config, init_args)
        }
    }
}

fn run_init(config: &AuthKitConfig, args: InitArgs) -> Result<()> {
    let result = authkit_core::run(config, args, CLI_VERSION);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli(&AuthKitConfig).debug_assert();
    }

    #[test]
    fn test_cli_uses_product_name_and_description() {
        let cmd = cli(&AuthKitConfig);
        assert_eq!(cmd.get_name(), "authkit");
        assert_eq!(
            cmd.get_about().map(|a| a.to_string()),
            Some(AuthKitConfig.cli_description().to_string())
        );
    }

    #[test]
    fn test_version_flag_and_subcommand() {
        for flag in ["--version", "-V"] {
            let matches = cli(&AuthKitConfig)
                .try_get_matches_from(["authkit", flag])
                .unwrap();
            let args = Args::from_arg_matches(&matches).unwrap();
            assert!(args.version);
            assert!(args.command.is_none());
        }

        let args = Args::parse_from(["authkit", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
        assert_eq!(
            version_line(&AuthKitConfig),
            format!("AuthKit CLI version {}", CLI_VERSION)
        );
    }

    #[test]
    fn test_parse_init_flags() {
        let args = Args::parse_from(["authkit", "init", "--skip-env-check", "--templates-dir", "tpl"]);
        assert_eq!(args.templates_dir, Some(PathBuf::from("tpl")));
        assert!(matches!(
            args.command,
            Some(Command::Init(CliInitArgs { skip_env_check: true }))
        ));
    }

    #[test]
    fn test_parse_info_requires_template() {
        assert!(Args::try_parse_from(["authkit", "info"]).is_err());
        let args = Args::try_parse_from(["authkit", "info", "Express-Prisma"]).unwrap();
        assert!(matches!(args.command, Some(Command::Info(ref t)) if t.template == "Express-Prisma"));
    }

    #[test]
    fn test_next_steps_mention_project() {
        let steps = AuthKitConfig.next_steps(Path::new("/nonexistent/my-app"), "my-app");
        assert_eq!(steps[0], "cd my-app");
        assert!(steps.last().unwrap().contains("README.md"));
    }
}
