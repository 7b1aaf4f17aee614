//! Charm-style framing around the interactive scaffolder

use crate::error::Result;
use crate::product::ProductConfig;
use crate::runtime::check_env;
use crate::scaffold::{Scaffolded, Scaffolder};
use crate::templates::{TemplateManifest, TemplateRegistry};
use std::io;
use std::path::PathBuf;

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Templates root overriding the environment and product default
    pub templates_dir: Option<PathBuf>,

    /// Skip the template's required-tool check
    pub skip_env_check: bool,
}

/// Run the interactive init flow on stdin/stdout
pub fn run<C: ProductConfig>(config: &C, args: InitArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let registry = TemplateRegistry::from_config(config, args.templates_dir);
    cliclack::log::info(format!(
        "Using templates from {}",
        registry.root().display()
    ))?;
    if args.skip_env_check {
        cliclack::log::info("Skipping environment check")?;
    }

    let cwd = std::env::current_dir()?;
    let scaffolder = Scaffolder::new(registry, cwd)
        .skip_env_check(args.skip_env_check)
        .version_check(cli_version, config.upgrade_command());

    let stdin = io::stdin();
    let scaffolded = scaffolder.run(stdin.lock(), io::stdout())?;

    cliclack::log::success(format!(
        "Created {} files in {}",
        scaffolded.files.len(),
        scaffolded.project_dir.display()
    ))?;

    print_next_steps(config, &scaffolded)
}

/// Run a template's pre-flight check and report each resolved tool
pub fn run_check<C: ProductConfig>(
    config: &C,
    templates_dir: Option<PathBuf>,
    name: &str,
    cli_version: &str,
) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let registry = TemplateRegistry::from_config(config, templates_dir);
    let template = registry.lookup(name)?;
    let manifest = TemplateManifest::load(&template.path)?;

    if let Some(warning) = manifest.compatibility_warning(cli_version, config.upgrade_command()) {
        cliclack::log::warning(warning)?;
    }

    if manifest.requires.is_empty() {
        cliclack::log::info(format!(
            "{} has no required tools",
            template.display_name()
        ))?;
    }

    match check_env(&manifest.requires) {
        Ok(tools) => {
            for tool in &tools {
                cliclack::log::success(format!("{} ({})", tool.name, tool.path.display()))?;
            }
            cliclack::outro(format!("{} is ready to scaffold", template.display_name()))?;
            Ok(())
        }
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            Err(e)
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, scaffolded: &Scaffolded) -> Result<()> {
    let steps = config.next_steps(&scaffolded.project_dir, &scaffolded.project_name);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
