use std::path::PathBuf;

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command, CreateArgs};
use crate::config::{self, ScaffoldConfig};
use crate::scaffold::{GoModInit, ModuleInit, ScaffoldError, Scaffolder, Step};

struct CliContext {
    config: Option<PathBuf>,
    dry_run: bool,
}

impl From<&Cli> for CliContext {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            dry_run: cli.dry_run,
        }
    }
}

impl CliContext {
    fn load_config(&self) -> Result<ScaffoldConfig> {
        let explicit = self
            .config
            .clone()
            .map(|path| {
                Utf8PathBuf::from_path_buf(path).map_err(|_| anyhow!("config path not valid UTF-8"))
            })
            .transpose()?;
        let (config, source) = config::resolve(explicit.as_deref())?;
        debug!(
            source = source.as_str(),
            path = ?source.path(),
            go_binary = %config.go_binary,
            "configuration loaded"
        );
        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from(&cli);

    match cli.command {
        Command::Create(args) => {
            let config = ctx.load_config()?;
            let scaffolder = Scaffolder::new(GoModInit::new(config.go_binary));
            handle_create(&ctx, &scaffolder, &args)
        }
    }
}

fn handle_create<M: ModuleInit>(
    ctx: &CliContext,
    scaffolder: &Scaffolder<M>,
    args: &CreateArgs,
) -> Result<()> {
    if ctx.dry_run {
        let plan = scaffolder.plan(&args.name, &args.path)?;
        let total = plan.len();
        for (idx, step) in plan.iter().enumerate() {
            println!("[dry-run] [{}/{}] {}: {}", idx + 1, total, step.step, step);
        }
        return Ok(());
    }

    let project = scaffolder
        .create(&args.name, &args.path)
        .inspect_err(report_partial)?;
    info!(root = %project.root, "done");
    println!("Creating Project {} at {}", project.name, project.parent);
    Ok(())
}

/// Nothing is rolled back, so point at what was left behind.
fn report_partial(err: &ScaffoldError) {
    if let Some(step) = partial_tree_step(err) {
        warn!(%step, "scaffolding stopped part-way; remove the project directory before retrying");
    }
}

/// The failed step, if the project directory had already been created by then.
fn partial_tree_step(err: &ScaffoldError) -> Option<Step> {
    err.step().filter(|step| *step != Step::CreateProjectDir)
}
