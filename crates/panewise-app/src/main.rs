mod cli;

use std::process::ExitCode;

use panewise_common::{PaneId, PanewiseError, Request};
use panewise_config::PanewiseConfig;
use panewise_tiling::{Dispatcher, KittyWorkspace, Outcome, ProcessMatcher};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// kitty exports the id of the window a mapped kitten runs for.
const PANE_ENV: &str = "KITTY_WINDOW_ID";
const DEFAULT_LOG_DIRECTIVE: &str = "panewise=warn";

fn init_tracing(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file. An explicit `--config` path must load; the
/// default location falls back to built-in defaults.
fn load_config(args: &cli::Args) -> Result<PanewiseConfig, PanewiseError> {
    match &args.config {
        Some(path) => {
            tracing::debug!("Using config override: {}", path.display());
            Ok(panewise_config::load_config_from(Some(path.as_path()))?)
        }
        None => Ok(panewise_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            PanewiseConfig::default()
        })),
    }
}

fn resolve_pane(flag: Option<u32>, env: Option<&str>) -> Result<PaneId, PanewiseError> {
    if let Some(id) = flag {
        return Ok(PaneId(id));
    }
    env.and_then(|v| v.trim().parse().ok())
        .map(PaneId)
        .ok_or(PanewiseError::MissingArgument("pane"))
}

fn run(args: &cli::Args, config: &PanewiseConfig) -> Result<Outcome, PanewiseError> {
    let request = Request::from_args(args.request.as_slice())?;
    let pane = resolve_pane(args.pane, std::env::var(PANE_ENV).ok().as_deref())?;

    let workspace = KittyWorkspace::new(config.host.kitten.as_str())
        .listen_on(args.to.clone().or_else(|| config.host.listen_on.clone()))
        .protocol(config.keys.protocol);
    let matcher = ProcessMatcher::from_config(&config.redirect)?;

    Dispatcher::new(&workspace, &matcher, args.protocol).handle(&request, pane)
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = load_config(&args);
    let directive = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_tracing(&directive);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.dump_config {
        println!("{}", panewise_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(&args, &config) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
