use crate::app::cli::args::{Args, Command};
use crate::app::cli::settings::UserSettings;
use crate::app::commands;
use crate::app::error::{AppError, AppResult};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{init_logging, level_for_verbosity, set_log_level, LogSettings};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Parse arguments, initialise logging and run the requested command
///
/// Returns the process exit code.
pub fn startup() -> i32 {
    let terminal = std::io::stdout().is_terminal();
    let args = Args::parse_with_styles(terminal);

    let settings = match UserSettings::load(args.config_file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let use_color = args
        .color_choice()
        .or(settings.log.color)
        .unwrap_or(terminal);
    colored::control::set_override(use_color);

    let log_settings = LogSettings {
        level: args.log_level.clone().or(settings.log.level),
        format: args.log_format.clone().or(settings.log.format),
        file: args.log_file.clone().or(settings.log.file),
        color: use_color,
    };
    if let Err(e) = init_logging(&log_settings) {
        eprintln!("Error: cannot initialise logging: {}", e);
        return 1;
    }
    if args.log_level.is_none() && args.verbosity() != 0 {
        if let Err(e) = set_log_level(level_for_verbosity(args.verbosity())) {
            log::warn!("Cannot change log level: {}", e);
        }
    }
    log::debug!("Arguments: {:?}", args);

    match run(&args, use_color) {
        Ok(()) => 0,
        Err(e) => {
            log_error_with_context(&e, e.context());
            1
        }
    }
}

/// Directory holding the build file, made absolute
fn project_dir(build_file: &Path) -> AppResult<PathBuf> {
    let parent = build_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let cwd = std::env::current_dir().map_err(AppError::ProjectDir)?;
    Ok(cwd.join(parent))
}

fn run(args: &Args, use_color: bool) -> AppResult<()> {
    if args.command == Command::Plugins {
        return commands::list_plugins(use_color);
    }

    let project_dir = project_dir(&args.build_file)?;
    let unit = commands::load_unit(&args.build_file, &project_dir)?;

    match &args.command {
        Command::Plugins => Ok(()),
        Command::Tasks => commands::list_tasks(unit, use_color),
        Command::Files {
            source_set,
            extension,
        } => commands::list_files(&unit, source_set, extension),
        Command::Run { tasks } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(AppError::Runtime)?;
            let summary = runtime.block_on(commands::run_tasks(unit, tasks))?;
            commands::print_summary(&summary, use_color);
            Ok(())
        }
    }
}
