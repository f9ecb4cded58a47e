mod bootstrap;
mod core;
mod loader;
mod paths;
mod session;
mod winprop;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use argh::FromArgs;
use ionconf_table::Table;
use tracing_subscriber::EnvFilter;

use crate::core::{BindMaps, ClientWin, State};
use crate::loader::JsonScriptLoader;
use crate::paths::SearchPaths;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ionconf - window manager settings and configuration bootstrap
#[derive(FromArgs)]
struct Cli {
    /// main configuration to load (default: cfg_notion)
    #[argh(option, short = 'c')]
    config: Option<String>,
    /// extra directory to search for configuration scripts
    #[argh(option, short = 'd')]
    dir: Vec<PathBuf>,
    /// session directory override
    #[argh(option)]
    sessiondir: Option<PathBuf>,
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Check(CheckCmd),
    Get(GetCmd),
    Paths(PathsCmd),
    Save(SaveCmd),
    Restore(RestoreCmd),
    Winprop(WinpropCmd),
    Layout(LayoutCmd),
    Version(VersionCmd),
}

/// Load the configuration and report whether it is complete
#[derive(FromArgs)]
#[argh(subcommand, name = "check")]
struct CheckCmd {}

/// Load the configuration and print the resulting settings
#[derive(FromArgs)]
#[argh(subcommand, name = "get")]
struct GetCmd {}

/// Print the configuration search paths
#[derive(FromArgs)]
#[argh(subcommand, name = "paths")]
struct PathsCmd {}

/// Load the configuration and write the settings to a session save file
#[derive(FromArgs)]
#[argh(subcommand, name = "save")]
struct SaveCmd {
    /// save file name, without directory or extension
    #[argh(positional)]
    basename: String,
}

/// Load the configuration, apply a session save file and print the settings
#[derive(FromArgs)]
#[argh(subcommand, name = "restore")]
struct RestoreCmd {
    /// save file name, without directory or extension
    #[argh(positional)]
    basename: String,
}

/// Look up window properties for a client window
#[derive(FromArgs)]
#[argh(subcommand, name = "winprop")]
struct WinpropCmd {
    /// window class
    #[argh(option)]
    class: String,
    /// window instance
    #[argh(option, default = "String::new()")]
    instance: String,
    /// window role
    #[argh(option)]
    role: Option<String>,
}

/// Look up a named layout
#[derive(FromArgs)]
#[argh(subcommand, name = "layout")]
struct LayoutCmd {
    /// layout name
    #[argh(positional)]
    name: String,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    let Some(command) = cli.command else {
        let args: Vec<&str> = vec!["ionconf", "--help"];
        if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
            println!("{}", e.output);
        }
        return Ok(());
    };

    if let SubCommand::Version(_) = command {
        println!("ionconf {}", VERSION);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut paths = SearchPaths::from_env();
    let overrides = path_overrides(&paths, &cli.dir, cli.sessiondir.as_deref());
    if !paths.set_paths(&overrides) {
        bail!("invalid search path override");
    }

    if let SubCommand::Paths(_) = command {
        print_table(&paths.get_paths())?;
        return Ok(());
    }

    let mut state = State::new(paths);
    let mut loader = JsonScriptLoader::new();
    let report = bootstrap::read_main_config(&mut state, &mut loader, cli.config.as_deref());

    match command {
        SubCommand::Check(_) => {
            println!("main configuration loaded: {}", report.main_loaded);
            println!("empty bindmaps: {}", report.empty_bindmaps);
            if let Some(ok) = report.fallback_loaded {
                println!("fallback loaded: {}", ok);
            }
            for ctx in BindMaps::CONTEXTS {
                if let Some(map) = state.bindmaps.get(ctx) {
                    println!("{} bindings: {}", ctx, map.nbindings());
                }
            }
            let callbacks = state.callbacks();
            println!("winprop provider: {}", callbacks.has_winprop_fn());
            println!("layout provider: {}", callbacks.has_layout_fn());
            if !report.success() {
                std::process::exit(1);
            }
        }
        SubCommand::Get(_) => print_table(&state.get())?,
        SubCommand::Save(cmd) => {
            if cmd.basename.contains(['/', '.']) {
                bail!("save file name must not contain a directory or extension");
            }
            session::write_savefile(&state.paths, &cmd.basename, &state.get())?;
        }
        SubCommand::Restore(cmd) => {
            let saved = session::read_savefile(&state.paths, &cmd.basename)?;
            state.set(&saved);
            print_table(&state.get())?;
        }
        SubCommand::Winprop(cmd) => {
            let mut cwin = ClientWin::new(0, cmd.class, cmd.instance);
            if let Some(role) = cmd.role {
                cwin = cwin.with_role(role);
            }
            match state.callbacks().get_winprop(&cwin) {
                Some(props) => print_table(&props)?,
                None => std::process::exit(1),
            }
        }
        SubCommand::Layout(cmd) => match state.callbacks().get_layout(&cmd.name) {
            Some(layout) => print_table(&layout)?,
            None => std::process::exit(1),
        },
        SubCommand::Paths(_) | SubCommand::Version(_) => unreachable!("handled above"),
    }

    Ok(())
}

/// Paths table putting `dirs` ahead of the current search path.
fn path_overrides(paths: &SearchPaths, dirs: &[PathBuf], sessiondir: Option<&Path>) -> Table {
    let mut tab = Table::new();
    if !dirs.is_empty() {
        let searchpath: Vec<String> = dirs
            .iter()
            .chain(&paths.searchpath)
            .map(|p| p.display().to_string())
            .collect();
        tab.set("searchpath", searchpath.join(":"));
    }
    if let Some(dir) = sessiondir {
        tab.set("sessiondir", dir.display().to_string());
    }
    tab
}

fn print_table(tab: &Table) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(tab)?);
    Ok(())
}
