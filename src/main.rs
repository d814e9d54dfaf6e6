mod catalog;
mod cli_messages;
mod config;
mod consts;
mod events;
mod format;
mod logging;
mod ui;

use crate::catalog::{Catalog, StarId};
use crate::config::{Config, get_config_path};
use crate::format::to_fixed;
use crate::ui::detail::DetailSheet;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::{Path, PathBuf};
use std::{error::Error, fs, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive HR diagram
    Start {
        /// JSON catalog to load instead of the configured or built-in one
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,

        /// Paint the dark background behind the UI (true or false)
        #[arg(long, value_name = "BOOL")]
        with_background: Option<bool>,
    },
    /// Print every star of the catalog with its diagram coordinates
    List {
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
    /// Print the full detail sheet of one star
    Show {
        /// Star id, as printed by `list`
        id: String,

        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
    /// Remember a JSON catalog for later runs
    SetCatalog {
        path: PathBuf,
    },
    /// Clear the configuration file.
    Reset,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            catalog,
            with_background,
        } => {
            let config = load_config(&config_path);
            let catalog = open_catalog(catalog.or(config.catalog_path).as_deref())?;
            start(
                catalog,
                with_background.unwrap_or(config.with_background_color),
            )
        }
        Command::List { catalog } => {
            let config = load_config(&config_path);
            let catalog = open_catalog(catalog.or(config.catalog_path).as_deref())?;
            println!(
                "{:<18} {:<22} {:>5} {:>7} {:>7}",
                "ID", "NOMBRE", "CLASE", "B-V", "M_V"
            );
            for star in catalog.stars() {
                println!(
                    "{:<18} {:<22} {:>5} {:>7} {:>7}",
                    star.id.as_str(),
                    star.name,
                    star.spectral_class.to_string(),
                    to_fixed(star.color_index, 2),
                    to_fixed(star.absolute_magnitude, 2)
                );
            }
            Ok(())
        }
        Command::Show { id, catalog } => {
            let config = load_config(&config_path);
            let catalog = open_catalog(catalog.or(config.catalog_path).as_deref())?;
            match catalog.get(&StarId::new(id.as_str())) {
                Some(star) => {
                    print!("{}", DetailSheet::for_star(star));
                    Ok(())
                }
                None => {
                    print_cmd_error!("Unknown star id.", "{}", id);
                    Err(Box::from(format!("No star with id '{}' in the catalog", id)))
                }
            }
        }
        Command::SetCatalog { path } => {
            let catalog = open_catalog(Some(path.as_path()))?;
            let path = fs::canonicalize(&path)?;
            let config = Config::new(
                Some(path.clone()),
                load_config(&config_path).with_background_color,
            );
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            log::info!("Catalog set to {}", path.display());
            print_cmd_success!(
                "Catalog saved.",
                "{} ({} stars)",
                path.display(),
                catalog.len()
            );
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Clearing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Reads the configuration, warning and falling back to defaults if it is unreadable.
fn load_config(path: &Path) -> Config {
    Config::load_or_default(path).unwrap_or_else(|e| {
        print_cmd_warn!("Ignoring unreadable configuration.", "{}", e);
        Config::default()
    })
}

fn open_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn Error>> {
    Catalog::load(path).map_err(|e| {
        print_cmd_error!("Failed to load catalog.", "{}", e);
        e.into()
    })
}

/// Runs the interactive diagram until the user quits.
///
/// # Arguments
/// * `catalog` - Stars to plot.
/// * `with_background` - Whether to enable background colors
fn start(catalog: Catalog, with_background: bool) -> Result<(), Box<dyn Error>> {
    log::info!("Starting diagram with {} stars", catalog.len());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(catalog, ui::UIConfig::new(with_background));
    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
