use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, path::PathBuf, time::Duration};

use nestnote::model::{Level, Model, Selection};
use nestnote::submit::{self, CollectingNotifier, Notice, Notifier};
use nestnote::vault::{LocalVault, MemoryVault, Vault, VaultCall};

/// Create a note inside up to three nested vault folders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vault directory (default: `vault_root` from config, then the current directory)
    vault: Option<PathBuf>,

    /// Enable debug logging to <temp dir>/nestnote-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Create the note without the interactive form
    #[arg(long, value_name = "FILE_NAME")]
    name: Option<String>,

    /// First level folder for --name
    #[arg(long, requires = "name")]
    first: Option<String>,

    /// Second level folder for --name
    #[arg(long, requires = "name")]
    second: Option<String>,

    /// Third level folder for --name
    #[arg(long, requires = "name")]
    third: Option<String>,

    /// With --name, print what would be created without touching the vault
    #[arg(long, requires = "name")]
    dry_run: bool,
}

mod app;
mod config;
mod handlers;
mod ui;
mod utils;

use config::Config;

pub struct App {
    pub model: Model,

    vault: Box<dyn Vault>,
    config: Config,
}

impl App {
    async fn new(config: Config, vault: Box<dyn Vault>) -> Result<Self> {
        let mut app = App {
            model: Model::new(),
            vault,
            config,
        };
        app.open_dialog().await;
        Ok(app)
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key).await
    }
}

/// Route `log` output to the debug file; stays silent without --debug
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    // The terminal belongs to the form, so logs never go to stderr
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    info!("Debug mode enabled, logging to {}", log_path.display());
    Ok(())
}

fn resolve_vault_root(args_vault: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let root = match args_vault.or_else(|| config.vault_root.clone()) {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    if !root.is_dir() {
        anyhow::bail!("Vault directory not found: {}", root.display());
    }
    Ok(root)
}

/// Prints notices for the non-interactive mode
struct ConsoleNotifier {
    failed: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        if notice.is_error() {
            self.failed = true;
            eprintln!("{}", notice.message);
        } else {
            println!("{}", notice.message);
        }
    }
}

fn selection_from_args(args: &Args, name: &str) -> Selection {
    [
        (Level::First, &args.first),
        (Level::Second, &args.second),
        (Level::Third, &args.third),
    ]
    .into_iter()
    .fold(Selection::new().with_file_name(name), |selection, (level, value)| {
        selection.with_level(level, value.clone())
    })
}

/// What a dry run would have changed, one line per created entry
fn preview_lines(calls: &[VaultCall]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|call| match call {
            VaultCall::CreateFolder(path) => Some(format!("would create folder {}", path)),
            VaultCall::CreateFile(path) => Some(format!("would create file {}", path)),
            _ => None,
        })
        .collect()
}

async fn run_headless(args: &Args, name: &str, vault: LocalVault, config: &Config) -> Result<()> {
    let selection = selection_from_args(args, name);
    let options = config.submit_options();
    let mut notifier = ConsoleNotifier { failed: false };

    if args.dry_run {
        let entries = vault
            .list_entries()
            .await
            .with_context(|| format!("Failed to list {}", vault.root().display()))?;
        let preview = MemoryVault::from_entries(entries);
        let mut collected = CollectingNotifier::default();
        submit::submit(&selection, &preview, &mut collected, &options).await;

        for line in preview_lines(&preview.calls()) {
            println!("{}", line);
        }
        // Success notices would claim a file exists; only errors are relevant
        for notice in collected.notices.into_iter().filter(Notice::is_error) {
            notifier.notify(notice);
        }
    } else {
        submit::submit(&selection, &vault, &mut notifier, &options).await;
    }

    if notifier.failed {
        anyhow::bail!("No note was created");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Determine config file path; none found means defaults
    let config = match config::get_config_path(args.config.clone())? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let root = resolve_vault_root(args.vault.clone(), &config)?;
    info!("Using vault at {}", root.display());
    let vault = LocalVault::new(root, config.open_command.clone());

    if let Some(name) = args.name.clone() {
        return run_headless(&args, &name, vault, &config).await;
    }

    // Initialize app
    let mut app = App::new(config, Box::new(vault)).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_selection_from_args() {
        let args = parse(&["nestnote", "--name", "todo", "--first", "A", "--second", "B"]);
        let selection = selection_from_args(&args, "todo");
        assert_eq!(selection.file_name(), "todo");
        assert_eq!(selection.level(Level::First), Some("A"));
        assert_eq!(selection.level(Level::Second), Some("B"));
        assert_eq!(selection.level(Level::Third), None);
    }

    #[test]
    fn test_level_flags_require_name() {
        assert!(Args::try_parse_from(["nestnote", "--first", "A"]).is_err());
        assert!(Args::try_parse_from(["nestnote", "--dry-run"]).is_err());
    }

    #[test]
    fn test_vault_positional() {
        let args = parse(&["nestnote", "/tmp/notes", "-d"]);
        assert_eq!(args.vault, Some(PathBuf::from("/tmp/notes")));
        assert!(args.debug);
    }

    fn headless(argv: &[&str], dir: &std::path::Path) -> (Args, LocalVault) {
        (parse(argv), LocalVault::new(dir, None))
    }

    #[tokio::test]
    async fn test_dry_run_leaves_vault_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("A")).unwrap();
        let argv = ["nestnote", "--name", "n", "--first", "A", "--second", "B", "--dry-run"];
        let (args, vault) = headless(&argv, dir.path());

        run_headless(&args, "n", vault, &Config::default()).await.unwrap();

        assert!(!dir.path().join("A/B").exists());
        assert!(!dir.path().join("A/B/n.md").exists());
    }

    #[test]
    fn test_preview_lines_list_created_entries() {
        let calls = [
            VaultCall::FolderExists("A".to_string()),
            VaultCall::FolderExists("A/B".to_string()),
            VaultCall::CreateFolder("A/B".to_string()),
            VaultCall::CreateFile("A/B/n.md".to_string()),
            VaultCall::OpenInEditor("A/B/n.md".to_string()),
        ];
        assert_eq!(
            preview_lines(&calls),
            vec!["would create folder A/B", "would create file A/B/n.md"]
        );
    }

    #[tokio::test]
    async fn test_headless_creates_note() {
        let dir = tempfile::tempdir().unwrap();
        let (args, vault) = headless(&["nestnote", "--name", "n", "--first", "A"], dir.path());

        run_headless(&args, "n", vault, &Config::default()).await.unwrap();

        assert!(dir.path().join("A/n.md").is_file());
    }

    #[tokio::test]
    async fn test_headless_failures_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("n.md"), "keep").unwrap();

        let (args, vault) = headless(&["nestnote", "--name", ""], dir.path());
        assert!(run_headless(&args, "", vault, &Config::default()).await.is_err());

        let (args, vault) = headless(&["nestnote", "--name", "n"], dir.path());
        assert!(run_headless(&args, "n", vault, &Config::default()).await.is_err());
        assert_eq!(std::fs::read_to_string(dir.path().join("n.md")).unwrap(), "keep");

        // A dry run reports the same failure
        let (args, vault) = headless(&["nestnote", "--name", "n", "--dry-run"], dir.path());
        assert!(run_headless(&args, "n", vault, &Config::default()).await.is_err());
    }

    #[test]
    fn test_missing_vault_root_is_an_error() {
        let config = Config::default();
        let missing = PathBuf::from("/definitely/not/a/vault");
        assert!(resolve_vault_root(Some(missing), &config).is_err());
    }
}
