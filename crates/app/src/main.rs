use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use inspect_core::model::LevelId;
use services::{LevelCatalog, SessionLoopService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLevelId { raw: String },
    UnknownLevel(LevelId),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLevelId { raw } => write!(f, "invalid --level value: {raw:?}"),
            ArgsError::UnknownLevel(id) => write!(f, "no level with id {id} in the catalog"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<LevelCatalog>,
    session_loop: Arc<SessionLoopService>,
    initial_level: Option<LevelId>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<LevelCatalog> {
        Arc::clone(&self.catalog)
    }

    fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    fn initial_level(&self) -> Option<LevelId> {
        self.initial_level.clone()
    }
}

#[derive(Debug, Default)]
struct Args {
    level: Option<LevelId>,
    catalog: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--level <id>] [--catalog <path.json>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --level    open this level instead of the start screen (easy, medium, hard)");
    eprintln!("  --catalog  load levels from a JSON file instead of the bundled ones");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INSPECT_LEVEL, INSPECT_CATALOG, RUST_LOG (default: info)");
}

fn parse_level(raw: String) -> Result<LevelId, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidLevelId { raw })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut level = std::env::var("INSPECT_LEVEL")
            .ok()
            .map(parse_level)
            .transpose()?;
        let mut catalog = std::env::var_os("INSPECT_CATALOG").map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--level" => {
                    level = Some(parse_level(require_value(args, "--level")?)?);
                }
                "--catalog" => {
                    catalog = Some(PathBuf::from(require_value(args, "--catalog")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { level, catalog })
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<LevelCatalog, Box<dyn std::error::Error>> {
    let catalog = match path {
        Some(path) => LevelCatalog::from_path(path)?,
        None => LevelCatalog::builtin()?,
    };
    log::info!("catalog ready with {} levels", catalog.len());
    Ok(catalog)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Fail fast on a bad catalog or level before any window opens.
    let catalog = Arc::new(load_catalog(parsed.catalog.as_ref())?);
    if let Some(level) = parsed.level.as_ref() {
        if !catalog.contains(level) {
            return Err(ArgsError::UnknownLevel(level.clone()).into());
        }
    }

    let session_loop = Arc::new(SessionLoopService::new(Arc::clone(&catalog)));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        session_loop,
        initial_level: parsed.level,
    });
    let context = build_app_context(&app);

    // Keep the quiz window a normal window; some macOS dev builds pin it above others.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Inspect")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
