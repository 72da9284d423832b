//! Command-line entry point for the locale store.

use std::io::{
    Read,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use anyhow::{
    Context,
    Result,
};
use clap::{
    Parser,
    Subcommand,
};
use i18n_store::batch::parse_batch;
use i18n_store::config::{
    self,
    StoreSettings,
};
use i18n_store::store::ApplyReport;
use i18n_store::{
    LocaleStore,
    TranslationSet,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "i18n-store")]
#[command(version)]
#[command(about = "Write translations into nested per-language JSON dictionaries")]
struct Cli {
    /// Directory holding the locale files (default: config `outputDir`, else `.`)
    #[arg(short, long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Settings file (default: `.i18n-store.json` in the current directory, if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing locale files
    Init,

    /// Set one key in every given language
    Set {
        /// Translation key, e.g. `settings.sync.title`
        key: String,

        /// Translations as `LANG=TEXT`, e.g. `en-us=Sync`
        #[arg(value_name = "LANG=TEXT", required = true, value_parser = parse_translation)]
        translations: Vec<(String, String)>,
    },

    /// Apply a batch of `{ key: { lang: text } }` from a file or `-` for stdin
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the value of a key in every language
    Get {
        key: String,
    },
}

fn parse_translation(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(lang, text)| (lang.to_string(), text.to_string()))
        .ok_or_else(|| format!("expected LANG=TEXT, got '{arg}'"))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn open_store(cli: &Cli) -> Result<LocaleStore> {
    let cwd = std::env::current_dir().context("resolving current directory")?;
    let settings: StoreSettings = config::resolve(cli.config.as_deref(), &cwd)?;

    let output_dir = cli
        .dir
        .clone()
        .or_else(|| settings.output_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    tracing::debug!(dir = %output_dir.display(), "Using output directory");

    Ok(LocaleStore::new(output_dir, settings))
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("reading batch from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

fn print_report(out: &mut impl Write, key: &str, report: &ApplyReport) -> Result<()> {
    if report.statuses.is_empty() {
        writeln!(out, "{key}: no supported languages given")?;
    }
    for (code, status) in &report.statuses {
        writeln!(out, "{code}: {status}")?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<bool> {
    let store = open_store(cli)?;
    let mut out = std::io::stdout().lock();

    match &cli.command {
        Commands::Init => {
            store.ensure()?;
            writeln!(out, "Locale files ready in {}", store.output_dir().display())?;
            Ok(true)
        }
        Commands::Set { key, translations } => {
            let translations: TranslationSet = translations.iter().cloned().collect();
            let report = store.apply(key, &translations)?;
            print_report(&mut out, key, &report)?;
            Ok(!report.has_failures())
        }
        Commands::Import { file } => {
            let batch = parse_batch(&read_input(file)?)?;
            tracing::debug!(keys = batch.len(), "Importing batch");

            let mut ok = true;
            for (key, translations) in &batch {
                let report = store.apply(key, translations)?;
                print_report(&mut out, key, &report)?;
                ok &= !report.has_failures();
            }
            Ok(ok)
        }
        Commands::Get { key } => {
            for (code, value) in store.get(key) {
                match value {
                    Some(value) => writeln!(out, "{code}: {value}")?,
                    None => writeln!(out, "{code}: <missing>")?,
                }
            }
            Ok(true)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if run(&cli)? { Ok(ExitCode::SUCCESS) } else { Ok(ExitCode::FAILURE) }
}
