use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use tox_asdf::asdf::{Asdf, SystemRunner, parse_versions};
use tox_asdf::config::{self, Config, HostConfig, Verbosity};
use tox_asdf::logging::{self, LogOptions};
use tox_asdf::resolver::PythonResolver;
use tox_asdf::version::best_version;

#[derive(Parser)]
#[command(name = "tox-asdf")]
#[command(version, about = "Resolve Python interpreters for tox environments through asdf")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Install the best available version when no installed version matches
    #[arg(long = "asdf-install", global = true)]
    asdf_install: bool,

    /// Fail instead of falling back to tox's built-in interpreter lookup
    #[arg(long = "asdf-no-fallback", global = true)]
    asdf_no_fallback: bool,

    /// Version used for `basepython = pypy`
    #[arg(long = "asdf-pypy2", global = true)]
    asdf_pypy2: Option<String>,

    /// Version used for `basepython = pypy3`
    #[arg(long = "asdf-pypy3", global = true)]
    asdf_pypy3: Option<String>,

    /// asdf executable to run
    #[arg(long = "asdf-bin", global = true, default_value = tox_asdf::asdf::ASDF_PROGRAM)]
    asdf_bin: String,

    /// Host configuration file (JSON with an `asdf` section)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the interpreter path for each tox basepython (empty line: use tox's default)
    Resolve {
        #[arg(required = true)]
        basepython: Vec<String>,
    },
    /// Print the best candidate matching a specifier (candidates are read from stdin if omitted)
    Best {
        specifier: String,
        candidates: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config {
        verbosity: Verbosity::from_count(cli.verbose),
        install: cli.asdf_install,
        no_fallback: cli.asdf_no_fallback,
        ..Config::default()
    };

    logging::init(&LogOptions {
        verbosity: config.verbosity,
        file: cli.log_file.clone(),
        json: cli.log_json,
    })?;

    match &cli.command {
        Command::Resolve { basepython } => {
            let config = load_config(&cli, config)?;
            resolve(&cli.asdf_bin, config, basepython)
        }
        Command::Best {
            specifier,
            candidates,
        } => best(specifier, candidates),
    }
}

/// Layer the host `[asdf]` section and the pypy overrides onto `base`
fn load_config(cli: &Cli, base: Config) -> anyhow::Result<Config> {
    let host = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::load_or_default(&config::config_path())?,
    };

    let mut config = base.with_host_config(&host);

    if let Some(pypy2) = &cli.asdf_pypy2 {
        config.pypy2_version = pypy2.clone();
    }
    if let Some(pypy3) = &cli.asdf_pypy3 {
        config.pypy3_version = pypy3.clone();
    }

    Ok(config)
}

fn resolve(asdf_bin: &str, config: Config, basepythons: &[String]) -> anyhow::Result<ExitCode> {
    let resolver = PythonResolver::new(Asdf::new(SystemRunner).with_program(asdf_bin), config);
    let mut stdout = io::stdout().lock();

    for basepython in basepythons {
        let python = resolver
            .get_python_executable(basepython.as_str())
            .with_context(|| format!("Failed to resolve {basepython}"))?;

        match python {
            Some(path) => writeln!(stdout, "{}", path.display())?,
            None => writeln!(stdout)?,
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn best(specifier: &str, candidates: &[String]) -> anyhow::Result<ExitCode> {
    let version = if candidates.is_empty() {
        let input = io::read_to_string(io::stdin())
            .context("Failed to read candidates from stdin")?;
        best_version(specifier, parse_versions(&input))
    } else {
        best_version(specifier, candidates)
    };

    match version {
        Some(version) => {
            writeln!(io::stdout(), "{version}")?;
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
