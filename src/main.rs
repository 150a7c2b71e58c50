use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use npp_script::{Encoding, Error, MemoryHost, Result, ScriptEngine, Settings};

const USAGE: &str = "usage: npp-script <script.rhai | name> <file> [--ansi]";

struct Args {
    script: String,
    file: PathBuf,
    encoding: Encoding,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut encoding = Encoding::Utf8;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--ansi" => encoding = Encoding::Legacy,
            "-h" | "--help" => return Err(Error::Usage(USAGE.to_string())),
            _ => positional.push(arg),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([script, file]) => Ok(Args {
            script,
            file: PathBuf::from(file),
            encoding,
        }),
        Err(_) => Err(Error::Usage(USAGE.to_string())),
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args, settings: Settings) -> Result<()> {
    let original = fs::read(&args.file)?;
    let host = MemoryHost::from_file_bytes(args.file.clone(), original.clone(), args.encoding);
    let mut engine = ScriptEngine::new(host, settings);

    // A path runs directly, a bare name is looked up in the scripts directory
    let script = Path::new(&args.script);
    if script.is_file() {
        engine.load_file(script)?;
    } else {
        engine.run_named(&args.script)?;
    }

    let session = engine.session();
    let session = session.read().map_err(|_| Error::SessionPoisoned)?;

    match session.host().document_bytes(&args.file) {
        Some(bytes) if bytes != original.as_slice() => {
            fs::write(&args.file, bytes)?;
            tracing::info!(file = %args.file.display(), "document updated");
        }
        Some(_) => tracing::debug!(file = %args.file.display(), "document unchanged"),
        None => tracing::warn!(file = %args.file.display(), "document was closed by the script"),
    }

    Ok(())
}

fn main() -> ExitCode {
    // Logging depends on the settings; report a bad file once it is up
    let (settings, load_error) = match Settings::try_load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(&settings);
    if let Some(e) = load_error {
        let path = Settings::settings_file().unwrap_or_default();
        tracing::warn!(path = %path.display(), error = %e, "using default settings");
    }

    let result = parse_args().and_then(|args| run(args, settings));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
