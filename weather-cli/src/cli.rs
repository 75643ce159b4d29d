use std::{ffi::OsString, io::Write};

use anyhow::Context;
use chrono::Utc;
use clap::{CommandFactory, Parser, error::ErrorKind};
use weather_core::{Options, Units, WeatherError, WeatherProvider, WeatherRequest, format};

/// Long flags that take a value.
const VALUE_FLAGS: &[&str] = &["key", "units"];
/// Long flags without a value.
const SWITCHES: &[&str] = &["help", "version"];

pub const EXIT_SUCCESS: u8 = 0;
/// Network, protocol, decode or output failure.
pub const EXIT_FAILURE: u8 = 1;
/// Bad flags or missing configuration; reported with the help text.
pub const EXIT_USAGE: u8 = 2;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "weather displays the current weather of a city.",
    override_usage = "weather [OPTIONS] <CITY-NAME>..."
)]
pub struct Cli {
    /// OpenWeather API key [default: $OPENWEATHER_API_KEY]
    #[arg(long, value_name = "KEY", allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Verbose output.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Units of measurement (metric|imperial).
    #[arg(long, value_name = "UNITS", default_value = "metric", value_parser = parse_units)]
    pub units: Units,

    /// City name; several words are joined with spaces.
    #[arg(value_name = "CITY-NAME", trailing_var_arg = true)]
    pub city: Vec<String>,
}

fn parse_units(value: &str) -> Result<Units, WeatherError> {
    value.parse()
}

impl Cli {
    /// Parse a full argument list (program name first).
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args.into_iter().map(Into::into)))
    }

    /// Validate into [`Options`]. An explicit `-key` wins over `env_api_key`.
    pub fn into_options(self, env_api_key: Option<String>) -> Result<Options, WeatherError> {
        Options::new(self.key.or(env_api_key), self.units, self.verbose, &self.city)
    }
}

/// Rewrite single-dash long flags (`-key X`, `-units=imperial`, `-help`) into
/// the `--key` form clap understands. Stops at the first positional or `--`,
/// so anything after the city name is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut value_pending = false;

    for arg in args.by_ref() {
        if value_pending {
            out.push(arg);
            value_pending = false;
            continue;
        }

        let Some(flag) = arg.to_str().and_then(|s| s.strip_prefix('-')).filter(|s| !s.is_empty())
        else {
            out.push(arg);
            break;
        };

        if flag == "-" {
            out.push(arg);
            break;
        }

        let flag = flag.strip_prefix('-').unwrap_or(flag);
        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };

        if VALUE_FLAGS.contains(&name) {
            value_pending = !inline_value;
            out.push(format!("--{flag}").into());
        } else if SWITCHES.contains(&name) {
            out.push(format!("--{name}").into());
        } else {
            out.push(arg);
        }
    }

    out.extend(args);
    out
}

/// Run one invocation end to end and return the process exit status.
///
/// The report goes to `out`; every `ERROR:` line and the usage text go to
/// `err`. `make_provider` is only called once the options are valid.
pub async fn execute<I, T, F, O, E>(
    args: I,
    env_api_key: Option<String>,
    make_provider: F,
    out: &mut O,
    err: &mut E,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce(&Options) -> Box<dyn WeatherProvider>,
    O: Write,
    E: Write,
{
    let cmd = match Cli::parse_args(args) {
        Ok(cmd) => cmd,
        Err(parse_err) => return report_parse_error(&parse_err, out, err),
    };

    // Configuration errors stop here, before any network access.
    let options = match cmd.into_options(env_api_key) {
        Ok(options) => options,
        Err(config_err) => {
            tracing::debug!(error = %config_err, "rejected invocation");
            return usage_error(err, &config_err.to_string());
        }
    };

    tracing::debug!(
        city = %options.city,
        units = %options.units,
        verbose = options.verbose,
        "options resolved"
    );

    let provider = make_provider(&options);

    match run(provider.as_ref(), &options, out).await {
        Ok(()) => EXIT_SUCCESS,
        Err(run_err) => runtime_error(err, &run_err),
    }
}

/// Write `ERROR: <message>`, a blank line and the help text.
pub fn usage_error<E: Write>(err: &mut E, message: &str) -> u8 {
    let help = Cli::command().render_help();
    // Nowhere left to report a failed stderr write.
    let _ = writeln!(err, "ERROR: {message}\n\n{help}");
    EXIT_USAGE
}

/// Help and version requests go to `out` and succeed; everything else clap
/// rejects is a usage error.
pub fn report_parse_error<O: Write, E: Write>(
    parse_err: &clap::Error,
    out: &mut O,
    err: &mut E,
) -> u8 {
    match parse_err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            match write!(out, "{}", parse_err.render()).and_then(|()| out.flush()) {
                Ok(()) => EXIT_SUCCESS,
                Err(io_err) => {
                    let _ = writeln!(err, "ERROR: failed to write help: {io_err}");
                    EXIT_FAILURE
                }
            }
        }
        _ => {
            let rendered = parse_err.render().to_string();
            let message = rendered.lines().next().unwrap_or_default();
            usage_error(err, message.trim_start_matches("error: "))
        }
    }
}

pub fn runtime_error<E: Write>(err: &mut E, run_err: &anyhow::Error) -> u8 {
    let _ = writeln!(err, "ERROR: {run_err:#}");
    EXIT_FAILURE
}

/// Fetch, format and write the report. Nothing is written unless the whole
/// report was produced.
pub async fn run<W: Write>(
    provider: &dyn WeatherProvider,
    options: &Options,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = WeatherRequest::from(options);

    let reading = provider
        .current_weather(&request)
        .await
        .with_context(|| format!("failed to get weather for '{}'", options.city))?;

    let report = format::render(&reading, options, Utc::now());

    out.write_all(report.as_bytes()).context("failed to write weather report")?;
    out.flush().context("failed to write weather report")?;

    Ok(())
}
