mod config;

use config::Config;

use clap::Parser;
use colored::{control::set_override, Colorize};
use korstr_core::{FormatOptions, KorStr, TimeZoneSetting};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const LONG_ABOUT: &str = r##"
KorStr prints numbers, unix timestamps and durations as Korean text.

FORMATS:
  number    (num, su)          12345                   → 1만 2345
  datetime  (dt)               1609459200 --tz +09:00  → 2021년 01월 01일 9시 00분 00초
  date      (d)                1609459200 --tz +09:00  → 2021년 01월 01일
  time      (t)                1609459200 --tz +09:00  → 9시 00분 00초
  period    (duration, dur, p) 90061                   → 1일 1시간 1분 1초

EXAMPLES:
  korstr number 120034005678          1200억 3400만 5678
  korstr number 500 --unit 원 -S      500원
  korstr datetime 0 --tz utc          1970년 01월 01일 0시 00분 00초
  korstr period 90061                 1일 1시간 1분 1초
  korstr number 1_000_000 --json      JSON output for scripting

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting   | CLI flag        | Env var          | Default
  ----------|-----------------|------------------|---------
  timezone  | -z, --tz        | KORSTR_TZ        | local
  no_space  | -S, --no-space  | KORSTR_NO_SPACE  | false
  no_color  | -C, --no-color  | KORSTR_NO_COLOR  | false

  Config file location: korstr --config-path
  Generate default config: korstr --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "korstr")]
#[command(version)]
#[command(about = "Print numbers, timestamps and durations as Korean text")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Format to use: number, datetime, date, time, period (or an alias)
    #[arg(
        value_name = "FORMAT",
        required_unless_present_any = ["formats", "config_path", "config_init"]
    )]
    format: Option<String>,

    /// Integer input (`_` and `,` digit separators are allowed)
    ///
    /// A number for `number`, a unix timestamp in seconds for
    /// `datetime`/`date`/`time`, or a number of seconds for `period`.
    #[arg(
        value_name = "VALUE",
        value_parser = parse_value,
        allow_negative_numbers = true,
        required_unless_present_any = ["formats", "config_path", "config_init"]
    )]
    value: Option<i128>,

    /// Trailing unit for the number format (e.g. 원, 개, 명)
    #[arg(long, short = 'u')]
    unit: Option<String>,

    /// Join segments without spaces (1만2345)
    #[arg(long, short = 'S')]
    no_space: bool,

    /// Time zone for datetime/date/time: local, utc, or an offset like +09:00
    #[arg(long = "tz", short = 'z', value_name = "TZ")]
    timezone: Option<TimeZoneSetting>,

    /// Output the result as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// List all supported formats
    #[arg(long)]
    formats: bool,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows where each setting came from, -vv adds trace output.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

/// Parse an integer, ignoring `_` and `,` digit separators.
fn parse_value(s: &str) -> Result<i128, String> {
    let cleaned: String = s.chars().filter(|c| *c != '_' && *c != ',').collect();
    cleaned
        .parse::<i128>()
        .map_err(|_| format!("'{}' is not an integer", s))
}

fn print_formats() {
    let korstr = KorStr::new();
    let infos = korstr.format_infos();

    println!("{}", "Supported Formats".bold().underline());
    println!();

    for category in ["Numbers", "Time"] {
        let formats_in_cat: Vec<_> = infos.iter().filter(|f| f.category == category).collect();

        if formats_in_cat.is_empty() {
            continue;
        }

        println!("{} {}", "▶".blue(), category.green().bold());
        for info in formats_in_cat {
            print!("  {} {}", "→".cyan(), info.id.yellow());
            let aliases = korstr
                .find(info.id)
                .map(|f| f.aliases())
                .unwrap_or_default();
            if !aliases.is_empty() {
                print!(" {}", format!("({})", aliases.join(", ")).dimmed());
            }
            if !info.description.is_empty() {
                print!(" - {}", info.description);
            }
            println!();
            for (input, output) in info.examples {
                println!("      {}", format!("e.g. {} → {}", input.green(), output).dimmed());
            }
        }
        println!();
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("{}", "Cannot determine config directory".red());
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}", e.red());
                std::process::exit(1);
            }
        }
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    let timezone = if let Some(tz) = cli.timezone {
        tracing::debug!("timezone = {} (from CLI)", tz);
        tz
    } else {
        let (tz, source) = file_config.timezone();
        tracing::debug!("timezone = {} (from {})", tz, source);
        tz
    };

    let no_space = if cli.no_space {
        tracing::debug!("no_space = true (from CLI)");
        true
    } else {
        let (ns, source) = file_config.no_space();
        tracing::debug!("no_space = {} (from {})", ns, source);
        ns
    };

    let no_color = if cli.no_color {
        tracing::debug!("no_color = true (from CLI)");
        true
    } else {
        let nc = file_config.no_color();
        if nc {
            let source = if std::env::var("NO_COLOR").is_ok() {
                "env NO_COLOR"
            } else if std::env::var("KORSTR_NO_COLOR").is_ok() {
                "env KORSTR_NO_COLOR"
            } else {
                "config file"
            };
            tracing::debug!("no_color = true (from {})", source);
        }
        nc
    };

    if no_color {
        set_override(false);
    }

    if cli.formats {
        print_formats();
        return;
    }

    // Both are required by clap unless one of the early-exit flags was given
    let (Some(format), Some(value)) = (cli.format, cli.value) else {
        eprintln!("{}", "FORMAT and VALUE are required".red());
        std::process::exit(2);
    };

    let korstr = KorStr::with_options(FormatOptions {
        use_space: !no_space,
        unit: cli.unit,
        timezone,
    });

    match korstr.format(&format, value) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{} {}", "error:".red().bold(), e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", result.display);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
