use clap::{Parser as ClapParser, Subcommand};
use sqlcraft::{
    Case, DialectHint, EmitterConfig, EscapeKind, Quotes,
    cli::{self, CliError, InjectOptions},
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sqlcraft")]
#[command(about = "sqlcraft - build SQL injection payloads from a SQL tree")]
#[command(version)]
struct Cli {
    /// Log decisions made while rendering
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an injection payload
    Inject {
        /// Context of the vulnerable parameter: integer, decimal, string, list, column
        #[arg(short, long, default_value = "integer")]
        escape: EscapeKind,

        /// Seed value as JSON (e.g. '"admin"' or 42)
        #[arg(long)]
        seed: Option<String>,

        /// OR a JSON value onto the payload (repeatable; `true` is 1=1)
        #[arg(long = "or")]
        or: Vec<String>,

        /// AND a JSON value onto the payload (repeatable; `false` is 1=0)
        #[arg(long = "and")]
        and: Vec<String>,

        /// Append UNION SELECT with this many NULL columns
        #[arg(long)]
        union_nulls: Option<usize>,

        /// Append a stacked DROP TABLE statement
        #[arg(long)]
        drop_table: Option<String>,

        /// Always end the payload with the comment marker
        #[arg(short, long)]
        terminate: bool,

        /// Keyword case: none, lower, upper, random
        #[arg(long, default_value = "none")]
        case: Case,

        /// Quote style: single, double, tick
        #[arg(long, default_value = "single")]
        quotes: Quotes,

        /// Whitespace token (e.g. '/**/')
        #[arg(long, default_value = " ")]
        space: String,

        /// Target dialect name passed through to the emitter (e.g. mysql)
        #[arg(long)]
        syntax: Option<String>,

        /// Comment marker used for termination
        #[arg(long)]
        comment: Option<String>,

        /// Seed for random case
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Inject {
            escape,
            seed,
            or,
            and,
            union_nulls,
            drop_table,
            terminate,
            case,
            quotes,
            space,
            syntax,
            comment,
            rng_seed,
            json,
        } => {
            let config = EmitterConfig {
                case,
                space,
                quotes,
                syntax: syntax.map(DialectHint::new),
                comment,
                seed: rng_seed,
            };
            let options = InjectOptions {
                escape,
                seed,
                or,
                and,
                union_nulls,
                drop_table,
                terminate,
                config,
            };
            run_inject(&options, json)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_inject(options: &InjectOptions, json: bool) -> Result<(), CliError> {
    let payload = cli::execute_inject(options)?;

    if json {
        let output = serde_json::json!({
            "escape": options.escape.to_string(),
            "terminated": options.terminate,
            "payload": payload,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", payload);
    }
    Ok(())
}
