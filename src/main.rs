use clap::{Parser as ClapParser, Subcommand};
use sramp_query::cli::{self, CheckOptions, CheckResult, CliError, TranslateOptions};
use sramp_query::ReplacementParam;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "sramp-query")]
#[command(about = "S-RAMP artifact query language - parse, check and translate queries to JCR-SQL2")]
#[command(version)]
struct Cli {
    /// TOML schema overriding the built-in artifact types and properties
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a query to JCR-SQL2
    Translate {
        /// Query template (reads from stdin if not provided)
        query: Option<String>,

        /// Value for the next '?' placeholder, as TYPE:VALUE (e.g. s:foo, l:42)
        #[arg(short, long = "param")]
        params: Vec<ReplacementParam>,

        /// Reserved property to order results by
        #[arg(long)]
        order_by: Option<String>,

        /// Order descending instead of ascending
        #[arg(long, requires = "order_by")]
        descending: bool,
    },

    /// Validate a query
    Check {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Only validate syntax, don't translate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Fill in '?' placeholders and print the resulting query
    Format {
        /// Query template (reads from stdin if not provided)
        template: Option<String>,

        /// Value for the next '?' placeholder, as TYPE:VALUE
        #[arg(short, long = "param")]
        params: Vec<ReplacementParam>,
    },

    /// Print the parsed query as JSON
    Ast {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the query in canonical form
    Normalize {
        /// The query (reads from stdin if not provided)
        query: Option<String>,
    },

    /// Show documentation (lists categories when none is given)
    Docs {
        /// Category name
        category: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Translate {
            query,
            params,
            order_by,
            descending,
        } => {
            let schema = cli::load_schema(cli.schema.as_deref())?;
            let options = TranslateOptions {
                query: read_query(query)?,
                params,
                order_by,
                descending,
            };
            println!("{}", cli::execute_translate(&options, &schema)?);
        }
        Commands::Check { query, syntax_only } => {
            let schema = cli::load_schema(cli.schema.as_deref())?;
            let options = CheckOptions {
                query: read_query(query)?,
                syntax_only,
            };
            match cli::execute_check(&options, &schema)? {
                CheckResult::SyntaxValid => println!("Syntax is valid"),
                CheckResult::Valid => println!("Query is valid"),
            }
        }
        Commands::Format { template, params } => {
            println!("{}", cli::execute_format(&read_query(template)?, &params)?);
        }
        Commands::Ast { query, pretty } => {
            let schema = cli::load_schema(cli.schema.as_deref())?;
            println!("{}", cli::execute_ast(&read_query(query)?, &schema, pretty)?);
        }
        Commands::Normalize { query } => {
            let schema = cli::load_schema(cli.schema.as_deref())?;
            println!("{}", cli::execute_normalize(&read_query(query)?, &schema)?);
        }
        Commands::Docs { category: None } => print!("{}", cli::get_docs_overview()),
        Commands::Docs {
            category: Some(category),
        } => print!("{}", cli::get_doc_category(&category)?),
    }
    Ok(())
}

/// The query argument, or stdin when it is piped.
fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim().to_string())
        }
        None => Err(CliError::NoQuery),
    }
}
