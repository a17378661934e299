use anyhow::Result;
use clap::{Parser, Subcommand};
use svcs::areas::config::AUTHOR_ENV_VAR;
use svcs::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "SVCS_LOG";

const COMMANDS_HELP: &str = "These are SVCS commands:
config     Get and set a username.
add        Add a file to the index.
log        Show commit logs.
commit     Save changes.
checkout   Restore a file.";

#[derive(Parser)]
#[command(
    name = "svcs",
    version = "0.1.0",
    about = "A simple version control system",
    long_about = "Tracks files, snapshots their content into commits \
    and restores the working directory to any recorded commit.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
    disable_help_flag = true
)]
struct Cli {
    #[arg(short = 'h', long = "help", help = "Print the SVCS commands")]
    show_help: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "config",
        about = "Get and set a username",
        long_about = "Without an argument prints the configured username, \
        otherwise stores the given name as the author of future commits."
    )]
    Config {
        #[arg(index = 1, help = "The username to store")]
        name: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add a file to the index",
        long_about = "Tracks the given file in future commits. \
        Without an argument lists the tracked files."
    )]
    Add {
        #[arg(index = 1, help = "The path of the file to track")]
        path: Option<String>,
    },
    #[command(name = "log", about = "Show commit logs")]
    Log,
    #[command(
        name = "commit",
        about = "Save changes",
        long_about = "Snapshots every tracked file under an identifier derived from their content. \
        Nothing is recorded if the content did not change since the last commit."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore a file",
        long_about = "Overwrites the working files with their content at the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit id to restore")]
        id: Option<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?
        .with_author_override(std::env::var(AUTHOR_ENV_VAR).ok());
    repository.init()?;

    match &cli.command {
        _ if cli.show_help => println!("{}", COMMANDS_HELP),
        None => println!("{}", COMMANDS_HELP),
        Some(Commands::Config { name }) => repository.configure(name.as_deref())?,
        Some(Commands::Add { path }) => repository.add(path.as_deref())?,
        Some(Commands::Log) => repository.log()?,
        Some(Commands::Commit { message }) => repository.commit(message.as_deref())?,
        Some(Commands::Checkout { id }) => repository.checkout(id.as_deref())?,
        Some(Commands::Unknown(args)) => println!(
            "'{}' is not a SVCS command.",
            args.first().map(String::as_str).unwrap_or_default()
        ),
    }

    Ok(())
}
