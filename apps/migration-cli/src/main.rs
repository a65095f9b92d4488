use clap::{Parser, ValueEnum};
use migration::MigrationCommand;
use tour_backend::config::db::{DbKind, RuntimeEnv};
use tour_backend::connect_db;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

/// In-memory SQLite is deliberately absent: a CLI run would migrate a
/// database that disappears when the process exits.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Tour scorekeeper database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,tour_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };
    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    let conn = match connect_db(env, db_kind).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
