use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use zooriddle::config::db::{DbOwner, DbProfile};
use zooriddle::infra::db::connect_db;

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
    fn from(command: Command) -> Self {
        match command {
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

/// In-memory SQLite is deliberately absent: the database would vanish as
/// soon as the command exits.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Zoo Riddle database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Postgres database to target (PROD_DB or TEST_DB)
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database engine
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,

    /// SQLite file path; defaults to SQLITE_FILE or zooriddle.sqlite
    #[arg(long)]
    sqlite_file: Option<String>,
}

impl Args {
    fn profile(&self) -> DbProfile {
        match (self.db, self.env) {
            (Db::SqliteFile, _) => DbProfile::SqliteFile {
                file: self.sqlite_file.clone(),
            },
            (Db::Postgres, Env::Prod) => DbProfile::Prod,
            (Db::Postgres, Env::Test) => DbProfile::Test,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,zooriddle=info,sqlx=warn")
        .init();

    let args = Args::parse();
    let profile = args.profile();

    // Schema changes run with the owner role, not the app role.
    let conn = match connect_db(&profile, DbOwner::Owner).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
