use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.student.clone(), cli.test)?;

    println!("⚙️  Initializing coursedesk…");
    println!("🗄️  Database   : {}", cfg.database);

    let pool = DbPool::open(&cfg.database)?;

    audit_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
