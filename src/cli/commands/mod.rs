pub mod catalog;
pub mod config;
pub mod courses;
pub mod drop;
pub mod enroll;
pub mod export;
pub mod init;
pub mod log;
pub mod mark;
pub mod seed;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Opens the configured database as the active student's store.
pub(crate) fn open_store(cli: &Cli, cfg: &Config) -> AppResult<SqliteStore> {
    let student = cfg.active_student(cli.student.as_deref())?;
    let pool = DbPool::open(&cfg.database)?;
    Ok(SqliteStore::new(pool, &student))
}
