use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_operation};
use crate::utils::table::truncate;
use unicode_width::UnicodeWidthStr;

const OP_MAX_WIDTH: usize = 48;

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).width())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        println!("📜 Internal log:\n");

        for e in &entries {
            // Only the operation word is coloured; padding is computed on the plain text.
            let plain = truncate(&op_target(e), op_w);
            let padding = " ".repeat(op_w.saturating_sub(plain.width()));
            let colored = match plain.split_once(' ') {
                Some((op, rest)) => {
                    format!("{}{op}{RESET} {rest}", color_for_operation(&e.operation))
                }
                None => format!("{}{plain}{RESET}", color_for_operation(&e.operation)),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
