//! coursedesk main entrypoint.

use coursedesk::run;
use coursedesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
