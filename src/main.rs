//! rattendance main entrypoint.

use rattendance::run;
use rattendance::ui::messages::{error, hint};

fn main() {
    if let Err(e) = run() {
        error(&e);
        if e.needs_login() {
            hint("Your session is no longer valid. Run `rattendance login --email <you>` again.");
        }
        std::process::exit(1);
    }
}
