//! garmin2labradar main entrypoint.

use garmin2labradar::run;
use garmin2labradar::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(e.exit_code());
    }
}
