//! attendbook main entrypoint.

use attendbook::run;
use attendbook::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
