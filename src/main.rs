//! helferlist main entrypoint.

use helferlist::run;
use helferlist::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
