//! kintai-checker main entrypoint.

use kintai_checker::run;
use kintai_checker::ui::messages::error;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
