//! # BarberHub Marketplace Entry Point
//!
//! Usage: `barberhub [CONFIG_PATH]`
//!
//! The real work lives in `lib.rs` so the mobile shell and the tests share it.

fn main() {
    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    if let Err(err) = barberhub_marketplace::run(config_path) {
        eprintln!("barberhub: {err}");
        std::process::exit(1);
    }
}
