mod app;

use std::process;

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = app::run() {
        log::error!("{err:#}");
        process::exit(1);
    }
}
