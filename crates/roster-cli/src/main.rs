mod command;
mod loader;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_module("roster", log::LevelFilter::Info)
        .filter_module("roster_analysis", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    command::run()
}
