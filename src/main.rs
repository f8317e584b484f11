use anyhow::Context;

use game_todo_list::{Config, app, logging};

fn main() -> anyhow::Result<()> {
    // Verbosity is fixed for the rest of the process from here on.
    let config = Config::from_env();
    logging::init(config.trace_level);

    let exit_code = app::run(&config).context("overlay window failed")?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
