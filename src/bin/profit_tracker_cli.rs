use std::{
    env,
    io::{self, IsTerminal},
    process,
};

use profit_tracker::{
    cli::{self, CliError, Command},
    config::ConfigManager,
    init,
    storage::JsonFileRepository,
    RecordStore,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let command = Command::parse(env::args().skip(1))?;

    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let repository = JsonFileRepository::new(config_manager.base_dir(), &config.storage_key)?;
    let mut store = RecordStore::open(Box::new(repository), config);

    let stdout = io::stdout();
    let colour = stdout.is_terminal();
    let mut out = stdout.lock();
    cli::run(command, &mut store, &mut out, colour)
}
