use anyhow::Context;
use recibos_cli::config::Config;
use recibos_cli::logrotate::{build_log_path, ensure_log_dir, trim_if_oversized};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::load(Path::new("recibos.toml"))?;

    // Rotate the log before the subscriber opens it for appending
    let log_dir = Path::new(&config.log.dir);
    ensure_log_dir(log_dir).context("creating log directory")?;
    let log_path = build_log_path(&program_name(), log_dir);
    trim_if_oversized(&log_path, config.log.max_lines, config.log.trim_block)
        .context("trimming log file")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    println!("Executando Gerador de Recibos");
    info!("=========================== starting new session ===========================");

    recibos_cli::run(&config)?;

    println!("Execução bem sucedida!");
    info!("=============== end of run ==============");
    Ok(())
}

/// File name of the running executable, used to derive the log name
fn program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string())
}
