//! Rotating log-file maintenance
//!
//! The log grows by appending one line per event; at every startup the
//! oldest block of lines is dropped once the file passes the threshold, so
//! it never grows unbounded while always keeping many complete sessions.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_LINES: usize = 5000;
pub const DEFAULT_TRIM_BLOCK: usize = 1000;

/// Create the log directory if it does not exist; idempotent
pub fn ensure_log_dir(dir: &Path) -> std::io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

/// Derive the log path from a source file name, under `dir`
///
/// The source's extension (if any) is replaced with `.log`:
/// `gerar-recibos` or `gerar-recibos.exe` both become `gerar-recibos.log`.
pub fn build_log_path(source_name: &str, dir: &Path) -> PathBuf {
    let base = Path::new(source_name)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("recibos"));

    dir.join(base.with_extension("log"))
}

/// Drop the oldest `trim_block` lines when the file exceeds `max_lines`
///
/// The surviving lines are written to a `*_temp.log` sibling which is then
/// renamed over the original, so an interruption never leaves a partial
/// log behind. A missing file or one at/under the threshold is a no-op.
pub fn trim_if_oversized(path: &Path, max_lines: usize, trim_block: usize) -> std::io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let line_count = BufReader::new(fs::File::open(path)?).lines().count();
    if line_count <= max_lines {
        return Ok(());
    }

    let temp_path = temp_path_for(path);
    {
        let reader = BufReader::new(fs::File::open(path)?);
        let mut writer = BufWriter::new(fs::File::create(&temp_path)?);
        for line in reader.lines().skip(trim_block) {
            writeln!(writer, "{}", line?)?;
        }
        writer.flush()?;
    }

    fs::rename(&temp_path, path)
}

/// `app.log` becomes `app_temp.log` next to the original
fn temp_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("recibos");
    path.with_file_name(format!("{stem}_temp.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_lines(path: &Path, count: usize) {
        let lines: String = (1..=count).map(|i| format!("line {i}\n")).collect();
        fs::write(path, lines).unwrap();
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_ensure_log_dir_creates_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("logs");

        ensure_log_dir(&target).unwrap();
        assert!(target.is_dir());
        ensure_log_dir(&target).unwrap();
    }

    #[test]
    fn test_build_log_path_replaces_extension() {
        let dir = Path::new("/var/log");
        assert_eq!(
            build_log_path("gerar-recibos.exe", dir),
            Path::new("/var/log/gerar-recibos.log")
        );
        assert_eq!(
            build_log_path("gerar-recibos", dir),
            Path::new("/var/log/gerar-recibos.log")
        );
    }

    #[test]
    fn test_build_log_path_keeps_only_file_name() {
        let dir = Path::new(".");
        assert_eq!(
            build_log_path("/usr/local/bin/gerar-recibos", dir),
            Path::new("./gerar-recibos.log")
        );
    }

    #[test]
    fn test_trim_drops_exactly_the_oldest_block() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("app.log");
        write_lines(&log, 5005);

        trim_if_oversized(&log, 5000, 1000).unwrap();

        let lines = read_lines(&log);
        assert_eq!(lines.len(), 4005);
        assert_eq!(lines[0], "line 1001");
        assert_eq!(lines.last().unwrap(), "line 5005");
    }

    #[test]
    fn test_trim_leaves_small_file_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("app.log");
        write_lines(&log, 5000);
        let before = fs::read(&log).unwrap();

        trim_if_oversized(&log, 5000, 1000).unwrap();

        assert_eq!(fs::read(&log).unwrap(), before);
    }

    #[test]
    fn test_trim_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        trim_if_oversized(&dir.path().join("absent.log"), 5000, 1000).unwrap();
    }

    #[test]
    fn test_trim_removes_the_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("app.log");
        write_lines(&log, 30);

        trim_if_oversized(&log, 10, 5).unwrap();

        assert_eq!(read_lines(&log).len(), 25);
        assert!(!dir.path().join("app_temp.log").exists());
    }

    #[test]
    fn test_trim_with_custom_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("app.log");
        write_lines(&log, 12);

        trim_if_oversized(&log, 10, 4).unwrap();

        let lines = read_lines(&log);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "line 5");
    }
}
