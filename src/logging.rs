use chrono::Local;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the process logger from `IBAN_LOG_LEVEL`/`RUST_LOG` and `IBAN_LOG_DIR`.
pub fn init_logging(app_name: &str) -> Result<(), String> {
    let dir = log_dir(std::env::var("IBAN_LOG_DIR").ok().as_deref());
    init_logging_at(app_name, dir)
}

/// Installs the process logger, adding a dated file sink under `dir` when given. The
/// file sink is opened before anything is installed, so a failure leaves no logger set.
pub fn init_logging_at(app_name: &str, dir: Option<PathBuf>) -> Result<(), String> {
    let file_sink = match dir {
        Some(dir) => Some(open_log_file(app_name, &dir)?),
        None => None,
    };

    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        init_result = dispatch(log_level(), file_sink)
            .apply()
            .map_err(|err| err.to_string());
    });
    init_result
}

fn log_level() -> log::LevelFilter {
    std::env::var("IBAN_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|level| level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info)
}

// Queries are read-only, so the file sink is opt-in.
fn log_dir(value: Option<&str>) -> Option<PathBuf> {
    match value {
        None | Some("off") | Some("none") | Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}

fn open_log_file(app_name: &str, dir: &Path) -> Result<File, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log dir {}: {err}", dir.display()))?;
    let date = Local::now().format("%Y_%m_%d");
    let file_path = dir.join(format!("{app_name}-{date}.log"));
    fern::log_file(&file_path)
        .map_err(|err| format!("cannot open log file {}: {err}", file_path.display()))
}

// Query output goes to stdout, so log lines go to stderr.
fn dispatch(level: log::LevelFilter, file_sink: Option<File>) -> fern::Dispatch {
    let dispatch = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    match file_sink {
        Some(file) => dispatch.chain(file),
        None => dispatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_is_off_unless_configured() {
        assert_eq!(log_dir(None), None);
        assert_eq!(log_dir(Some("off")), None);
        assert_eq!(log_dir(Some("none")), None);
        assert_eq!(log_dir(Some("")), None);
        assert_eq!(log_dir(Some("/tmp/iban")), Some(PathBuf::from("/tmp/iban")));
    }

    #[test]
    fn unusable_log_dir_is_reported() {
        let blocker = std::env::temp_dir().join(format!("iban-log-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();

        let err = init_logging_at("iban-countries", Some(blocker.join("logs"))).unwrap_err();
        assert!(err.starts_with("cannot create log dir"), "{err}");

        std::fs::remove_file(&blocker).unwrap();
    }
}
