//! 日志初始化
//!
//! stdout 被 TUI 占用，所以日志写到配置目录下的文件里。
//! 调用点使用 `log` 宏，由 tracing-subscriber 的 tracing-log 桥接收集。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "mlops-guide.log";

/// 日志文件路径：`<config_dir>/mlops-guide/mlops-guide.log`
pub fn log_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(LOG_FILE)
}

/// 初始化文件日志
///
/// `RUST_LOG` 优先，否则使用配置里的 `level`。
/// 文件打不开或 subscriber 已经注册时返回 false，程序照常运行，只是没有日志。
pub fn init_logging(path: &Path, level: &str) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(log_file = %path.display(), "logging initialized");
    }
    installed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn log_file_sits_in_config_dir() {
        let path = log_file_path(Path::new("/home/u/.config/mlops-guide"));
        assert_eq!(path, PathBuf::from("/home/u/.config/mlops-guide/mlops-guide.log"));
    }

    #[test]
    fn unwritable_location_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        // 父路径是一个普通文件，目录无法创建
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        assert!(!init_logging(&blocker.join("sub").join(LOG_FILE), "info"));
    }
}
