//! ログ出力の実装
//!
//! - FileJsonLog: ファイルへ JSONL で追記（通常の出力先）
//! - StderrLog: `-v` 指定時に stderr へ要点を出す
//! - TeeLog: 複数の Log へ同じレコードを配る
//! - NoopLog: 何もしない（テスト用）

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.write_all(b"\n")
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// stderr へ 1 行で出す Log 実装（fields は出さない）
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

fn level_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    }
}

/// stderr 用の 1 行表現
pub fn format_human(record: &LogRecord) -> String {
    let mut line = format!("[{}]", level_label(record.level));
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" {}", layer));
    }
    if let Some(kind) = &record.kind {
        line.push_str(&format!("/{}", kind));
    }
    line.push_str(&format!(": {}", record.message));
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_human(record));
        Ok(())
    }
}

/// 複数の Log へ配信する。いずれかが失敗しても残りには書き、最初のエラーを返す。
pub struct TeeLog {
    logs: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use std::sync::Mutex;
    use tempfile::tempdir;

    struct CollectLog(Mutex<Vec<String>>);

    impl Log for CollectLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct FailLog;

    impl Log for FailLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("disk full"))
        }
    }

    #[test]
    fn test_noop_log() {
        let log = NoopLog;
        let rec = LogRecord::new(LogLevel::Info, "test");
        assert!(log.log(&rec).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_lines_and_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("cosmic.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);
        log.log(&LogRecord::new(LogLevel::Info, "first")).unwrap();
        log.log(&LogRecord::new(LogLevel::Error, "second").kind("service"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(v["message"], "second");
        assert_eq!(v["level"], "error");
        assert_eq!(v["kind"], "service");
    }

    #[test]
    fn test_format_human() {
        let rec = LogRecord::new(LogLevel::Warn, "storage unavailable")
            .layer("adapter")
            .kind("storage");
        assert_eq!(format_human(&rec), "[warn] adapter/storage: storage unavailable");
    }

    #[test]
    fn test_tee_log_delivers_to_all_and_reports_first_error() {
        let collect = Arc::new(CollectLog(Mutex::new(Vec::new())));
        let tee = TeeLog::new(vec![Arc::new(FailLog), collect.clone()]);
        let result = tee.log(&LogRecord::new(LogLevel::Info, "hello"));
        assert!(result.is_err());
        assert_eq!(collect.0.lock().unwrap().as_slice(), ["hello".to_string()]);
    }
}
