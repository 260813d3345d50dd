//! 管理画面のユースケース
//!
//! 入場コードを通ると AdminSession が得られ、各操作はそれを要求する。

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::csv_export::{default_file_name, records_to_csv};
use crate::domain::{check_access_code, AdminStats, SessionRecord, RECENT_LIMIT};
use crate::ports::outbound::{Confirm, RecordStore};

/// 入場コードを通った証（authenticate でのみ作られる）
#[derive(Debug)]
pub struct AdminSession {
    _private: (),
}

/// 概要画面の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOverview {
    pub stats: AdminStats,
    /// 新しい順に最大 RECENT_LIMIT 件
    pub recent: Vec<SessionRecord>,
}

pub struct AdminUseCase {
    store: Arc<dyn RecordStore>,
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Log>,
}

impl AdminUseCase {
    pub fn new(
        store: Arc<dyn RecordStore>,
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvResolver>,
        clock: Arc<dyn Clock>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            store,
            fs,
            env,
            clock,
            logger,
        }
    }

    pub fn authenticate(&self, code: &str) -> Result<AdminSession, Error> {
        check_access_code(code).map_err(|e| {
            self.log(LogRecord::new(LogLevel::Warn, "admin access denied"));
            e
        })?;
        Ok(AdminSession { _private: () })
    }

    pub fn overview(&self, _session: &AdminSession) -> AdminOverview {
        let records = self.store.list_records();
        let stats = AdminStats::from_records(&records);
        let recent = records.into_iter().take(RECENT_LIMIT).collect();
        AdminOverview { stats, recent }
    }

    pub fn records(&self, _session: &AdminSession) -> Vec<SessionRecord> {
        self.store.list_records()
    }

    /// CSV を書き出して出力先を返す。記録がなければ書き出さない。
    ///
    /// 出力先を省略するとカレントディレクトリの cosmic_data_YYYY-MM-DD.csv。
    pub fn export_csv(
        &self,
        _session: &AdminSession,
        output: Option<PathBuf>,
    ) -> Result<PathBuf, Error> {
        let records = self.store.list_records();
        if records.is_empty() {
            return Err(Error::invalid_argument("No records to export"));
        }
        let path = match output {
            Some(p) => p,
            None => {
                let today = DateTime::<Utc>::from_timestamp_millis(self.clock.now_ms())
                    .ok_or_else(|| Error::system("clock out of range"))?
                    .date_naive();
                self.env.current_dir()?.join(default_file_name(today))
            }
        };
        self.fs.write(&path, &records_to_csv(&records))?;
        self.log(
            LogRecord::new(LogLevel::Info, "records exported")
                .field("path", path.display().to_string())
                .field("records", records.len()),
        );
        Ok(path)
    }

    /// 確認が取れたら全記録を消す。消したら true。
    pub fn purge(&self, _session: &AdminSession, confirm: &dyn Confirm) -> Result<bool, Error> {
        let count = self.store.list_records().len();
        let question = format!("Delete all {} stored records? This cannot be undone.", count);
        if !confirm.confirm(&question)? {
            return Ok(false);
        }
        self.store.clear_all();
        self.log(LogRecord::new(LogLevel::Warn, "records purged").field("records", count));
        Ok(true)
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase").kind("admin"));
    }
}
