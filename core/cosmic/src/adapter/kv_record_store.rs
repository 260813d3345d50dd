//! キー・バリューストアによる RecordStore 実装
//!
//! 記録一覧は 1 キー（cosmic_mate_records）に JSON 配列で置く。
//! 読み書きの失敗は warn ログに残して空一覧・何もしないに縮退する。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{KeyValueStore, Log, LogLevel, LogRecord};

use crate::domain::{SessionRecord, MAX_RECORDS};
use crate::ports::outbound::RecordStore;

pub const RECORDS_KEY: &str = "cosmic_mate_records";

pub struct KvRecordStore {
    kv: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Log>,
}

impl KvRecordStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, logger: Arc<dyn Log>) -> Self {
        Self { kv, logger }
    }

    fn read(&self) -> Result<Vec<SessionRecord>, Error> {
        match self.kv.get(RECORDS_KEY)? {
            Some(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
            _ => Ok(Vec::new()),
        }
    }

    fn warn(&self, op: &str, e: &Error) {
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Warn, format!("storage {} failed: {}", op, e))
                .layer("adapter")
                .kind("storage"),
        );
    }
}

impl RecordStore for KvRecordStore {
    fn append_record(&self, record: SessionRecord) {
        let mut records = self.list_records();
        records.insert(0, record);
        records.truncate(MAX_RECORDS);
        let result = serde_json::to_string(&records)
            .map_err(Error::from)
            .and_then(|json| self.kv.set(RECORDS_KEY, &json));
        if let Err(e) = result {
            self.warn("write", &e);
        }
    }

    fn list_records(&self) -> Vec<SessionRecord> {
        self.read().unwrap_or_else(|e| {
            self.warn("read", &e);
            Vec::new()
        })
    }

    fn clear_all(&self) {
        if let Err(e) = self.kv.remove(RECORDS_KEY) {
            self.warn("clear", &e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::{MemoryKeyValueStore, NoopLog};

    fn record(ts: i64) -> SessionRecord {
        SessionRecord {
            id: ts.to_string(),
            timestamp: ts,
            name: format!("user{}", ts),
            birth_date: "1990-07-04".into(),
            traits: vec!["creative".into()],
            match_name: "Tom Cruise".into(),
            region: "global".into(),
            gender: Some("any".into()),
            status_preference: Some("all".into()),
        }
    }

    fn store() -> (KvRecordStore, Arc<MemoryKeyValueStore>) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        (KvRecordStore::new(kv.clone(), Arc::new(NoopLog)), kv)
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (store, _) = store();
        assert!(store.list_records().is_empty());
    }

    #[test]
    fn test_append_is_newest_first() {
        let (store, _) = store();
        store.append_record(record(1));
        store.append_record(record(2));
        let ids: Vec<_> = store.list_records().into_iter().map(|r| r.timestamp).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_cap_keeps_newest_hundred() {
        let (store, _) = store();
        for ts in 1..=101 {
            store.append_record(record(ts));
        }
        let records = store.list_records();
        assert_eq!(records.len(), 100);
        assert_eq!(records[0].timestamp, 101);
        assert_eq!(records[99].timestamp, 2);
    }

    #[test]
    fn test_corrupt_value_degrades_to_empty() {
        let (store, kv) = store();
        kv.set(RECORDS_KEY, "{not json").unwrap();
        assert!(store.list_records().is_empty());
        store.append_record(record(7));
        assert_eq!(store.list_records().len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let (store, kv) = store();
        store.append_record(record(1));
        store.clear_all();
        assert!(store.list_records().is_empty());
        assert_eq!(kv.get(RECORDS_KEY).unwrap(), None);
    }
}
