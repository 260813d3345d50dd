//! セッション記録の保存 Outbound ポート

use crate::domain::SessionRecord;

/// 記録の保存・一覧・全消去
///
/// 失敗は呼び出し側に返さない（実装側でログに残し、空一覧・何もしないに縮退する）。
pub trait RecordStore: Send + Sync {
    /// 先頭に追加し、上限を超えた古い記録を捨てる
    fn append_record(&self, record: SessionRecord);

    /// 新しい順
    fn list_records(&self) -> Vec<SessionRecord>;

    fn clear_all(&self);
}
