//! テスト用: 固定の応答（または固定のエラー）を返す JsonGenerator 実装


#[cfg(test)]
pub use stub::StubGenerator;
