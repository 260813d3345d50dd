//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → HTTP → テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use crate::llm::schema::Schema;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// スキーマ付きでプロンプトを送り、応答テキスト（JSON 文字列）を返す
    ///
    /// 応答にテキストが無い場合は `Error::Http`。テキストが JSON かどうかはここでは見ない。
    pub fn generate(&self, prompt: &str, schema: Option<&Schema>) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt, schema)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        let text = self
            .provider
            .parse_response_text(&response_json)?
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::http(format!("No text in response from {}", self.provider.name()))
            })?;
        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    // モックプロバイダ
    struct MockProvider {
        response: Result<String, Error>,
        sent: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn replying(response: Result<String, Error>) -> Self {
            Self {
                response,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(&self, prompt: &str, schema: Option<&Schema>) -> Result<Value, Error> {
            Ok(json!({
                "prompt": prompt,
                "schema": schema.map(|s| s.to_json()),
            }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            self.sent.lock().unwrap().push(request_json.to_string());
            self.response.clone()
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)?;
            Ok(v["text"].as_str().map(|s| s.to_string()))
        }
    }

    #[test]
    fn test_llm_driver_new() {
        let driver = LlmDriver::new(MockProvider::replying(Ok("{}".to_string())));
        assert_eq!(driver.provider().name(), "mock");
    }

    #[test]
    fn test_generate_returns_text_and_sends_schema() {
        let driver = LlmDriver::new(MockProvider::replying(Ok(
            r#"{"text":"{\"ok\":true}"}"#.to_string(),
        )));
        let schema = Schema::object().required("ok", Schema::boolean());
        let text = driver.generate("hello", Some(&schema)).unwrap();
        assert_eq!(text, r#"{"ok":true}"#);

        let sent = driver.provider().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let req: Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(req["prompt"], "hello");
        assert_eq!(req["schema"]["type"], "OBJECT");
    }

    #[test]
    fn test_generate_without_text_is_http_error() {
        let driver = LlmDriver::new(MockProvider::replying(Ok(r#"{}"#.to_string())));
        let err = driver.generate("hello", None).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[test]
    fn test_generate_blank_text_is_http_error() {
        let driver = LlmDriver::new(MockProvider::replying(Ok(r#"{"text":"  "}"#.to_string())));
        assert!(matches!(driver.generate("hello", None), Err(Error::Http(_))));
    }

    #[test]
    fn test_generate_propagates_transport_error() {
        let driver = LlmDriver::new(MockProvider::replying(Err(Error::http("timeout"))));
        let err = driver.generate("hello", None).unwrap_err();
        assert_eq!(err, Error::http("timeout"));
    }
}
