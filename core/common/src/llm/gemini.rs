//! Geminiプロバイダの実装
//!
//! generateContent を 1 回呼ぶだけの非ストリーミング実装。
//! スキーマが渡された場合は responseMimeType=application/json と responseSchema を付ける。

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::provider::LlmProvider;
use crate::llm::schema::Schema;
use serde_json::{json, Value};

/// 既定のモデル名
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// 既定の API ベース URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Geminiプロバイダ
pub struct GeminiProvider {
    model: ModelName,
    api_key: ApiKey,
    base_url: String,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `api_key` - API キー（呼び出し側で環境変数から解決済みのもの）
    pub fn new(model: Option<ModelName>, api_key: ApiKey) -> Self {
        Self {
            model: model.unwrap_or_else(|| ModelName::new(DEFAULT_MODEL)),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// ベース URL を差し替える（プロキシ・互換エンドポイント用）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// エラーレスポンスからメッセージを取り出す
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(&self, prompt: &str, schema: Option<&Schema>) -> Result<Value, Error> {
        let mut payload = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        });

        if let Some(schema) = schema {
            payload["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema.to_json(),
            });
        }

        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // キーはヘッダで渡す（URL に載せるとエラーメッセージに漏れる）
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.api_key.expose())
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Gemini API error: {}",
                api_error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::http(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        if let Some(reason) = v["promptFeedback"]["blockReason"].as_str() {
            return Err(Error::http(format!("Gemini blocked the prompt: {}", reason)));
        }

        // thought パートは除いてテキストを結合する
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter(|part| !part["thought"].as_bool().unwrap_or(false))
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .filter(|s| !s.is_empty());

        Ok(text)
    }
}
