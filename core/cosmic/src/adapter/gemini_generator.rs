//! Gemini による JsonGenerator 実装
//!
//! API キーは呼び出しのたびに EnvResolver から解決する（起動時には要求しない）。

use std::sync::Arc;

use common::domain::ModelName;
use common::error::Error;
use common::llm::{GeminiProvider, LlmDriver, Schema};
use common::ports::outbound::EnvResolver;

use crate::ports::outbound::JsonGenerator;

pub struct GeminiJsonGenerator {
    env: Arc<dyn EnvResolver>,
    model: Option<ModelName>,
    base_url: Option<String>,
}

impl GeminiJsonGenerator {
    pub fn new(env: Arc<dyn EnvResolver>, model: Option<ModelName>) -> Self {
        Self {
            env,
            model,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    fn provider(&self) -> Result<GeminiProvider, Error> {
        let key = self
            .env
            .gemini_api_key()
            .ok_or_else(|| Error::env("GEMINI_API_KEY (or API_KEY) is not set"))?;
        let provider = GeminiProvider::new(self.model.clone(), key);
        Ok(match &self.base_url {
            Some(url) => provider.with_base_url(url.clone()),
            None => provider,
        })
    }
}

impl JsonGenerator for GeminiJsonGenerator {
    fn generate_json(&self, prompt: &str, schema: &Schema) -> Result<String, Error> {
        let driver = LlmDriver::new(self.provider()?);
        driver.generate(prompt, Some(schema))
    }
}
