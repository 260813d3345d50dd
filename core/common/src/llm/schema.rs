//! 構造化出力のスキーマ記述
//!
//! LLM に「この形の JSON だけを返せ」と指示するための型記述子。
//! Gemini の responseSchema（OpenAPI サブセット）へ変換して送る。

use serde_json::{json, Map, Value};

/// スキーマのプリミティブ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
}

impl SchemaType {
    /// Gemini API 上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "OBJECT",
            Self::Array => "ARRAY",
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
        }
    }
}

/// スキーマ（入れ子のオブジェクト・配列を含む）
///
/// properties は宣言順を保持する（propertyOrdering としてそのまま送る）。
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    ty: SchemaType,
    description: Option<String>,
    properties: Vec<(String, Schema)>,
    required: Vec<String>,
    items: Option<Box<Schema>>,
    enum_values: Vec<String>,
}

impl Schema {
    fn of(ty: SchemaType) -> Self {
        Self {
            ty,
            description: None,
            properties: Vec::new(),
            required: Vec::new(),
            items: None,
            enum_values: Vec::new(),
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn array(items: Schema) -> Self {
        let mut s = Self::of(SchemaType::Array);
        s.items = Some(Box::new(items));
        s
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::of(SchemaType::Integer)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaType::Boolean)
    }

    /// 列挙値に制限した文字列
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut s = Self::of(SchemaType::String);
        s.enum_values = values.into_iter().map(Into::into).collect();
        s
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 必須プロパティを追加する
    pub fn required(mut self, name: &str, schema: Schema) -> Self {
        self.required.push(name.to_string());
        self.properties.push((name.to_string(), schema));
        self
    }

    /// 任意プロパティを追加する
    pub fn optional(mut self, name: &str, schema: Schema) -> Self {
        self.properties.push((name.to_string(), schema));
        self
    }

    pub fn schema_type(&self) -> SchemaType {
        self.ty
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    pub fn items(&self) -> Option<&Schema> {
        self.items.as_deref()
    }

    /// Gemini の responseSchema 形式の JSON に変換する
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(self.ty.as_str()));
        if let Some(d) = &self.description {
            obj.insert("description".to_string(), json!(d));
        }
        if !self.enum_values.is_empty() {
            obj.insert("enum".to_string(), json!(self.enum_values));
        }
        if !self.properties.is_empty() {
            let mut props = Map::new();
            for (name, schema) in &self.properties {
                props.insert(name.clone(), schema.to_json());
            }
            obj.insert("properties".to_string(), Value::Object(props));
            let ordering: Vec<&str> = self.properties.iter().map(|(n, _)| n.as_str()).collect();
            obj.insert("propertyOrdering".to_string(), json!(ordering));
        }
        if !self.required.is_empty() {
            obj.insert("required".to_string(), json!(self.required));
        }
        if let Some(items) = &self.items {
            obj.insert("items".to_string(), items.to_json());
        }
        Value::Object(obj)
    }
}
