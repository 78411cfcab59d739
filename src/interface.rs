use serde_json::{Map, Value};

use crate::error::{BenchError, BenchResult};

/// Named values available to a template while it renders.
///
/// Values may be any JSON shape: strings, numbers, booleans, lists or nested
/// mappings. The context serialises as a plain mapping, which is what the
/// engine sees at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Context {
    data: Map<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N: Into<String>, V: Into<Value>>(&mut self, name: N, value: V) -> &mut Self {
        self.data.insert(name.into(), value.into());
        self
    }

    pub fn get<T: AsRef<str>>(&self, name: T) -> Option<&Value> {
        self.data.get(name.as_ref())
    }

    pub fn contains<T: AsRef<str>>(&self, name: T) -> bool {
        self.data.contains_key(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Map<String, Value>> for Context {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl TryFrom<Value> for Context {
    type Error = BenchError;

    fn try_from(value: Value) -> BenchResult<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other @ (Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_)) => Err(BenchError::InvalidContext {
                found: json_kind(&other).to_owned(),
            }),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// `TemplateEngine` is the compile half of the external templating library.
///
/// The harness never looks inside template sources; it hands them to the
/// engine and renders whatever comes back.
pub trait TemplateEngine {
    type Template<'env>: CompiledTemplate
    where
        Self: 'env;

    /// `compile` parses `source` into a template that can be rendered
    /// repeatedly.
    ///
    /// # Errors
    /// - If the engine rejects the template syntax.
    fn compile(&mut self, source: &str) -> BenchResult<Self::Template<'_>>;
}

/// A template that has already been through [`TemplateEngine::compile`].
pub trait CompiledTemplate {
    /// `render` produces the template output for `context`.
    ///
    /// # Errors
    /// - If rendering fails, including when the template references a
    ///   variable missing from `context`.
    fn render(&self, context: &Context) -> BenchResult<String>;
}
