use minijinja::{Environment, UndefinedBehavior};

use crate::error::{BenchError, BenchResult};
use crate::interface::{CompiledTemplate, Context, TemplateEngine};

/// Name under which the template being benchmarked is registered.
const TEMPLATE_NAME: &str = "benchmark";

/// `MinijinjaEngine` is the production [`TemplateEngine`], backed by the
/// `minijinja` implementation of the Jinja2 template language.
///
/// Undefined variables are strict: a template that references a name missing
/// from its context fails to render rather than printing an empty string.
///
/// # Examples
///
/// ```
/// use jinja_bench::{CompiledTemplate, Context, MinijinjaEngine, TemplateEngine};
///
/// let mut engine = MinijinjaEngine::new();
/// let template = engine.compile("Hello, {{ name }}!").unwrap();
///
/// let mut context = Context::new();
/// context.insert("name", "World");
///
/// assert_eq!(template.render(&context).unwrap(), "Hello, World!");
/// ```
pub struct MinijinjaEngine {
    env: Environment<'static>,
}

impl MinijinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MinijinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MinijinjaEngine {
    type Template<'env> = MinijinjaTemplate<'env>;

    fn compile(&mut self, source: &str) -> BenchResult<Self::Template<'_>> {
        // Re-registering under the same name drops the previous case's template.
        self.env
            .add_template_owned(TEMPLATE_NAME, source.to_owned())
            .map_err(|e| BenchError::compile(e.to_string()))?;

        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| BenchError::compile(e.to_string()))?;

        Ok(MinijinjaTemplate { template })
    }
}

pub struct MinijinjaTemplate<'env> {
    template: minijinja::Template<'env, 'env>,
}

impl CompiledTemplate for MinijinjaTemplate<'_> {
    fn render(&self, context: &Context) -> BenchResult<String> {
        self.template
            .render(context)
            .map_err(|e| BenchError::render(e.to_string()))
    }
}
