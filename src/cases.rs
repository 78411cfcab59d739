use std::borrow::Cow;

use serde_json::json;

use crate::interface::Context;

/// A named template paired with the context it is rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase<'a> {
    name: Cow<'a, str>,
    template: Cow<'a, str>,
    context: Context,
}

impl<'a> TestCase<'a> {
    pub fn new<N, T>(name: N, template: T, context: Context) -> Self
    where
        N: Into<Cow<'a, str>>,
        T: Into<Cow<'a, str>>,
    {
        Self {
            name: name.into(),
            template: template.into(),
            context,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub const fn context(&self) -> &Context {
        &self.context
    }
}

/// The fixed, ordered set of cases the benchmark binary runs.
pub fn builtin_cases() -> Vec<TestCase<'static>> {
    vec![
        TestCase::new("simple_text", "Hello, world!", Context::new()),
        TestCase::new(
            "variable_substitution",
            "Hello, {{ name }}!",
            Context::new().insert("name", "John").to_owned(),
        ),
        TestCase::new(
            "nested_object_access",
            "Hello, {{ user.name }}! Your age is {{ user.age }}",
            Context::new()
                .insert("user", json!({ "name": "John", "age": 30 }))
                .to_owned(),
        ),
        TestCase::new(
            "complex_conditions",
            "{% if age >= 18 and has_license %}Can drive\
             {% elif age >= 16 %}Can get learner's permit\
             {% else %}Too young to drive{% endif %}",
            Context::new()
                .insert("age", 17)
                .insert("has_license", false)
                .to_owned(),
        ),
        TestCase::new(
            "simple_loop",
            "{% for name in names %}{{ name }}, {% endfor %}",
            Context::new()
                .insert("names", json!(["John", "Jane", "Bob", "Alice"]))
                .to_owned(),
        ),
        TestCase::new(
            "complex_loop",
            "{% for item in items %}- {{ item.name }}: ${{ item.price }}{% endfor %}",
            Context::new()
                .insert(
                    "items",
                    json!([
                        { "name": "Apple", "price": 0.5 },
                        { "name": "Banana", "price": 0.3 },
                        { "name": "Orange", "price": 0.6 },
                    ]),
                )
                .to_owned(),
        ),
    ]
}
