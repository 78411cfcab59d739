pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// The stage of a benchmark run in which a render failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    Warmup,
    Benchmark,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warmup => write!(f, "warmup"),
            Self::Benchmark => write!(f, "benchmark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BenchError {
    /// The engine rejected the template source.
    Compile { message: String },
    /// A compiled template failed to render. `phase` is filled in by the
    /// runner; engines report `None`.
    Render {
        phase: Option<Phase>,
        message: String,
    },
    /// A context was built from a JSON value that is not an object.
    InvalidContext { found: String },
}

impl BenchError {
    pub fn compile<M: Into<String>>(message: M) -> Self {
        Self::Compile {
            message: message.into(),
        }
    }

    pub fn render<M: Into<String>>(message: M) -> Self {
        Self::Render {
            phase: None,
            message: message.into(),
        }
    }

    /// Tags a render error with the phase it happened in. Other variants pass
    /// through untouched.
    #[must_use]
    pub fn during(self, phase: Phase) -> Self {
        match self {
            Self::Render { message, .. } => Self::Render {
                phase: Some(phase),
                message,
            },
            other @ (Self::Compile { .. } | Self::InvalidContext { .. }) => other,
        }
    }
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile { message } => {
                write!(f, "parse error: {}", message)
            }
            Self::Render {
                phase: Some(phase),
                message,
            } => {
                write!(f, "render error during {}: {}", phase, message)
            }
            Self::Render {
                phase: None,
                message,
            } => {
                write!(f, "render error: {}", message)
            }
            Self::InvalidContext { found } => {
                write!(f, "context must be a mapping, found {}", found)
            }
        }
    }
}

impl std::error::Error for BenchError {}
