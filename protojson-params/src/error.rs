use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for parameter parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Name shown in diagnostics for the parameter string.
pub const PARAMETER_SOURCE_NAME: &str = "parameter";

/// Source context for error reporting.
///
/// Holds the raw parameter string so every error can point back into it.
#[derive(Debug, Clone)]
pub struct ParamSource {
    src: String,
}

impl ParamSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(PARAMETER_SOURCE_NAME, self.src.clone())
    }

    pub fn unknown_key(&self, key: impl Into<String>, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::UnknownKey {
            src: self.named_source(),
            span: span.into(),
            key: key.into(),
        })
    }

    pub fn invalid_bool(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidBool {
            src: self.named_source(),
            span: span.into(),
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn missing_value(&self, key: impl Into<String>, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingValue {
            src: self.named_source(),
            span: span.into(),
            key: key.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown plugin parameter '{key}'")]
    #[diagnostic(
        code(protojson::unknown_parameter),
        help(
            "valid parameters are: enums_as_ints, emit_defaults, orig_name, allow_unknown, unmarshaler, additional_imports"
        )
    )]
    UnknownKey {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown parameter")]
        span: SourceSpan,
        key: String,
    },

    #[error("invalid boolean '{value}' for parameter '{key}'")]
    #[diagnostic(
        code(protojson::invalid_bool),
        help("use '{key}=true', '{key}=false' or just '{key}'")
    )]
    InvalidBool {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected true or false")]
        span: SourceSpan,
        key: String,
        value: String,
    },

    #[error("parameter '{key}' requires a value")]
    #[diagnostic(code(protojson::missing_value), help("write it as '{key}=<value>'"))]
    MissingValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("no value given")]
        span: SourceSpan,
        key: String,
    },
}
