//! The dispatcher: single entry point for every named transformation.
//!
//! [`Dispatcher::call`] is the dynamically-typed boundary. It takes a method
//! name and a JSON argument list `[text, encoding?, ignore?]`, validates the
//! text, resolves the encoding and routes to the [`Transform`] catalog.
//!
//! The default encoding is captured when the dispatcher is built and then
//! passed explicitly into every transformation. Nothing is stored globally,
//! so dispatchers with different defaults can be used side by side from any
//! number of threads.

use crate::encoding::Encoding;
use crate::error::{DispatchError, EncodingError};
use crate::transform::Transform;
use par_case_config::{Config, EncodingSource};
use serde_json::Value;

/// Routes method names and arguments to transformations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatcher {
    default_encoding: Encoding,
    titleize_ignore: Vec<String>,
}

impl Dispatcher {
    /// Create a dispatcher whose calls default to `default_encoding`.
    pub fn new(default_encoding: Encoding) -> Self {
        Self {
            default_encoding,
            titleize_ignore: Vec::new(),
        }
    }

    /// Set the ignore list `titleize` falls back to when a call supplies none.
    pub fn with_titleize_ignore<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titleize_ignore = words.into_iter().map(Into::into).collect();
        self
    }

    /// Build from a loaded config, resolving the default encoding against the
    /// process environment.
    pub fn from_config(config: &Config) -> Result<Self, EncodingError> {
        Self::from_source(config, config.resolve_encoding_source())
    }

    /// Same as [`Dispatcher::from_config`] with an injectable variable lookup.
    pub fn from_config_with<F>(config: &Config, lookup: F) -> Result<Self, EncodingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_source(config, config.resolve_encoding_source_with(lookup))
    }

    fn from_source(config: &Config, source: EncodingSource) -> Result<Self, EncodingError> {
        let encoding = match &source {
            // Unknown locale codesets fall back to UTF-8; explicit names must parse.
            EncodingSource::Locale(locale) => Encoding::from_locale(locale),
            explicit => explicit.encoding_name().parse()?,
        };
        log::info!("Default encoding: {encoding} ({source:?})");
        Ok(Self::new(encoding).with_titleize_ignore(config.titleize_ignore.iter().cloned()))
    }

    /// Load the user config file and build from it.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::from_config(&config)?)
    }

    /// Encoding used when a call names none.
    pub fn default_encoding(&self) -> Encoding {
        self.default_encoding
    }

    /// Fallback ignore list for `titleize`.
    pub fn titleize_ignore(&self) -> &[String] {
        &self.titleize_ignore
    }

    /// Whether `method` names a transformation in the catalog.
    pub fn supports(&self, method: &str) -> bool {
        method.parse::<Transform>().is_ok()
    }

    /// Run a transformation from statically-typed arguments.
    ///
    /// `None` for `encoding` uses the default. `None` for `ignore` uses the
    /// configured list; `Some(&[])` ignores nothing.
    pub fn apply(
        &self,
        transform: Transform,
        input: &str,
        encoding: Option<Encoding>,
        ignore: Option<&[String]>,
    ) -> String {
        let encoding = encoding.unwrap_or(self.default_encoding);
        let ignore = ignore.unwrap_or(self.titleize_ignore.as_slice());
        log::debug!("Dispatching {transform} under {encoding}");
        transform.apply(input, encoding, ignore)
    }

    /// Run a transformation by name from dynamically-typed arguments.
    ///
    /// `args` is `[text, encoding?, ignore?]`:
    /// - `text` must be a string.
    /// - `encoding` may be absent or falsy (`null`, `false`, `0`, `""`,
    ///   `"0"`) to use the default; otherwise it must be an encoding name.
    /// - `ignore` is read by `titleize` only: absent or `null` for the
    ///   configured list, otherwise an array of strings used as given.
    ///
    /// Trailing arguments beyond these are ignored.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<String, DispatchError> {
        let input = match args.first() {
            Some(Value::String(text)) => text.as_str(),
            other => {
                return Err(DispatchError::InvalidArgument {
                    index: 0,
                    expected: "a string",
                    found: other.map_or("nothing", json_type_name),
                });
            }
        };

        let transform: Transform = method.parse()?;
        let encoding = self.encoding_arg(args.get(1))?;
        let ignore = if transform.takes_ignore_list() {
            ignore_list_arg(args.get(2))?
        } else {
            None
        };

        Ok(self.apply(transform, input, Some(encoding), ignore.as_deref()))
    }

    fn encoding_arg(&self, arg: Option<&Value>) -> Result<Encoding, DispatchError> {
        match arg {
            Some(value) if !is_falsy(value) => match value {
                Value::String(name) => Ok(name.parse()?),
                other => Err(DispatchError::InvalidArgument {
                    index: 1,
                    expected: "an encoding name",
                    found: json_type_name(other),
                }),
            },
            _ => {
                log::trace!("No encoding given, using {}", self.default_encoding);
                Ok(self.default_encoding)
            }
        }
    }
}

/// `None` when the caller left the list out.
fn ignore_list_arg(arg: Option<&Value>) -> Result<Option<Vec<String>>, DispatchError> {
    let invalid = |found| DispatchError::InvalidArgument {
        index: 2,
        expected: "an array of strings",
        found,
    };

    match arg {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(words)) => words
            .iter()
            .map(|word| match word {
                Value::String(word) => Ok(word.clone()),
                other => Err(invalid(json_type_name(other))),
            })
            .collect::<Result<_, _>>()
            .map(Some),
        Some(other) => Err(invalid(json_type_name(other))),
    }
}

/// Values that count as "not supplied" for the encoding argument.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

/// Type name reported in [`DispatchError::InvalidArgument`].
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
