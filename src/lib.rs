//! String case transformations over Unicode text with an explicit encoding.
//!
//! The [`Dispatcher`] is the single entry point: it validates arguments,
//! fills in the default [`Encoding`] and routes a method name to the matching
//! [`Transform`]. The transformations themselves live in [`transform`] and are
//! pure functions of `(text, encoding)`.
//!
//! ```
//! use par_case::{Dispatcher, Encoding, Transform};
//! use serde_json::json;
//!
//! let dispatcher = Dispatcher::new(Encoding::Utf8);
//! assert_eq!(
//!     dispatcher.call("camelize", &[json!(" my-sample_2Test string ")]).unwrap(),
//!     "mySample2TestString"
//! );
//! assert_eq!(
//!     dispatcher.apply(Transform::Dasherize, "MySampleTest", None, None),
//!     "my-sample-test"
//! );
//! ```

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod dispatch;
pub mod encoding;
pub mod error;
pub mod transform;

// Re-export main types for convenience
pub use dispatch::Dispatcher;
pub use encoding::Encoding;
pub use error::{DispatchError, EncodingError};
pub use par_case_config::{Config, ConfigError};
pub use transform::Transform;
