pub mod binding;
pub mod errors;

pub use binding::{Binding, State};
pub use errors::{ConfigError, HelloError, WebViewError};
