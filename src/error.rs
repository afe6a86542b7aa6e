use std::fmt;
use wasm_bindgen::JsValue;

/// Errors raised while wiring behaviors into the page.
///
/// A missing element is not an error; installers simply skip.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// A DOM or JS call threw.
    Js(String),
    /// Page configuration could not be decoded.
    Config(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Js(msg) => write!(f, "JavaScript error: {}", msg),
            DashboardError::Config(msg) => write!(f, "Invalid dashboard config: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<JsValue> for DashboardError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DashboardError::Js(msg)
    }
}

impl From<serde_wasm_bindgen::Error> for DashboardError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        DashboardError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_source() {
        assert_eq!(
            DashboardError::Js("boom".into()).to_string(),
            "JavaScript error: boom"
        );
        assert_eq!(
            DashboardError::Config("bad".into()).to_string(),
            "Invalid dashboard config: bad"
        );
    }
}
