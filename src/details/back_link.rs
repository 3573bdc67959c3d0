/// Where "Go back" leads from a details page.
///
/// Captured once when the page mounts; navigating between the page's
/// nested sections does not change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackLink(String);

impl BackLink {
    /// Take `from` out of the incoming navigation state, or `fallback`.
    pub fn capture(from: Option<&str>, fallback: &str) -> Self {
        match from {
            Some(from) if !from.is_empty() => BackLink(from.to_string()),
            _ => BackLink(fallback.to_string()),
        }
    }

    pub fn target(&self) -> &str {
        &self.0
    }
}
