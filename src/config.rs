use std::path::PathBuf;

/// Where a verification pass points and where it leaves its artifact.
///
/// Defaults mirror the local dev setup: a Vite dev server on port 5173 and a
/// screenshot dropped into the working directory. The binary always runs the
/// defaults; tests substitute an ephemeral fixture server.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Address the frontend is expected to already serve on.
    pub base_url: String,
    /// Destination of the full-page screenshot. Overwritten if present.
    pub screenshot_path: PathBuf,
    /// Launch the browser without a window. Turn off to watch a run locally.
    pub headless: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".into(),
            screenshot_path: PathBuf::from("verification_features.png"),
            headless: true,
        }
    }
}
