#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("No clipboard helper found (tried: {0})")]
    ClipboardUnavailable(String),

    #[error("Clipboard helper '{0}' failed: {1}")]
    ClipboardFailed(String, String),

    #[error("Unsupported operating system for clipboard: {0}")]
    UnsupportedPlatform(String),
}
