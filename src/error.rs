// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    Asset(AssetError),
}

/// Specific error types for 3D asset resolution.
/// Used to pick the localized message shown by the viewer placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The asset reference uses a scheme the loader cannot resolve.
    UnsupportedScheme(String),

    /// The referenced file or built-in shape does not exist.
    NotFound(String),

    /// The asset host could not be reached or answered with an error.
    Download(String),

    /// The file exists but is not a readable glTF document.
    Parse(String),

    /// The document parsed but contains no triangle geometry.
    NoGeometry,

    /// Local I/O failure (cache directory, permissions).
    Io(String),
}

impl AssetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetError::UnsupportedScheme(_) => "viewer-error-unsupported-scheme",
            AssetError::NotFound(_) => "viewer-error-not-found",
            AssetError::Download(_) => "viewer-error-download",
            AssetError::Parse(_) => "viewer-error-parse",
            AssetError::NoGeometry => "viewer-error-no-geometry",
            AssetError::Io(_) => "viewer-error-io",
        }
    }

    /// Whether retrying the same reference could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, AssetError::Download(_) | AssetError::Io(_))
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported asset scheme: {}", scheme)
            }
            AssetError::NotFound(what) => write!(f, "Asset not found: {}", what),
            AssetError::Download(msg) => write!(f, "Download failed: {}", msg),
            AssetError::Parse(msg) => write!(f, "Invalid glTF document: {}", msg),
            AssetError::NoGeometry => write!(f, "Asset contains no triangle geometry"),
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound(err.to_string())
        } else {
            AssetError::Io(err.to_string())
        }
    }
}

impl From<gltf::Error> for AssetError {
    fn from(err: gltf::Error) -> Self {
        match err {
            gltf::Error::Io(io) => io.into(),
            other => AssetError::Parse(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AssetError = io_error.into();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn permission_error_maps_to_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: AssetError = io_error.into();
        assert!(matches!(err, AssetError::Io(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn asset_error_i18n_keys() {
        assert_eq!(
            AssetError::Download("timeout".into()).i18n_key(),
            "viewer-error-download"
        );
        assert_eq!(AssetError::NoGeometry.i18n_key(), "viewer-error-no-geometry");
        assert_eq!(
            AssetError::UnsupportedScheme("ftp".into()).i18n_key(),
            "viewer-error-unsupported-scheme"
        );
    }

    #[test]
    fn asset_error_wraps_into_error() {
        let err: Error = AssetError::NoGeometry.into();
        assert_eq!(
            format!("{}", err),
            "Asset Error: Asset contains no triangle geometry"
        );
    }
}
