pub type GalleryResult<T> = Result<T, GalleryError>;

/// Everything the engine can complain about. None of these are fatal: callers
/// log them and continue with degraded visuals.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GalleryError {
    #[error("data format error on line {line}: {reason}")]
    DataFormat { line: usize, reason: String },

    #[error("coordinate rows ({coords}) and file entries ({files}) disagree")]
    CountMismatch { coords: usize, files: usize },

    #[error("asset load failed for {source_ref}: {reason}")]
    AssetLoad { source_ref: String, reason: String },

    #[error("configuration value {field}={value} out of range")]
    ConfigOutOfRange { field: &'static str, value: f32 },
}

impl GalleryError {
    pub fn data_format(line: usize, reason: impl Into<String>) -> Self {
        Self::DataFormat {
            line,
            reason: reason.into(),
        }
    }

    pub fn asset_load(source_ref: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            source_ref: source_ref.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(GalleryError::data_format(3, "x")
            .to_string()
            .starts_with("data format error on line 3"));
        assert!(GalleryError::asset_load("a.png", "404")
            .to_string()
            .contains("a.png"));
        let e = GalleryError::CountMismatch { coords: 2, files: 3 };
        assert!(e.to_string().contains("(2)"));
    }
}
