use url::Url;

use crate::error::ValidationError;

/// Base location of the target files, `{root}/{size}M?{para}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    root: String,
    para: String,
}

impl TargetUrl {
    /// Validates `root` as an absolute http(s) URL.
    ///
    /// Trailing slashes on `root` and a leading `?` on `para` are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when `root` does not parse or uses another scheme.
    pub fn parse(root: &str, para: &str) -> Result<Self, ValidationError> {
        let root = root.trim().trim_end_matches('/');
        let parsed = Url::parse(root).map_err(|err| ValidationError::InvalidUrl {
            url: root.to_owned(),
            source: err,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        }
        Ok(Self {
            root: root.to_owned(),
            para: para.trim().trim_start_matches('?').to_owned(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// URL of the file holding `file_size_mib` MiB.
    #[must_use]
    pub fn for_file(&self, file_size_mib: u64) -> String {
        if self.para.is_empty() {
            format!("{}/{}M", self.root, file_size_mib)
        } else {
            format!("{}/{}M?{}", self.root, file_size_mib, self.para)
        }
    }
}
