use url::Url;

use crate::error::HttpError;

const UPLOAD_PATH: &str = "/upload";
const FILES_SEGMENT: &str = "files";

/// Base address of the storage service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Build `http://{host}:{port}/`.
    ///
    /// Bare IPv6 literals are bracketed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error when the host does not form a valid URL.
    pub fn new(host: &str, port: u16) -> Result<Self, HttpError> {
        let host = host.trim();
        let raw = if host.contains(':') && !host.starts_with('[') {
            format!("http://[{}]:{}/", host, port)
        } else {
            format!("http://{}:{}/", host, port)
        };
        let base = Url::parse(&raw).map_err(|err| HttpError::InvalidEndpoint {
            url: raw.clone(),
            source: err,
        })?;
        if base.cannot_be_a_base() {
            return Err(HttpError::EndpointNotABase { url: raw });
        }
        Ok(Self { base })
    }

    /// `POST` target for multipart uploads.
    #[must_use]
    pub fn upload_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path(UPLOAD_PATH);
        url
    }

    /// `GET` target for a stored file; the name is percent-encoded as one segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments.
    pub fn file_url(&self, name: &str) -> Result<Url, HttpError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| HttpError::EndpointNotABase {
                url: self.base.to_string(),
            })?
            .clear()
            .push(FILES_SEGMENT)
            .push(name);
        Ok(url)
    }

    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }
}
