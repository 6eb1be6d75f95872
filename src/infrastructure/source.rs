//! Catalog sources: where the raw catalog payload comes from.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Default public catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Catalog endpoint returned status {0}")]
    Status(u16),
    #[error("Could not read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog fetch stopped before returning a result")]
    WorkerLost,
}

/// Yields the raw catalog document, fetched exactly once per run.
pub trait CatalogSource: Send {
    /// Human readable origin, used in logs.
    fn describe(&self) -> String;

    /// Retrieves the catalog body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the catalog cannot be retrieved.
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Reads the catalog with a single blocking HTTP GET.
pub struct HttpCatalogSource {
    endpoint: String,
    use_proxy: bool,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            use_proxy: true,
        }
    }

    /// Ignores any proxy configured through the environment.
    pub fn without_proxy(mut self) -> Self {
        self.use_proxy = false;
        self
    }
}

impl Default for HttpCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        let mut builder = reqwest::blocking::Client::builder();
        if !self.use_proxy {
            builder = builder.no_proxy();
        }
        let response = builder.build()?.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

/// Reads the catalog from a JSON file on disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::NamedTempFile;

    /// Serves one canned HTTP response on a local port and returns its URL.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/products", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buf).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        url
    }

    #[test]
    fn test_file_source_reads_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}]"#).unwrap();

        let source = FileCatalogSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), r#"[{"id": 1}]"#);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.fetch(), Err(FetchError::Io(_))));
    }

    #[test]
    fn test_http_source_default_endpoint() {
        let source = HttpCatalogSource::default();
        assert_eq!(source.describe(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_http_source_maps_server_error_to_status() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let source = HttpCatalogSource::new(url).without_proxy();
        assert!(matches!(source.fetch(), Err(FetchError::Status(500))));
    }

    #[test]
    fn test_http_source_returns_body_on_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
        );
        let source = HttpCatalogSource::new(url).without_proxy();
        assert_eq!(source.fetch().unwrap(), "[]");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "Catalog endpoint returned status 503"
        );
    }
}
