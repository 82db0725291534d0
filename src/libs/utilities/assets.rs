// Streams a release asset to a local file.
// The body is copied in fixed-size chunks and never held in memory as a whole.

use crate::libs::download_client::DownloadClient;
use crate::libs::utilities::progress::{ProgressReporter, reporter_for};
use crate::log_debug;
use crate::schemas::errors::GetGovcError;
use colored::Colorize;
use std::io::{self, Read, Write};

/// Size of each read from the response body.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Copies `reader` into `writer` chunk by chunk, reporting the running total after each chunk.
///
/// # Arguments
/// * `reader`: The response body.
/// * `writer`: The destination, typically the temporary download file.
/// * `reporter`: Receives the byte count after every chunk and `finish()` at the end.
///
/// # Returns
/// * `io::Result<u64>`: Total bytes written.
pub fn stream_to_file(
    reader: &mut dyn Read,
    writer: &mut dyn Write,
    reporter: &mut dyn ProgressReporter,
) -> io::Result<u64> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut downloaded: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        downloaded += read as u64;
        reporter.advance(downloaded);
    }

    writer.flush()?;
    reporter.finish();
    Ok(downloaded)
}

/// Downloads the asset at `url` into `dest`.
/// A progress bar is drawn when the server declares a length and `quiet` is off.
///
/// # Returns
/// * `Ok(bytes)` on success.
/// * `Err(GetGovcError::Download)` on transport errors, including failures mid-body.
pub fn download_file(
    client: &impl DownloadClient,
    url: &str,
    dest: &mut dyn Write,
    quiet: bool,
) -> Result<u64, GetGovcError> {
    let mut stream = client.open_asset(url)?;
    let mut reporter = reporter_for(stream.content_length, quiet);

    let written = stream_to_file(stream.reader.as_mut(), dest, reporter.as_mut()).map_err(|e| {
        GetGovcError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })?;

    if let Some(expected) = stream.content_length {
        if expected != written {
            return Err(GetGovcError::Download {
                url: url.to_string(),
                reason: format!("expected {expected} bytes, received {written}"),
            });
        }
    }

    log_debug!("[Download] {} bytes written from {}", written, url.green());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::download_client::AssetStream;
    use crate::schemas::common::Release;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingProgress {
        updates: Vec<u64>,
        finished: bool,
    }

    impl ProgressReporter for RecordingProgress {
        fn advance(&mut self, downloaded: u64) {
            self.updates.push(downloaded);
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn test_stream_to_file_reports_each_chunk() -> anyhow::Result<()> {
        let payload = vec![7u8; CHUNK_SIZE * 2 + 100];
        let mut reader = Cursor::new(payload.clone());
        let mut out = Vec::new();
        let mut progress = RecordingProgress::default();

        let written = stream_to_file(&mut reader, &mut out, &mut progress)?;

        assert_eq!(written, payload.len() as u64);
        assert_eq!(out, payload);
        assert_eq!(
            progress.updates,
            vec![CHUNK_SIZE as u64, 2 * CHUNK_SIZE as u64, payload.len() as u64]
        );
        assert!(progress.finished);
        Ok(())
    }

    #[test]
    fn test_stream_to_file_empty_body() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut progress = RecordingProgress::default();
        let written = stream_to_file(&mut io::empty(), &mut out, &mut progress)?;
        assert_eq!(written, 0);
        assert!(progress.updates.is_empty());
        assert!(progress.finished);
        Ok(())
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
        }
    }

    struct BodyClient {
        body: fn() -> Box<dyn Read + Send>,
        content_length: Option<u64>,
    }

    impl DownloadClient for BodyClient {
        fn fetch_releases(&self, _url: &str) -> Result<Vec<Release>, GetGovcError> {
            Ok(vec![])
        }

        fn open_asset(&self, _url: &str) -> Result<AssetStream, GetGovcError> {
            Ok(AssetStream {
                reader: (self.body)(),
                content_length: self.content_length,
            })
        }
    }

    #[test]
    fn test_download_file_maps_body_errors_to_download_error() {
        let client = BodyClient {
            body: || Box::new(FailingReader),
            content_length: None,
        };
        let mut out = Vec::new();
        let err = download_file(&client, "https://example.com/govc.tar.gz", &mut out, true).unwrap_err();
        assert!(matches!(err, GetGovcError::Download { .. }));
    }

    #[test]
    fn test_download_file_detects_truncated_body() {
        let client = BodyClient {
            body: || Box::new(Cursor::new(vec![1u8; 10])),
            content_length: Some(20),
        };
        let mut out = Vec::new();
        let err = download_file(&client, "https://example.com/govc.tar.gz", &mut out, true).unwrap_err();
        assert!(err.to_string().contains("expected 20 bytes"));
    }

    #[test]
    fn test_download_file_writes_body() -> anyhow::Result<()> {
        let client = BodyClient {
            body: || Box::new(Cursor::new(b"archive-bytes".to_vec())),
            content_length: Some(13),
        };
        let mut out = Vec::new();
        let written = download_file(&client, "https://example.com/govc.tar.gz", &mut out, true)?;
        assert_eq!(written, 13);
        assert_eq!(out, b"archive-bytes");
        Ok(())
    }
}
