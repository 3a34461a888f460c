use std::fmt;
use std::io::Read;

use bytes::Bytes;

/// The body of an [`HttpResponse`](super::HttpResponse).
///
/// A [`ResponseBody::Stream`] can only be read once: [`ResponseBody::into_bytes`]
/// consumes it to the end and drops it, after which the buffered bytes are the only
/// source of truth.
#[derive(Default, derive_more::Debug)]
pub enum ResponseBody {
    /// No body.
    #[default]
    Empty,
    /// A body already held in memory.
    Buffered(Bytes),
    /// A single-read body stream.
    Stream(#[debug(skip)] Box<dyn Read + Send>),
}

impl ResponseBody {
    /// Creates a body from a single-read stream.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self::Stream(Box::new(reader))
    }

    /// Reads the whole body into memory.
    ///
    /// A stream is read to the end and dropped before returning, whether reading
    /// succeeds or not.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while reading the stream.
    pub fn into_bytes(self) -> std::io::Result<Bytes> {
        match self {
            Self::Empty => Ok(Bytes::new()),
            Self::Buffered(bytes) => Ok(bytes),
            Self::Stream(mut reader) => {
                let mut buffer = Vec::new();
                let result = reader.read_to_end(&mut buffer);
                drop(reader);
                result?;
                Ok(Bytes::from(buffer))
            }
        }
    }

    /// Returns the buffered bytes, if the body is in memory.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Empty | Self::Stream(_) => None,
            Self::Buffered(bytes) => Some(bytes),
        }
    }

    /// Checks whether the body is a stream not read yet.
    #[must_use]
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

impl From<Bytes> for ResponseBody {
    fn from(value: Bytes) -> Self {
        Self::Buffered(value)
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(value: Vec<u8>) -> Self {
        Self::Buffered(Bytes::from(value))
    }
}

impl From<&'static str> for ResponseBody {
    fn from(value: &'static str) -> Self {
        Self::Buffered(Bytes::from_static(value.as_bytes()))
    }
}

impl From<String> for ResponseBody {
    fn from(value: String) -> Self {
        Self::Buffered(Bytes::from(value))
    }
}

/// Renders body bytes for a log line.
pub(super) struct DisplayBody<'a>(pub(super) Option<&'a [u8]>);

impl fmt::Display for DisplayBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "[stream not read]"),
            Some([]) => Ok(()),
            Some(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// A reader counting how many times it is dropped.
    struct TrackedReader {
        inner: Cursor<Vec<u8>>,
        drops: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::other("connection reset"));
            }
            self.inner.read(buf)
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn tracked(data: &str, fail: bool) -> (ResponseBody, Arc<AtomicUsize>) {
        let drops = Arc::new(AtomicUsize::new(0));
        let reader = TrackedReader {
            inner: Cursor::new(data.as_bytes().to_vec()),
            drops: Arc::clone(&drops),
            fail,
        };
        (ResponseBody::from_reader(reader), drops)
    }

    #[test]
    fn should_buffer_stream_and_drop_it_once() -> anyhow::Result<()> {
        let (body, drops) = tracked(r#"{"id": 1}"#, false);
        assert!(body.is_stream());

        let bytes = body.into_bytes()?;

        assert_eq!(bytes, r#"{"id": 1}"#);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn should_drop_stream_on_read_failure() {
        let (body, drops) = tracked("ignored", true);

        let result = body.into_bytes();

        assert!(result.is_err());
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_keep_buffered_bytes() -> anyhow::Result<()> {
        let body = ResponseBody::from("hello");

        assert_eq!(body.as_bytes().map(|bytes| &bytes[..]), Some(&b"hello"[..]));
        assert_eq!(body.into_bytes()?, "hello");
        Ok(())
    }

    #[test]
    fn should_read_empty_body() -> anyhow::Result<()> {
        assert!(ResponseBody::Empty.into_bytes()?.is_empty());
        Ok(())
    }

    #[test]
    fn should_debug_stream_without_content() {
        let (body, _drops) = tracked("secret", false);

        insta::assert_snapshot!(format!("{body:?}"), @"Stream(..)");
    }
}
