//! Layered readers over batch files: AES-256-CBC decryption with trailing
//! padding removal, zstd decompression, and csv row iteration. Layers are
//! peeled as composable `std::io::Read` adapters so a file is never buffered
//! whole.

mod decrypt;
pub mod rows;

use std::io::{self, Read};
use std::path::Path;

use crate::metrics::Metrics;

pub use decrypt::{DecryptReader, BLOCK_SIZE, CHUNK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Off,
    Zstd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encryption {
    None,
    Aes,
}

impl From<proto_fivetran::v2::Compression> for Compression {
    fn from(c: proto_fivetran::v2::Compression) -> Compression {
        match c {
            proto_fivetran::v2::Compression::Off => Compression::Off,
            proto_fivetran::v2::Compression::Zstd => Compression::Zstd,
        }
    }
}

impl From<proto_fivetran::v2::Encryption> for Encryption {
    fn from(e: proto_fivetran::v2::Encryption) -> Encryption {
        match e {
            proto_fivetran::v2::Encryption::None => Encryption::None,
            proto_fivetran::v2::Encryption::Aes => Encryption::Aes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read batch file: {0}")]
    Io(#[from] io::Error),

    #[error("batch file is missing its initialization vector")]
    MissingIv,

    #[error("ciphertext is empty")]
    ShortRead,

    #[error("ciphertext length is not a multiple of the cipher block size")]
    NotBlockAligned,

    #[error("invalid padding length {0}")]
    BadPadding(u8),

    #[error("chunk size {0} is not a multiple of the cipher block size")]
    BadChunkSize(usize),

    #[error("invalid decryption key")]
    Key,

    #[error("missing decryption key for encrypted file")]
    MissingKey,

    #[error("failed to start zstd decoding: {0}")]
    Zstd(io::Error),
}

impl From<InputError> for io::Error {
    fn from(err: InputError) -> io::Error {
        match err {
            InputError::Io(io) => io,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Opens a batch file and peels the declared layers, yielding a reader of
/// plaintext csv bytes. Bytes read from disk are counted against `metrics`.
pub fn open<'m>(
    path: &Path,
    compression: Compression,
    encryption: Encryption,
    key: Option<&[u8; 32]>,
    metrics: &'m Metrics,
) -> Result<Box<dyn Read + Send + 'm>, InputError> {
    let file = std::fs::File::open(path)?;
    let counted = CountingReader {
        inner: file,
        metrics,
    };

    let decrypted: Box<dyn Read + Send + 'm> = match encryption {
        Encryption::Aes => {
            let key = key.ok_or(InputError::MissingKey)?;
            Box::new(DecryptReader::new(counted, key)?)
        }
        Encryption::None => Box::new(counted),
    };

    match compression {
        Compression::Zstd => Ok(Box::new(
            zstd::stream::read::Decoder::new(decrypted).map_err(InputError::Zstd)?,
        )),
        Compression::Off => Ok(decrypted),
    }
}

/// Counts bytes read from the underlying source.
struct CountingReader<'m, R> {
    inner: R,
    metrics: &'m Metrics,
}

impl<'m, R: Read> Read for CountingReader<'m, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.metrics.add_bytes(n as u64);
        Ok(n)
    }
}
