use std::io::{self, Read};

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, KeyIvInit};

use super::InputError;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Default ciphertext chunk read per refill: 1 MiB, block-aligned.
pub const CHUNK_SIZE: usize = 1 << 20;

/// Streaming AES-256-CBC decryption over an inner reader.
///
/// The first [`BLOCK_SIZE`] bytes of the stream are the iv. Ciphertext is
/// decrypted in block-aligned chunks; the final decrypted block is held back
/// until end-of-stream, where its last byte gives the number of trailing
/// padding bytes to strip. Only that final byte is authoritative.
pub struct DecryptReader<R> {
    inner: R,
    decryptor: Aes256CbcDec,
    chunk_size: usize,
    // Decrypted bytes ready to serve.
    buf: Vec<u8>,
    pos: usize,
    // The final decrypted block seen so far.
    holdback: Option<[u8; BLOCK_SIZE]>,
    saw_ciphertext: bool,
    done: bool,
}

impl<R: Read> DecryptReader<R> {
    pub fn new(inner: R, key: &[u8; 32]) -> Result<Self, InputError> {
        Self::with_chunk_size(inner, key, CHUNK_SIZE)
    }

    pub fn with_chunk_size(
        mut inner: R,
        key: &[u8; 32],
        chunk_size: usize,
    ) -> Result<Self, InputError> {
        if chunk_size == 0 || chunk_size % BLOCK_SIZE != 0 {
            return Err(InputError::BadChunkSize(chunk_size));
        }

        let mut iv = [0u8; BLOCK_SIZE];
        inner.read_exact(&mut iv).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                InputError::MissingIv
            } else {
                InputError::Io(e)
            }
        })?;
        let decryptor =
            Aes256CbcDec::new_from_slices(key, &iv).map_err(|_| InputError::Key)?;

        Ok(DecryptReader {
            inner,
            decryptor,
            chunk_size,
            buf: Vec::new(),
            pos: 0,
            holdback: None,
            saw_ciphertext: false,
            done: false,
        })
    }

    fn refill(&mut self) -> io::Result<()> {
        let mut chunk = vec![0u8; self.chunk_size];
        let n = read_full(&mut self.inner, &mut chunk)?;

        if n == 0 {
            self.done = true;
            let Some(tail) = self.holdback.take() else {
                if self.saw_ciphertext {
                    return Ok(());
                }
                return Err(InputError::ShortRead.into());
            };
            let pad = tail[BLOCK_SIZE - 1];
            if pad == 0 || pad as usize > BLOCK_SIZE {
                return Err(InputError::BadPadding(pad).into());
            }
            self.buf = tail[..BLOCK_SIZE - pad as usize].to_vec();
            self.pos = 0;
            return Ok(());
        }
        if n % BLOCK_SIZE != 0 {
            return Err(InputError::NotBlockAligned.into());
        }
        chunk.truncate(n);
        self.saw_ciphertext = true;

        for block in chunk.chunks_exact_mut(BLOCK_SIZE) {
            self.decryptor
                .decrypt_block_mut(GenericArray::from_mut_slice(block));
        }

        let split = chunk.len() - BLOCK_SIZE;
        let mut out = Vec::with_capacity(split + BLOCK_SIZE);
        if let Some(prev) = self.holdback.take() {
            out.extend_from_slice(&prev);
        }
        out.extend_from_slice(&chunk[..split]);

        let mut tail = [0u8; BLOCK_SIZE];
        tail.copy_from_slice(&chunk[split..]);
        self.holdback = Some(tail);

        self.buf = out;
        self.pos = 0;
        Ok(())
    }
}

impl<R: Read> Read for DecryptReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos < self.buf.len() {
                let n = out.len().min(self.buf.len() - self.pos);
                out[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }
            if self.done {
                return Ok(0);
            }
            self.refill()?;
        }
    }
}

fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes::cipher::BlockEncryptMut;

    type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

    const KEY: [u8; 32] = [7u8; 32];
    const IV: [u8; 16] = [3u8; 16];

    fn encrypt(padded: &[u8]) -> Vec<u8> {
        assert_eq!(padded.len() % BLOCK_SIZE, 0);
        let mut out = padded.to_vec();
        let mut encryptor = Aes256CbcEnc::new_from_slices(&KEY, &IV).unwrap();
        for block in out.chunks_exact_mut(BLOCK_SIZE) {
            encryptor.encrypt_block_mut(GenericArray::from_mut_slice(block));
        }
        let mut file = IV.to_vec();
        file.extend_from_slice(&out);
        file
    }

    fn pad(payload: &[u8]) -> Vec<u8> {
        let mut padded = payload.to_vec();
        let mut pad = BLOCK_SIZE - padded.len() % BLOCK_SIZE;
        if pad == 0 {
            pad = BLOCK_SIZE;
        }
        padded.extend(std::iter::repeat(0xAA).take(pad - 1));
        padded.push(pad as u8);
        padded
    }

    fn decrypt_all(file: &[u8], chunk_size: usize) -> io::Result<Vec<u8>> {
        let mut reader =
            DecryptReader::with_chunk_size(file, &KEY, chunk_size).map_err(io::Error::from)?;
        let mut out = Vec::new();
        reader.read_to_end(&mut out)?;
        Ok(out)
    }

    #[test]
    fn decrypts_and_strips_padding() {
        let payload = b"hello, destination";
        let file = encrypt(&pad(payload));
        assert_eq!(decrypt_all(&file, CHUNK_SIZE).unwrap(), payload);
    }

    #[test]
    fn holdback_survives_chunk_boundaries() {
        // 5 blocks of payload with a tiny chunk size forces several refills.
        let payload: Vec<u8> = (0..73u8).collect();
        let file = encrypt(&pad(&payload));
        assert_eq!(decrypt_all(&file, 32).unwrap(), payload);
    }

    #[test]
    fn whole_final_block_of_padding() {
        // A block-aligned payload gains a full block of padding.
        let payload = [9u8; BLOCK_SIZE * 2];
        let padded = pad(&payload);
        assert_eq!(padded.len(), BLOCK_SIZE * 3);
        let file = encrypt(&padded);
        assert_eq!(decrypt_all(&file, CHUNK_SIZE).unwrap(), payload);
    }

    #[test]
    fn intermediate_pad_bytes_are_not_validated() {
        // Only the final byte is authoritative; the filler may be anything.
        let mut padded = b"abc".to_vec();
        padded.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        padded.extend_from_slice(&[0x09, 0x0A, 0x0B, 0x0C]);
        padded.push(13);
        assert_eq!(padded.len(), BLOCK_SIZE);
        let file = encrypt(&padded);
        assert_eq!(decrypt_all(&file, CHUNK_SIZE).unwrap(), b"abc");
    }

    #[test]
    fn missing_iv() {
        let err = DecryptReader::new(&[1u8, 2, 3][..], &KEY).err().unwrap();
        assert!(matches!(err, InputError::MissingIv));
    }

    #[test]
    fn empty_ciphertext_is_short() {
        let err = decrypt_all(&IV, CHUNK_SIZE).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn unaligned_ciphertext() {
        let mut file = encrypt(&pad(b"xyz"));
        file.pop();
        let err = decrypt_all(&file, CHUNK_SIZE).unwrap_err();
        assert!(err.to_string().contains("block size"));
    }

    #[test]
    fn zero_padding_byte_is_invalid() {
        let mut block = [0u8; BLOCK_SIZE];
        block[BLOCK_SIZE - 1] = 0;
        let file = encrypt(&block);
        let err = decrypt_all(&file, CHUNK_SIZE).unwrap_err();
        assert!(err.to_string().contains("padding"));
    }

    #[test]
    fn chunk_size_must_be_block_aligned() {
        let file = encrypt(&pad(b"x"));
        let err = DecryptReader::with_chunk_size(&file[..], &KEY, 100)
            .err()
            .unwrap();
        assert!(matches!(err, InputError::BadChunkSize(100)));
    }
}
