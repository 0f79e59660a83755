//! Bounded cursors over borrowed byte buffers.
//!
//! Every codec in this crate reads and writes through one of these views.
//! Both follow the same discipline: check the remaining space before
//! touching a byte, then advance the position by exactly the bytes
//! consumed or produced. A failing operation restores the position it
//! started from, so callers can retry with a different codec or abort
//! cleanly.

use crate::error::{Error, Result};

/// Read cursor over a borrowed byte buffer.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    /// Rewinds to the start of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Runs `op`, restoring the current position if it fails.
    pub(crate) fn atomically<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mark = self.pos;
        let out = op(self);
        if out.is_err() {
            self.pos = mark;
        }
        out
    }

    pub(crate) fn peek_u8(&self) -> Result<u8> {
        if self.is_empty() {
            return Err(Error::BufferTooSmall);
        }
        Ok(self.data[self.pos])
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        let byte = self.peek_u8()?;
        self.pos += 1;
        Ok(byte)
    }

    pub(crate) fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::BufferTooSmall);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}

/// Write cursor over a borrowed byte buffer.
#[derive(Debug)]
pub struct Writer<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Writer { data, pos: 0 }
    }

    /// Rewinds to the start of the buffer, discarding written output.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.data[..self.pos]
    }

    /// Runs `op`, restoring the current position if it fails. Bytes past
    /// the restored position are not part of [`written`](Self::written)
    /// and get overwritten by the next successful operation.
    pub(crate) fn atomically<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mark = self.pos;
        let out = op(self);
        if out.is_err() {
            self.pos = mark;
        }
        out
    }

    pub(crate) fn write_u8(&mut self, byte: u8) -> Result<()> {
        if self.remaining() < 1 {
            return Err(Error::BufferTooSmall);
        }
        self.data[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    pub(crate) fn write_slice(&mut self, bytes: &[u8]) -> Result<()> {
        if self.remaining() < bytes.len() {
            return Err(Error::BufferTooSmall);
        }
        self.data[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Reader, Writer};
    use crate::error::Error;

    #[test]
    fn test_reader_tracks_position_and_remaining() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);

        assert_eq!(0, reader.position());
        assert_eq!(3, reader.remaining());

        assert_eq!(0x01, reader.read_u8().unwrap());
        assert_eq!(&[0x02, 0x03], reader.read_slice(2).unwrap());
        assert_eq!(3, reader.position());
        assert!(reader.is_empty());

        reader.reset();
        assert_eq!(0, reader.position());
        assert_eq!(3, reader.remaining());
    }

    #[test]
    fn test_reader_checks_bounds_before_reading() {
        let data = [0x01, 0x02];
        let mut reader = Reader::new(&data);

        assert_eq!(Err(Error::BufferTooSmall), reader.read_slice(3));
        // the failing read must not have moved the cursor
        assert_eq!(0, reader.position());
        assert_eq!(&[0x01, 0x02], reader.read_slice(2).unwrap());
        assert_eq!(Err(Error::BufferTooSmall), reader.read_u8());
    }

    #[test]
    fn test_writer_tracks_written_prefix() {
        let mut buf = [0u8; 4];
        let mut writer = Writer::new(&mut buf);

        writer.write_u8(0xAA).unwrap();
        writer.write_slice(&[0xBB, 0xCC]).unwrap();
        assert_eq!(&[0xAA, 0xBB, 0xCC], writer.written());
        assert_eq!(1, writer.remaining());

        writer.reset();
        assert_eq!(0, writer.position());
        assert!(writer.written().is_empty());
    }

    #[test]
    fn test_writer_rejects_writes_past_capacity() {
        let mut buf = [0u8; 2];
        let mut writer = Writer::new(&mut buf);

        assert_eq!(Err(Error::BufferTooSmall), writer.write_slice(&[0; 3]));
        assert_eq!(0, writer.position());

        writer.write_slice(&[0x01, 0x02]).unwrap();
        assert_eq!(Err(Error::BufferTooSmall), writer.write_u8(0x03));
        assert_eq!(&[0x01, 0x02], writer.written());
    }
}
