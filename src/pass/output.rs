//! Password output.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::charset::{CharacterClass, ClassDictionary};
use super::generate::Generator;
use crate::error::{Error, Result};
use crate::rand::Source;

const BUF_SIZE: usize = 8 * 1024;

/// Buffered writer that wipes its staging buffer after every flush.
///
/// The buffer never grows past its initial capacity, so no stale copy of a
/// password is left behind by a reallocation.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(BUF_SIZE, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush_buf()?;
        }
        if data.len() >= self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
    }
}

/// Generate `count` passwords, one per line.
///
/// Passwords written before a failure are flushed before the error is
/// returned. A closed reader (broken pipe) ends the batch quietly.
pub fn write_batch<S, W>(
    generator: &Generator,
    count: usize,
    source: &mut S,
    out: &mut W,
) -> Result<()>
where
    S: Source + ?Sized,
    W: Write,
{
    let written = emit(generator, count, source, out);
    let flushed = out.flush().map_err(Error::Output);

    match written.and(flushed) {
        Err(Error::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed early, stopping");
            Ok(())
        }
        res => res,
    }
}

fn emit<S, W>(generator: &Generator, count: usize, source: &mut S, out: &mut W) -> Result<()>
where
    S: Source + ?Sized,
    W: Write,
{
    for _ in 0..count {
        let pass = generator.generate(source)?;
        out.write_all(pass.as_bytes()).map_err(Error::Output)?;
        out.write_all(b"\n").map_err(Error::Output)?;
    }
    Ok(())
}

/// Write every class pool, one line per class.
pub fn dump_pools<W: Write>(dict: &ClassDictionary, out: &mut W) -> io::Result<()> {
    for class in CharacterClass::ALL {
        let chars: String = dict.pool(class).iter().collect();
        writeln!(out, "{class} chars: {chars:?}")?;
    }
    Ok(())
}
