//! Input processing.

use core::iter::FusedIterator;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use bstr::ByteSlice;


pub(crate) const NL: u8 = b'\n';

/// Split input into lines, stripping surrounding whitespace from each.
///
/// A trailing newline or a trailing whitespace-only segment does not produce
/// an extra line, but empty lines in the middle of the input are preserved.
///
/// # Examples
///
/// ```
/// let lines = schematic::input::lines(b"  467..\n\t...*..\r\n").collect::<Vec<_>>();
/// assert_eq!(lines, [&b"467.."[..], &b"...*.."[..]]);
/// ```
#[inline]
pub fn lines(data: &[u8]) -> Lines<'_> {
    Lines { data: Some(data) }
}

/// Iterator over stripped lines, see [lines].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    data: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data.take()?;

        let Some(n) = memchr::memchr(NL, data) else {
            let line = data.trim();
            return (!line.is_empty()).then_some(line);
        };

        let (line, rest) = (&data[..n], &data[n + 1..]);

        if !rest.is_empty() {
            self.data = Some(rest);
        }

        Some(line.trim())
    }
}

impl FusedIterator for Lines<'_> {}

/// Read the whole file at the given path.
///
/// Errors carry the path as context.
pub fn read<P>(path: P) -> Result<Vec<u8>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    #[inline]
    fn inner(path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
