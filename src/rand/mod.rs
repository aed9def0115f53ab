//! Secure random source.
//!
//! Everything drawn here comes straight from the operating system CSPRNG via
//! `getrandom`. There is no userspace generator to fall back on: when the OS
//! source fails, the error goes to the caller.

use std::io;

/// A source of cryptographically secure random bytes.
pub trait Source {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()>;
}

/// The operating system random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl Source for OsSource {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        getrandom::fill(dest).map_err(io::Error::from)
    }
}

#[inline]
fn next_u64<S: Source + ?Sized>(source: &mut S) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    source.fill(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Draw an index uniformly from `0..bound`.
///
/// Values from the top, partial bucket of the `u64` range are rejected and
/// redrawn so that every index is equally likely.
///
/// # Panics
/// Panics if `bound` is zero.
pub fn below<S: Source + ?Sized>(source: &mut S, bound: usize) -> io::Result<usize> {
    assert!(bound > 0, "below() needs a non-empty range");
    let bound = bound as u64;
    let zone = u64::MAX - (u64::MAX % bound);

    loop {
        let v = next_u64(source)?;
        if v < zone {
            return Ok((v % bound) as usize);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Broken, Counter, Scripted};
    use super::*;

    #[test]
    fn below_stays_in_range() {
        let mut src = OsSource;
        for bound in [1usize, 2, 10, 95] {
            for _ in 0..200 {
                assert!(below(&mut src, bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn below_reduces_accepted_values() {
        let mut src = Scripted::new(&[0, 11, 95 * 3 + 7]);
        assert_eq!(below(&mut src, 10).unwrap(), 0);
        assert_eq!(below(&mut src, 10).unwrap(), 1);
        assert_eq!(below(&mut src, 95).unwrap(), 7);
    }

    #[test]
    fn below_redraws_from_the_partial_bucket() {
        // u64::MAX % 10 == 5, so the last six values are rejected.
        let mut src = Scripted::new(&[u64::MAX, u64::MAX - 5, 42]);
        assert_eq!(below(&mut src, 10).unwrap(), 2);
        assert!(src.0.is_empty());
    }

    #[test]
    fn below_propagates_source_errors() {
        let err = below(&mut Broken, 10).unwrap_err();
        assert_eq!(err.to_string(), "entropy unavailable");
    }

    #[test]
    fn below_covers_every_index() {
        let mut src = Counter(0);
        let mut seen = [false; 31];
        for _ in 0..31 {
            seen[below(&mut src, 31).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic]
    fn below_rejects_empty_range() {
        let _ = below(&mut OsSource, 0);
    }

    #[test]
    fn os_source_fills_buffers() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsSource.fill(&mut a).unwrap();
        OsSource.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
