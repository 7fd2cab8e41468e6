//! Byte sources the scanner can read control strings from.
//!
//! The scanner only needs sequential reads up to a declared length. Hosts
//! backed by emulated memory implement [`ByteSource`] directly; contiguous
//! buffers use the slice impls or [`SliceSource`].

/// Random-access byte supply, bounds-checked by the implementor.
pub trait ByteSource {
    /// Byte at `offset`, or `None` when the host cannot supply it.
    ///
    /// The cursor treats `None` like a terminator.
    fn read(&self, offset: u32) -> Option<u8>;

    /// Number of bytes the host is willing to supply.
    fn len(&self) -> u32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Address of byte 0 in the host's memory.
    ///
    /// Matrix operands are word aligned relative to the real address of the
    /// string, not to its start, so emulated-memory hosts report it here.
    fn base_address(&self) -> u32 {
        0
    }
}

impl ByteSource for [u8] {
    #[inline]
    fn read(&self, offset: u32) -> Option<u8> {
        self.get(offset as usize).copied()
    }

    #[inline]
    fn len(&self) -> u32 {
        u32::try_from(<[u8]>::len(self)).unwrap_or(u32::MAX)
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn read(&self, offset: u32) -> Option<u8> {
        self.as_slice().read(offset)
    }

    #[inline]
    fn len(&self) -> u32 {
        ByteSource::len(self.as_slice())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    #[inline]
    fn read(&self, offset: u32) -> Option<u8> {
        (**self).read(offset)
    }

    #[inline]
    fn len(&self) -> u32 {
        (**self).len()
    }

    #[inline]
    fn base_address(&self) -> u32 {
        (**self).base_address()
    }
}

/// A contiguous buffer that knows the address it was copied from.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    base: u32,
}

impl<'a> SliceSource<'a> {
    /// Buffer whose first byte sits at address 0 (word aligned).
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, base: 0 }
    }

    /// Buffer whose first byte was read from address `base`.
    pub fn at_address(bytes: &'a [u8], base: u32) -> Self {
        Self { bytes, base }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn read(&self, offset: u32) -> Option<u8> {
        self.bytes.read(offset)
    }

    #[inline]
    fn len(&self) -> u32 {
        ByteSource::len(self.bytes)
    }

    #[inline]
    fn base_address(&self) -> u32 {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_reads_are_bounds_checked() {
        let bytes: &[u8] = b"ab";
        assert_eq!(bytes.read(0), Some(b'a'));
        assert_eq!(bytes.read(1), Some(b'b'));
        assert_eq!(bytes.read(2), None);
        assert_eq!(ByteSource::len(bytes), 2);
        assert_eq!(bytes.base_address(), 0);
    }

    #[test]
    fn vec_and_reference_delegate() {
        let v = vec![1u8, 2, 3];
        let r = &v;
        assert_eq!(r.read(2), Some(3));
        assert_eq!(ByteSource::len(r), 3);
        assert!(!ByteSource::is_empty(r));
    }

    #[test]
    fn slice_source_reports_base_address() {
        let src = SliceSource::at_address(b"xyz", 0x8002);
        assert_eq!(src.base_address(), 0x8002);
        assert_eq!(src.read(1), Some(b'y'));
        assert_eq!(src.as_bytes(), b"xyz");
        assert_eq!(SliceSource::new(b"").len(), 0);
    }
}
