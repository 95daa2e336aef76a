use xi_rope::Rope;

/// Randomly addressable byte source the lexer reads a document through.
///
/// Offsets are byte offsets. Lines are terminated by `\n` only; a line's
/// number is the count of `\n` bytes before it.
pub trait CharSource {
    /// Document length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte at `offset`, or `0` when `offset` is past the end.
    fn byte_at(&self, offset: usize) -> u8;

    /// Line containing `offset`. Offsets past the end map to the last line.
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Offset of the first byte of `line`, clamped to `len()`.
    fn offset_of_line(&self, line: usize) -> usize;

    /// Bytes from `offset` to the end of the document.
    fn bytes_from(&self, offset: usize) -> Box<dyn Iterator<Item = u8> + '_> {
        Box::new((offset..self.len()).map(|i| self.byte_at(i)))
    }

    /// Bytes of `line`, including its terminator if it has one.
    fn line_bytes(&self, line: usize) -> Vec<u8> {
        let start = self.offset_of_line(line);
        let end = self.offset_of_line(line + 1);
        self.bytes_from(start).take(end - start).collect()
    }
}

impl CharSource for Rope {
    fn len(&self) -> usize {
        Rope::len(self)
    }

    fn byte_at(&self, offset: usize) -> u8 {
        if offset < Rope::len(self) {
            Rope::byte_at(self, offset)
        } else {
            0
        }
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        Rope::line_of_offset(self, offset.min(Rope::len(self)))
    }

    fn offset_of_line(&self, line: usize) -> usize {
        let len = Rope::len(self);
        // xi-rope asserts on lines past the last one
        if line > Rope::line_of_offset(self, len) {
            return len;
        }
        Rope::offset_of_line(self, line).min(len)
    }

    fn bytes_from(&self, offset: usize) -> Box<dyn Iterator<Item = u8> + '_> {
        let len = Rope::len(self);
        let start = offset.min(len);
        Box::new(self.iter_chunks(start..len).flat_map(str::bytes))
    }
}

impl CharSource for str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self.as_bytes().get(offset).copied().unwrap_or(0)
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        let end = offset.min(str::len(self));
        self.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count()
    }

    fn offset_of_line(&self, line: usize) -> usize {
        if line == 0 {
            return 0;
        }
        self.as_bytes()
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .nth(line - 1)
            .map_or(str::len(self), |(i, _)| i + 1)
    }

    fn bytes_from(&self, offset: usize) -> Box<dyn Iterator<Item = u8> + '_> {
        let start = offset.min(str::len(self));
        Box::new(self.as_bytes()[start..].iter().copied())
    }
}
