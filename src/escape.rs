use crate::escape_ascii::EscapeAscii;
use crate::{Escaper, HEX_CHARS};
use std::borrow::Cow;

impl Escaper {
    /// Escapes `input` by replacing every unwanted byte with the marker
    /// followed by the byte's value as two lowercase hex digits.
    ///
    /// Returns the input unchanged when it contains no unwanted byte.
    #[tracing::instrument(level = "trace", skip_all, fields(input = ?EscapeAscii(input)))]
    pub fn escape<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        let unwanted = input.iter().filter(|&&byte| self.is_unwanted(byte)).count();
        if unwanted == 0 {
            return Cow::Borrowed(input);
        }
        let mut buf = Vec::with_capacity(input.len() + 2 * unwanted);
        for &byte in input {
            if self.is_unwanted(byte) {
                buf.push(self.marker);
                buf.push(HEX_CHARS[usize::from(byte >> 4)]);
                buf.push(HEX_CHARS[usize::from(byte & 0x0f)]);
            } else {
                buf.push(byte);
            }
        }
        Cow::Owned(buf)
    }
}
