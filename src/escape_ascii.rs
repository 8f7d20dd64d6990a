use std::fmt::{self, Debug};

pub(crate) struct EscapeAscii<'a>(pub(crate) &'a [u8]);

impl Debug for EscapeAscii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

/// Renders a membership table as the bytes it contains.
pub(crate) struct UnwantedSet<'a>(pub(crate) &'a [bool; 256]);

impl Debug for UnwantedSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for byte in u8::MIN..=u8::MAX {
            if self.0[usize::from(byte)] {
                write!(f, "{}", byte.escape_ascii())?;
            }
        }
        write!(f, "\"")
    }
}
