use std::borrow::Cow;

use csvframe_result::{Error, Result};

/// Character encoding applied to exported text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// ISO-8859-1: one byte per character, code points U+0000..=U+00FF.
    #[default]
    Latin1,
    Utf8,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Utf8 => "UTF-8",
        }
    }

    /// Encode `text` to bytes, failing on the first character the encoding
    /// cannot represent.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        if text.is_ascii() || *self == TextEncoding::Utf8 {
            return Ok(Cow::Borrowed(text.as_bytes()));
        }

        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let byte = u8::try_from(u32::from(ch)).map_err(|_| Error::Encoding {
                ch,
                encoding: self.name(),
            })?;
            out.push(byte);
        }
        Ok(Cow::Owned(out))
    }
}
