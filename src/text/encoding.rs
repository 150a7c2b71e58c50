use encoding_rs::WINDOWS_1252;

/// Code page the host reports for UTF-8 documents
pub const UTF8_CODE_PAGE: u32 = 65001;

/// The single-byte page every other document is assumed to use
pub const LEGACY_CODE_PAGE: u32 = 1252;

/// Encoding of the host's active document.
///
/// Only two states are distinguished. Any code page other than UTF-8 is
/// treated as Windows-1252, which is an approximation: hosts can report
/// other single- and multi-byte pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Legacy,
}

impl Encoding {
    pub fn from_code_page(code_page: u32) -> Self {
        if code_page == UTF8_CODE_PAGE {
            Encoding::Utf8
        } else {
            Encoding::Legacy
        }
    }

    pub fn code_page(self) -> u32 {
        match self {
            Encoding::Utf8 => UTF8_CODE_PAGE,
            Encoding::Legacy => LEGACY_CODE_PAGE,
        }
    }

    /// Byte length of `text` once encoded for the host
    pub fn host_len(self, text: &str) -> usize {
        match self {
            Encoding::Utf8 => text.len(),
            // Every scalar becomes exactly one byte, '?' when unmappable
            Encoding::Legacy => text.chars().count(),
        }
    }
}

/// Encode script text into host bytes
pub fn encode(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => text.as_bytes().to_vec(),
        Encoding::Legacy => encode_legacy(text),
    }
}

/// Decode host bytes into script text. Malformed input is replaced, never rejected.
pub fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Encoding::Legacy => WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned(),
    }
}

fn encode_legacy(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];

    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch as u8);
            continue;
        }

        // encoding_rs writes numeric character references for unmappable
        // input; the host expects a single substitution byte instead
        let (bytes, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
        if unmappable || bytes.len() != 1 {
            out.push(b'?');
        } else {
            out.push(bytes[0]);
        }
    }

    out
}
