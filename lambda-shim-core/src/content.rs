//! Binary/text classification and content-type sniffing.
//!
//! The gateway transports response bodies as strings, so anything that is
//! not known to be text must be base64-encoded to survive the trip.
//! [`is_textual`] makes that call from the Content-Type header, and
//! [`detect_content_type`] supplies a Content-Type from the body's leading
//! bytes when the handler set none.

/// Canonical name of the Content-Type header as it appears in envelopes.
pub const CONTENT_TYPE: &str = "Content-Type";

const TEXT_PREFIX: &str = "text/";

/// Media types that are text but do not fall under `text/*`.
const TEXT_FORMATS: &[&str] = &["application/json", "application/xml", "application/javascript"];

/// Number of leading body bytes the sniffer examines.
const SNIFF_LEN: usize = 512;

/// Whether a body with this Content-Type can travel as a plain string.
///
/// The media type portion is parsed out of the value (parameters such as
/// `charset` are ignored); a value that does not parse as a media type is
/// classified as binary so that unparseable content is never corrupted in
/// transit. `text/*` and the [`TEXT_FORMATS`] allow-list are textual,
/// everything else is binary.
pub fn is_textual(content_type: &str) -> bool {
    let Some(media_type) = parse_media_type(content_type) else {
        return false;
    };

    if media_type.starts_with(TEXT_PREFIX) {
        return true;
    }

    TEXT_FORMATS.contains(&media_type.as_str())
}

/// Extract the lowercased `type/subtype` from a Content-Type value, or
/// `None` if the value is not a well-formed media type.
fn parse_media_type(value: &str) -> Option<String> {
    let media = value.split(';').next().unwrap_or_default().trim();
    let (kind, subtype) = media.split_once('/')?;
    if kind.is_empty()
        || subtype.is_empty()
        || !kind.chars().all(is_token_char)
        || !subtype.chars().all(is_token_char)
    {
        return None;
    }
    Some(media.to_ascii_lowercase())
}

// RFC 7230 tchar
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// HTML tag signatures, matched case-insensitively after leading
/// whitespace and required to be followed by a space or `>`.
const HTML_SIGNATURES: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// Exact-prefix magic numbers, checked in order.
const EXACT_SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF-", "application/pdf"),
    (b"%!PS-Adobe-", "application/postscript"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"\x00\x00\x02\x00", "image/x-icon"),
    (b"BM", "image/bmp"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b".snd", "audio/basic"),
    (b"ID3", "audio/mpeg"),
    (b"OggS\x00", "application/ogg"),
    (b"MThd\x00\x00\x00\x06", "audio/midi"),
    (b"\x1a\x45\xdf\xa3", "video/webm"),
    (b"OTTO", "font/otf"),
    (b"ttcf", "font/collection"),
    (b"wOFF", "font/woff"),
    (b"wOF2", "font/woff2"),
    (b"\x00\x01\x00\x00", "font/ttf"),
    (b"\x1f\x8b\x08", "application/x-gzip"),
    (b"PK\x03\x04", "application/zip"),
    (b"Rar!\x1a\x07\x00", "application/x-rar-compressed"),
    (b"Rar!\x1a\x07\x01\x00", "application/x-rar-compressed"),
    (b"\x00asm", "application/wasm"),
];

/// Sniff a Content-Type from the leading bytes of a body.
///
/// Follows the conventional magic-byte algorithm: HTML/XML signatures
/// (tolerating leading whitespace), BOM markers, known binary magic
/// numbers, then a binary-byte scan that falls back to
/// `text/plain; charset=utf-8` or `application/octet-stream`. At most the
/// first [`SNIFF_LEN`] bytes are considered, so the result is
/// deterministic for identical byte sequences. Callers only apply this
/// when no Content-Type header is already present.
pub fn detect_content_type(body: &[u8]) -> &'static str {
    let data = &body[..body.len().min(SNIFF_LEN)];

    let trimmed = skip_sniff_whitespace(data);
    if let Some(content_type) = match_html(trimmed) {
        return content_type;
    }
    if trimmed.starts_with(b"<?xml") {
        return "text/xml; charset=utf-8";
    }

    if data.starts_with(&[0xfe, 0xff]) {
        return "text/plain; charset=utf-16be";
    }
    if data.starts_with(&[0xff, 0xfe]) {
        return "text/plain; charset=utf-16le";
    }
    if data.starts_with(&[0xef, 0xbb, 0xbf]) {
        return "text/plain; charset=utf-8";
    }

    for (signature, content_type) in EXACT_SIGNATURES {
        if data.starts_with(signature) {
            return content_type;
        }
    }
    if let Some(content_type) = match_riff(data) {
        return content_type;
    }
    if data.len() >= 12 && &data[4..8] == b"ftyp" {
        return "video/mp4";
    }

    if data.iter().copied().any(is_binary_byte) {
        "application/octet-stream"
    } else {
        "text/plain; charset=utf-8"
    }
}

fn skip_sniff_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|&b| !matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

fn match_html(data: &[u8]) -> Option<&'static str> {
    for signature in HTML_SIGNATURES {
        // The tag must terminate: signature followed by a space or '>'.
        if data.len() > signature.len()
            && data[..signature.len()].eq_ignore_ascii_case(signature)
            && matches!(data[signature.len()], b' ' | b'>')
        {
            return Some("text/html; charset=utf-8");
        }
    }
    None
}

fn match_riff(data: &[u8]) -> Option<&'static str> {
    if !data.starts_with(b"RIFF") && !data.starts_with(b"FORM") {
        return None;
    }
    if data.len() < 12 {
        return None;
    }
    match &data[8..12] {
        b"WEBP" if data.starts_with(b"RIFF") => Some("image/webp"),
        b"WAVE" if data.starts_with(b"RIFF") => Some("audio/wave"),
        b"AVI " if data.starts_with(b"RIFF") => Some("video/avi"),
        b"AIFF" if data.starts_with(b"FORM") => Some("audio/aiff"),
        _ => None,
    }
}

fn is_binary_byte(b: u8) -> bool {
    b <= 0x08 || b == 0x0b || (0x0e..=0x1a).contains(&b) || (0x1c..=0x1f).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_textual_table() {
        let cases = [
            ("//", false),
            ("text/plain", true),
            ("text/html; charset=utf-8", true),
            ("application/protobuf", false),
            ("application/json", true),
            ("application/json; charset=utf-8", true),
            ("application/xml", true),
            ("application/javascript", true),
            ("application/octet-stream", false),
            ("not a mime type", false),
            ("", false),
        ];

        for (content_type, expected) in cases {
            assert_eq!(
                is_textual(content_type),
                expected,
                "content type: {content_type:?}"
            );
        }
    }

    #[test]
    fn test_detect_plain_text() {
        assert_eq!(
            detect_content_type(b"hello, world"),
            "text/plain; charset=utf-8"
        );
        assert_eq!(detect_content_type(b""), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_detect_html_with_leading_whitespace() {
        assert_eq!(
            detect_content_type(b"\n\t  <html><body>hi</body></html>"),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            detect_content_type(b"<!DOCTYPE html><html></html>"),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_detect_xml() {
        assert_eq!(
            detect_content_type(b"<?xml version=\"1.0\"?><root/>"),
            "text/xml; charset=utf-8"
        );
    }

    #[test]
    fn test_detect_bom_markers() {
        assert_eq!(
            detect_content_type(&[0xef, 0xbb, 0xbf, b'h', b'i']),
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            detect_content_type(&[0xfe, 0xff, 0x00, 0x68]),
            "text/plain; charset=utf-16be"
        );
        assert_eq!(
            detect_content_type(&[0xff, 0xfe, 0x68, 0x00]),
            "text/plain; charset=utf-16le"
        );
    }

    #[test]
    fn test_detect_magic_numbers() {
        assert_eq!(
            detect_content_type(b"\x89PNG\r\n\x1a\nrest-of-image"),
            "image/png"
        );
        assert_eq!(detect_content_type(b"GIF89a..."), "image/gif");
        assert_eq!(
            detect_content_type(&[0x1f, 0x8b, 0x08, 0x00, 0x00]),
            "application/x-gzip"
        );
        assert_eq!(detect_content_type(b"%PDF-1.7 ..."), "application/pdf");
        assert_eq!(
            detect_content_type(b"RIFF\x24\x00\x00\x00WAVEfmt "),
            "audio/wave"
        );
    }

    #[test]
    fn test_detect_binary_fallback() {
        assert_eq!(
            detect_content_type(&[0x01, 0x02, 0x03, 0x04]),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_detect_is_deterministic() {
        let body = b"\x00\x01binary-ish";
        assert_eq!(detect_content_type(body), detect_content_type(body));
    }
}
