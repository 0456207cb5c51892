//! Multipart bodies for publish and upload requests.
//!
//! The encoder frames parts the way a `multipart/form-data` primitive does and
//! then relabels the content type as `multipart/mixed`, the only framing the
//! server accepts. The parser takes such bodies apart again; it is used to
//! inspect encoded requests.

use bytes::{BufMut, Bytes, BytesMut};

/// Name of the part carrying the XML metadata document.
pub const METADATA_PART: &str = "request_payload";

/// One named part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Form field name.
    pub name: String,
    /// File name, possibly empty. Always written.
    pub filename: String,
    /// Payload.
    pub data: Bytes,
    /// MIME type of the payload.
    pub content_type: String,
}

impl Part {
    /// The metadata part: an XML document with an empty file name.
    pub fn metadata(document: Bytes) -> Self {
        Self {
            name: METADATA_PART.to_owned(),
            filename: String::new(),
            data: document,
            content_type: mime::TEXT_XML.to_string(),
        }
    }

    /// A binary part with a caller-supplied file name.
    pub fn binary(name: impl Into<String>, filename: impl Into<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            data,
            content_type: mime::APPLICATION_OCTET_STREAM.to_string(),
        }
    }
}

/// A fresh boundary: 32 lowercase hex digits.
#[must_use]
pub fn generate_boundary() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Encode `parts` in order under a fresh boundary.
///
/// Returns the body and its `multipart/mixed` content type.
#[must_use]
pub fn encode(parts: &[Part]) -> (Bytes, String) {
    encode_with_boundary(parts, &generate_boundary())
}

/// Encode `parts` in order under `boundary`.
#[must_use]
pub fn encode_with_boundary(parts: &[Part], boundary: &str) -> (Bytes, String) {
    let size: usize = parts
        .iter()
        .map(|p| p.data.len() + p.name.len() + p.filename.len() + 128)
        .sum();
    let mut body = BytesMut::with_capacity(size + boundary.len() + 8);

    for part in parts {
        body.put_slice(b"--");
        body.put_slice(boundary.as_bytes());
        body.put_slice(b"\r\n");
        body.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                format_param(&part.name),
                format_param(&part.filename)
            )
            .as_bytes(),
        );
        body.put_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.put_slice(&part.data);
        body.put_slice(b"\r\n");
    }
    body.put_slice(b"--");
    body.put_slice(boundary.as_bytes());
    body.put_slice(b"--\r\n");

    let content_type = force_mixed(&format!("{}; boundary={boundary}", mime::MULTIPART_FORM_DATA));
    tracing::debug!(parts = parts.len(), boundary, bytes = body.len(), "encoded multipart body");
    (body.freeze(), content_type)
}

/// Replace the media type of a content type with `multipart/mixed`, keeping
/// every parameter.
#[must_use]
pub fn force_mixed(content_type: &str) -> String {
    match content_type.split_once(';') {
        Some((_, params)) => format!("multipart/mixed;{params}"),
        None => "multipart/mixed".to_owned(),
    }
}

/// Escape a `Content-Disposition` parameter value the way HTML5 form
/// submission does: `"` and control characters become `%XX`, a backslash is
/// doubled. The result never contains a quote or a line break.
#[must_use]
pub fn format_param(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if is_percent_escaped(c) => out.push_str(&format!("%{:02X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`format_param`].
fn unescape_param(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(c) = rest.chars().next() {
        let decoded = rest
            .strip_prefix('%')
            .and_then(|r| r.get(..2))
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .map(char::from)
            .filter(|c| is_percent_escaped(*c));
        if let Some(decoded) = decoded {
            out.push(decoded);
            rest = &rest[3..];
        } else if rest.starts_with("\\\\") {
            out.push('\\');
            rest = &rest[2..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

fn is_percent_escaped(c: char) -> bool {
    c == '"' || (c <= '\u{1f}' && c != '\u{1b}')
}

/// Errors raised while taking a multipart body apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultipartError {
    /// The content type is not a multipart type.
    #[error("expected a multipart content type, got: {0}")]
    NotMultipart(String),
    /// The content type carries no usable boundary.
    #[error("missing boundary in content type")]
    MissingBoundary,
    /// A part has no `Content-Disposition` name.
    #[error("part {0} has no name")]
    UnnamedPart(usize),
}

/// A part recovered from an encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPart {
    /// Form field name.
    pub name: String,
    /// File name, when the part declares one.
    pub filename: Option<String>,
    /// Declared content type.
    pub content_type: Option<String>,
    /// Payload.
    pub data: Bytes,
}

/// Extract the boundary from a `multipart/*; boundary=...` content type.
pub fn extract_boundary(content_type: &str) -> Result<String, MultipartError> {
    if !content_type.to_ascii_lowercase().starts_with("multipart/") {
        return Err(MultipartError::NotMultipart(content_type.to_owned()));
    }

    content_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("boundary="))
        .map(|b| b.trim_matches('"'))
        .find(|b| !b.is_empty())
        .map(str::to_owned)
        .ok_or(MultipartError::MissingBoundary)
}

/// Parse a multipart body into its parts, in order.
pub fn parse(body: &[u8], boundary: &str) -> Result<Vec<ParsedPart>, MultipartError> {
    let delimiter = format!("--{boundary}");

    split_parts(body, delimiter.as_bytes())
        .into_iter()
        .filter_map(split_headers_body)
        .enumerate()
        .map(|(index, (headers, data))| {
            let headers = String::from_utf8_lossy(headers);
            let disposition = header(&headers, "content-disposition").unwrap_or_default();
            let name = quoted_param(disposition, "name").ok_or(MultipartError::UnnamedPart(index))?;
            Ok(ParsedPart {
                name,
                filename: quoted_param(disposition, "filename"),
                content_type: header(&headers, "content-type").map(str::to_owned),
                data: Bytes::copy_from_slice(data),
            })
        })
        .collect()
}

fn split_parts<'a>(body: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut parts = Vec::new();
    let Some(start) = find_bytes(body, delimiter) else {
        return parts;
    };
    let mut remaining = &body[start + delimiter.len()..];

    // A delimiter followed by `--` closes the body.
    while !remaining.starts_with(b"--") {
        remaining = skip_crlf(remaining);
        match find_bytes(remaining, delimiter) {
            Some(pos) => {
                parts.push(strip_trailing_crlf(&remaining[..pos]));
                remaining = &remaining[pos + delimiter.len()..];
            }
            None => {
                let part = strip_trailing_crlf(remaining);
                if !part.is_empty() {
                    parts.push(part);
                }
                break;
            }
        }
    }
    parts
}

fn split_headers_body(part: &[u8]) -> Option<(&[u8], &[u8])> {
    let separator = b"\r\n\r\n";
    find_bytes(part, separator).map(|pos| (&part[..pos], &part[pos + separator.len()..]))
}

/// Value of header `name` (lower-case) within a part's header block.
fn header<'a>(headers: &'a str, name: &str) -> Option<&'a str> {
    headers.split("\r\n").find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim().eq_ignore_ascii_case(name).then_some(value.trim())
    })
}

/// Value of `param` in a header value, quoted or bare.
///
/// Quoted values are read up to the closing quote, so they may contain `;`.
fn quoted_param(value: &str, param: &str) -> Option<String> {
    let mut rest = value;
    while let Some(eq) = rest.find('=') {
        let key = rest[..eq].rsplit(';').next().unwrap_or_default().trim();
        let after = &rest[eq + 1..];
        let (raw, tail) = match after.strip_prefix('"') {
            Some(quoted) => {
                let end = quoted.find('"')?;
                (&quoted[..end], &quoted[end + 1..])
            }
            None => {
                let end = after.find(';').unwrap_or(after.len());
                (after[..end].trim(), &after[end..])
            }
        };
        if key.eq_ignore_ascii_case(param) {
            return Some(unescape_param(raw));
        }
        rest = tail;
    }
    None
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn skip_crlf(data: &[u8]) -> &[u8] {
    data.strip_prefix(b"\r\n").unwrap_or(data)
}

fn strip_trailing_crlf(data: &[u8]) -> &[u8] {
    data.strip_suffix(b"\r\n").unwrap_or(data)
}
