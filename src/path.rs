/// Splits a request path on `/`, ignoring leading and trailing slashes,
/// and percent-decodes each segment. Splitting happens before decoding,
/// so an encoded `/` inside a segment does not become a separator.
///
/// The root path produces exactly one empty segment, so the pattern `/`
/// matches the path `/`.
pub fn split_segments(path: &str) -> Vec<String> {
    path.trim_matches('/').split('/').map(decode_segment).collect()
}

/// Lenient percent-decoding of one path segment: `+` becomes a space,
/// `%XX` with valid hex digits decodes to that byte, and malformed `%`
/// sequences pass through verbatim. Never fails; byte sequences that do
/// not form valid UTF-8 are replaced lossily.
pub fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match decode_hex_pair(bytes[i + 1], bytes[i + 2]) {
                Some(value) => {
                    out.push(value);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    match String::from_utf8(out) {
        Ok(decoded) => decoded,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi as u8) << 4 | lo as u8)
}
