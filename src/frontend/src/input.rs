use std::io::{self, Read};

/// Whitespace as understood by formatted stream extraction, including `\v`.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Reads the next whitespace-delimited token, one byte at a time.
///
/// Leading whitespace is skipped and the byte that ends the token is consumed,
/// so nothing past the first token is read from an interactive stdin. Returns
/// `None` if the input ends before any token starts.
pub fn read_token(stdin: &mut impl Read) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    let mut buf = [0u8];
    loop {
        if let Err(e) = stdin.read_exact(&mut buf) {
            let io::ErrorKind::UnexpectedEof = e.kind() else {
                return Err(e);
            };
            break;
        }
        if is_space(buf[0]) {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(buf[0]);
    }
    Ok((!token.is_empty()).then(|| String::from_utf8_lossy(&token).into_owned()))
}
