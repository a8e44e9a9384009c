// parser.rs

const DELIMITERS: [char; 3] = [' ', '\t', '\n'];

/// Splits `line` on runs of spaces, tabs and newlines. Empty pieces are
/// dropped, at most `max_args` tokens are kept and each token is cut to
/// `max_len` bytes on a char boundary.
pub fn tokenize(line: &str, max_args: usize, max_len: usize) -> Vec<String> {
    line.split(DELIMITERS)
        .filter(|piece| !piece.is_empty())
        .take(max_args)
        .map(|piece| truncate_line(piece, max_len).to_string())
        .collect()
}

/// Cuts `line` to at most `max_bytes` bytes without splitting a char.
pub fn truncate_line(line: &str, max_bytes: usize) -> &str {
    if line.len() <= max_bytes {
        return line;
    }
    let mut end = max_bytes;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}
