//! Positional placeholder interpolation
//!
//! Follows message-format conventions: `{0}` is replaced by the first
//! argument, `{1,number}` by the second with the style ignored, `''` is a
//! literal quote and text between single quotes is copied verbatim.
//! Patterns are only interpreted when arguments are supplied.

/// Interpolate `args` into `pattern`
///
/// Never fails: a placeholder referring to a missing argument, a
/// non-numeric index or an unclosed brace is copied to the output as-is.
pub fn format_message(pattern: &str, args: &[String]) -> String {
    if args.is_empty() {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len() + args.iter().map(String::len).sum::<usize>());
    let mut chars = pattern.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '\'' => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                // Quoted literal up to the closing quote, with '' as an escaped quote inside
                loop {
                    match chars.next() {
                        Some((_, '\'')) => {
                            if matches!(chars.peek(), Some((_, '\''))) {
                                chars.next();
                                out.push('\'');
                            } else {
                                break;
                            }
                        }
                        Some((_, inner)) => out.push(inner),
                        None => break,
                    }
                }
            }
            '{' => {
                let rest = &pattern[start + 1..];
                match rest.find('}') {
                    Some(end) => {
                        let placeholder = &rest[..end];
                        let index = placeholder.split(',').next().unwrap_or_default().trim();
                        match index.parse::<usize>().ok().and_then(|i| args.get(i)) {
                            Some(arg) => out.push_str(arg),
                            None => {
                                out.push('{');
                                out.push_str(placeholder);
                                out.push('}');
                            }
                        }
                        // Skip the placeholder body and the closing brace
                        while let Some((idx, _)) = chars.peek() {
                            if *idx > start + 1 + end {
                                break;
                            }
                            chars.next();
                        }
                    }
                    None => {
                        out.push_str(&pattern[start..]);
                        break;
                    }
                }
            }
            other => out.push(other),
        }
    }

    out
}
