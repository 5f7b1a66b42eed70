/// Removes `//` line comments and `/* */` block comments that sit outside
/// string literals.
///
/// Line breaks inside removed comments are kept so that parse errors still
/// point at the right line.
///
/// ```
/// use cjdadmin::config::strip_comments;
///
/// let text = "{\n  // node key\n  \"url\": \"http://x\" /* inline */\n}";
/// assert_eq!(strip_comments(text), "{\n  \n  \"url\": \"http://x\"  \n}");
/// ```
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => out.extend(chars.next()),
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                if chars.by_ref().any(|n| n == '\n') {
                    out.push('\n');
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for n in chars.by_ref() {
                    if prev == '*' && n == '/' {
                        break;
                    }
                    if n == '\n' {
                        out.push('\n');
                    }
                    prev = n;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}
