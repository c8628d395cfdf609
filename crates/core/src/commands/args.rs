//! Command line tokenizer

/// Split a raw command line into arguments
///
/// Arguments are separated by whitespace. A double-quoted run is kept as a
/// single argument with the quotes removed; an unterminated quote runs to
/// the end of the line. Index 0 is the command name.
pub fn command_args(raw: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in raw.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}
