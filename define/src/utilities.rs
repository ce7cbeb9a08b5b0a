use std::io::{self, Write};

/// Prints `prompt` and reads one line; `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Splits a prompt line into a lowercased command and the rest of the line.
pub fn split_command(line: &str) -> Option<(String, String)> {
    let mut parts = line.split_ascii_whitespace();
    let command = parts.next()?.to_ascii_lowercase();
    Some((command, parts.collect::<Vec<&str>>().join(" ")))
}
