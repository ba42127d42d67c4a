use std::io::{self, Write};

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

pub fn str_to_bool(mut str: String) -> Option<bool> {
    str.make_ascii_lowercase();
    match str.trim() {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" | "" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// The known command closest to `typed`, if any is close enough to suggest.
pub fn closest_command<'a>(typed: &str, commands: &[&'a str]) -> Option<&'a str> {
    commands
        .iter()
        .map(|command| (*command, strsim::jaro(command, typed)))
        .filter(|(_, similarity)| *similarity > 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(command, _)| command)
}
