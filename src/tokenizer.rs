//! Line tokenizing: pulls a directory name and its indentation depth out of a
//! single template line.

/// Characters that can never appear inside a directory name.
const RESERVED: [char; 7] = ['|', '/', '\\', '?', ':', '<', '>'];

/// The directory encoded by one template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The directory name, exactly as written (trailing whitespace included).
    pub name: &'a str,
    /// Length of the line prefix in characters, not counting the connector.
    pub depth: usize,
}

fn is_name_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parses one template line.
///
/// Returns `None` for lines that hold no directory (blank lines, lines made
/// only of tree decoration). A trailing line terminator is ignored.
///
/// ```
/// use dirge::parse_line;
///
/// let token = parse_line(" | | +-directory").unwrap();
/// assert_eq!((token.name, token.depth), ("directory", 6));
/// assert!(parse_line("  |  ").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Token<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let start = line.find(is_name_start)?;
    let rest = &line[start..];
    let end = rest.find(RESERVED).unwrap_or(rest.len());

    // A hyphen run right before the name is a branch connector (`+-`, `` `- ``).
    let prefix = line[..start].trim_end_matches('-');

    Some(Token {
        name: &rest[..end],
        depth: prefix.chars().count(),
    })
}
