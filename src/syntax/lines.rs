use crate::base::constants::{
    ASSIGNMENT, COMMENT, KW_DESCRIPTION, KW_FROM, KW_MACRO, MODULE_HEADER, MODULE_IDENTITY,
    OBJECT_IDENTIFIER, OBJECT_IDENTITY, OBJECT_TYPE,
};

/// Leading words that can precede a macro keyword without naming a node.
const RESERVED_LEADERS: &[&str] = &["IMPORTS", "EXPORTS", "SYNTAX"];

/// A one-line `name OBJECT IDENTIFIER ::= { parent id }` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub parent: &'a str,
    pub local_id: &'a str,
}

/// Drop an ASN.1 `--` comment tail.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// ASN.1-style identifier: a letter followed by letters, digits, `-` or `_`.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

/// Every module named by a `FROM <module>` clause on the line.
///
/// The module is the first whitespace-delimited token after `FROM`, cut at
/// the `;` terminator when one is present.
pub fn import_sources(line: &str) -> Vec<&str> {
    let tokens: Vec<&str> = strip_comment(line).split_whitespace().collect();
    tokens
        .windows(2)
        .filter(|pair| pair[0] == KW_FROM)
        .filter_map(|pair| pair[1].split(';').next())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Module name from a `<module> DEFINITIONS ::= BEGIN` header.
pub fn module_header(line: &str) -> Option<&str> {
    let code = strip_comment(line);
    let idx = code.find(MODULE_HEADER)?;
    let name = code[..idx].trim();
    (!name.is_empty()).then_some(name)
}

/// The first two tokens inside `{ ... }`, as `(parent, local_id)`.
///
/// `text` starts just after the opening brace. A missing closing brace is
/// tolerated; fewer than two tokens is not.
pub fn brace_pair(text: &str) -> Option<(&str, &str)> {
    let content = match text.find('}') {
        Some(idx) => &text[..idx],
        None => text,
    };
    let mut tokens = content.split_whitespace();
    let parent = tokens.next()?;
    let local_id = tokens.next()?;
    Some((parent, local_id))
}

/// Recognize `<name> OBJECT IDENTIFIER ::= { <parent> <id> }` on one line.
pub fn subtree_declaration(line: &str) -> Option<Declaration<'_>> {
    let code = strip_comment(line);
    let idx = code.find(OBJECT_IDENTIFIER)?;
    let name = code[..idx].split_whitespace().last()?;
    if !is_identifier(name) {
        return None;
    }

    let (parent, local_id) = assignment(&code[idx + OBJECT_IDENTIFIER.len()..])?;

    Some(Declaration {
        name,
        parent,
        local_id,
    })
}

/// Name of an `OBJECT-TYPE` / `OBJECT-IDENTITY` declaration starting on this line.
///
/// Filters on the raw line: `MODULE-IDENTITY` and `MACRO` lines are rejected,
/// and the macro keyword must directly follow an identifier that is neither a
/// macro keyword itself nor an `IMPORTS`-style leader. This keeps import
/// lists, macro definitions, comments and quoted description text out.
pub fn typed_declaration_name(line: &str) -> Option<&str> {
    let code = strip_comment(line);
    if !(code.contains(OBJECT_TYPE) || code.contains(OBJECT_IDENTITY)) {
        return None;
    }
    if code.contains(MODULE_IDENTITY) {
        return None;
    }

    let tokens: Vec<&str> = code.split_whitespace().collect();
    if tokens.contains(&KW_MACRO) {
        return None;
    }

    let (&name, &keyword) = (tokens.first()?, tokens.get(1)?);
    let is_macro = |token: &str| token == OBJECT_TYPE || token == OBJECT_IDENTITY;
    if !is_macro(keyword) || is_macro(name) || !is_identifier(name) {
        return None;
    }
    if RESERVED_LEADERS.contains(&name) {
        return None;
    }
    Some(name)
}

/// Text following the `DESCRIPTION` keyword, if the trimmed line starts with it.
pub fn description_start(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix(KW_DESCRIPTION)
        .map(str::trim)
}

/// Split a line at the first `::=` that opens a brace, as `(before, from_assignment)`.
///
/// Whitespace between `::=` and `{` is optional.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    line.match_indices(ASSIGNMENT)
        .map(|(idx, _)| idx)
        .find(|&idx| line[idx + ASSIGNMENT.len()..].trim_start().starts_with('{'))
        .map(|idx| line.split_at(idx))
}

/// Whether the trimmed line begins with `::= {`.
pub fn starts_assignment(line: &str) -> bool {
    split_assignment(line.trim()).is_some_and(|(before, _)| before.is_empty())
}

/// `(parent, local_id)` from a line beginning with `::= {`.
pub fn assignment(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(ASSIGNMENT)?.trim_start();
    brace_pair(rest.strip_prefix('{')?)
}
