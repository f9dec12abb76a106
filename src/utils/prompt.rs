//! Console prompt helpers.
//!
//! All interaction is plain stdin/stdout: this tool is single-shot and
//! blocking, and the selection menus are short numbered lists.

use std::io::{self, Write};

use crate::error::Result;

/// Outcome of a numbered-menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A valid 1-based choice, returned as a zero-based index.
    Index(usize),
    /// The user typed 0 or gave unusable input; callers fall through to
    /// their no-cache path. This is normal control flow, not an error.
    Declined,
}

/// Read one line from stdin after printing `message` (with an optional
/// default shown in brackets). Returns the default when the user just
/// presses enter.
pub fn prompt_line(message: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(d) => print!("{} [{}]: ", message, d),
        None => print!("{}: ", message),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF - the user closed stdin
        return Err(crate::error::RolecacheError::Cancelled);
    }

    let input = input.trim();
    if input.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Decide what a menu answer means for a list of `len` items: a 1-based
/// choice becomes a zero-based [`Selection::Index`]; `0`, out-of-range
/// numbers, and non-numeric input all decline.
pub fn parse_choice(input: &str, len: usize) -> Selection {
    match input.trim().parse::<usize>() {
        Ok(choice) if (1..=len).contains(&choice) => Selection::Index(choice - 1),
        _ => Selection::Declined,
    }
}

/// Present `items` as a 1-based numbered menu and read a selection.
pub fn prompt_selection(title: &str, items: &[String]) -> Result<Selection> {
    println!("{}", title);
    for (index, item) in items.iter().enumerate() {
        println!("{}. {}", index + 1, item);
    }

    let input = prompt_line("Select a number (0 to skip)", None)?;

    let selection = parse_choice(&input, items.len());
    if selection == Selection::Declined {
        println!("Fresh temporary credentials will be requested.");
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_maps_one_based_to_index() {
        let candidates = [
            "roleA_202401010900.txt".to_string(),
            "roleB_202401011000.txt".to_string(),
        ];

        // "2" picks the second candidate, roleB
        let choice = parse_choice("2", candidates.len());
        assert_eq!(choice, Selection::Index(1));
        assert_eq!(candidates[1], "roleB_202401011000.txt");

        assert_eq!(parse_choice("1", candidates.len()), Selection::Index(0));
        assert_eq!(parse_choice(" 2 ", candidates.len()), Selection::Index(1));
    }

    #[test]
    fn test_parse_choice_declines_zero_out_of_range_and_garbage() {
        assert_eq!(parse_choice("0", 3), Selection::Declined);
        assert_eq!(parse_choice("99", 3), Selection::Declined);
        assert_eq!(parse_choice("4", 3), Selection::Declined);
        assert_eq!(parse_choice("abc", 3), Selection::Declined);
        assert_eq!(parse_choice("", 3), Selection::Declined);
        assert_eq!(parse_choice("-1", 3), Selection::Declined);
    }
}
