//! Line parser for the command grammar.
//!
//! A line has the form `ACTION_WORDS -> DEVICE_WORDS [-> ARGUMENT_WORDS]`.
//! Word groups are whitespace-separated words joined with `_`, so
//! `switch on -> television` parses to the action `switch_on` on the device
//! `television`. The parser only checks the grammar; whether the device or
//! action exists is the interpreter's concern.

use homecmd_domain::command::Command;

/// Literal separator between word groups.
pub const SEPARATOR: &str = "->";

/// Errors for input that does not match the command grammar.
///
/// Fatal for the offending line only; the caller may continue with the next.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No `->` between the action and the device.
    #[error("missing \"{SEPARATOR}\" separator between action and device")]
    MissingSeparator,

    /// More than three word groups.
    #[error("too many \"{SEPARATOR}\" separators, expected at most three word groups")]
    TooManyGroups,

    /// A word group contains no words.
    #[error("empty {0} word group")]
    EmptyGroup(&'static str),

    /// The argument group is present but not numeric.
    #[error("argument \"{value}\" is not a number")]
    InvalidArgument {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Parse one input line into a [`Command`].
///
/// # Errors
///
/// Returns a [`ParseError`] when the line does not match the grammar: missing
/// separator, empty word group, trailing separators, or a non-numeric
/// argument.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let mut groups = input.split(SEPARATOR);
    // `split` always yields at least one item.
    let action_group = groups.next().unwrap_or_default();
    let Some(device_group) = groups.next() else {
        return Err(ParseError::MissingSeparator);
    };
    let argument_group = groups.next();
    if groups.next().is_some() {
        return Err(ParseError::TooManyGroups);
    }

    let action = join_words(action_group);
    if action.is_empty() {
        return Err(ParseError::EmptyGroup("action"));
    }
    let device = join_words(device_group);
    if device.is_empty() {
        return Err(ParseError::EmptyGroup("device"));
    }
    let argument = match argument_group.map(join_words) {
        None => None,
        Some(raw) if raw.is_empty() => return Err(ParseError::EmptyGroup("argument")),
        Some(raw) => Some(
            raw.parse()
                .map_err(|source| ParseError::InvalidArgument { value: raw, source })?,
        ),
    };

    Ok(Command::new(action, device, argument))
}

fn join_words(group: &str) -> String {
    group.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_two_group_command() {
        let command = parse("open -> garage").unwrap();
        assert_eq!(command, Command::new("open", "garage", None));
    }

    #[test]
    fn should_parse_three_group_command() {
        let command = parse("heat -> boiler -> 5").unwrap();
        assert_eq!(command, Command::new("heat", "boiler", Some(5)));
    }

    #[test]
    fn should_join_multi_word_groups_with_underscores() {
        let command = parse("switch on -> television").unwrap();
        assert_eq!(command.action, "switch_on");
        assert_eq!(command.device, "television");
    }

    #[test]
    fn should_parse_negative_argument() {
        let command = parse("heat -> boiler -> -2").unwrap();
        assert_eq!(command.argument, Some(-2));
    }

    #[test]
    fn should_tolerate_extra_whitespace() {
        let command = parse("  switch   off ->   television  ").unwrap();
        assert_eq!(command.action, "switch_off");
        assert_eq!(command.device, "television");
    }

    #[test]
    fn should_reject_line_without_separator() {
        assert_eq!(parse("open garage").unwrap_err(), ParseError::MissingSeparator);
    }

    #[test]
    fn should_reject_more_than_three_groups() {
        assert_eq!(
            parse("heat -> boiler -> 5 -> 6").unwrap_err(),
            ParseError::TooManyGroups
        );
    }

    #[test]
    fn should_reject_empty_action_group() {
        assert_eq!(
            parse(" -> garage").unwrap_err(),
            ParseError::EmptyGroup("action")
        );
    }

    #[test]
    fn should_reject_empty_device_group() {
        assert_eq!(
            parse("open -> ").unwrap_err(),
            ParseError::EmptyGroup("device")
        );
    }

    #[test]
    fn should_reject_empty_argument_group() {
        assert_eq!(
            parse("heat -> boiler -> ").unwrap_err(),
            ParseError::EmptyGroup("argument")
        );
    }

    #[test]
    fn should_reject_non_numeric_argument() {
        let err = parse("heat -> boiler -> lots").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidArgument { ref value, .. } if value == "lots"
        ));
    }

    #[test]
    fn should_not_check_device_or_action_existence() {
        // Semantic validation belongs to the interpreter.
        let command = parse("read -> book").unwrap();
        assert_eq!(command, Command::new("read", "book", None));
    }
}
