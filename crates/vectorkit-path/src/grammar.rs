//! Path-data parser and serializer.
//!
//! The parser is permissive: it scans for command letters, splits whatever
//! follows each letter on whitespace and commas, and turns tokens that are not
//! numbers into NaN instead of failing. A `NaN` token inside a run is read as
//! a number, not as an arc letter, so serialized NaN values parse back to the
//! same commands. Serialization does not try to
//! reproduce the original formatting; a round trip preserves the resolved
//! points, not the bytes.

use regex::Regex;

use crate::command::PathCommand;

fn command_regex() -> &'static Regex {
    static COMMAND_REGEX: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r"([MmLlHhVvCcSsQqTtAaZz])((?:NaN|[^MmLlHhVvCcSsQqTtAaZz])*)")
            .expect("invalid regex pattern")
    })
}

/// Parses path data into a command sequence.
///
/// Text before the first command letter is ignored.
pub fn parse_path_data(data: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();

    for caps in command_regex().captures_iter(data) {
        let Some(code) = caps.get(1).and_then(|m| m.as_str().chars().next()) else {
            continue;
        };
        let run = caps.get(2).map_or("", |m| m.as_str());
        let params = parse_numbers(run);

        if let Some(cmd) = PathCommand::from_code(code, params) {
            commands.push(cmd);
        }
    }

    commands
}

/// Splits a numeric run on whitespace and commas.
fn parse_numbers(run: &str) -> Vec<f64> {
    run.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().unwrap_or_else(|_| {
                tracing::warn!("Malformed path number '{}', using NaN", token);
                f64::NAN
            })
        })
        .collect()
}

/// Serializes a command sequence: letter and parameters space-joined,
/// commands space-joined.
pub fn serialize_commands(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(serialize_command)
        .collect::<Vec<_>>()
        .join(" ")
}

fn serialize_command(cmd: &PathCommand) -> String {
    let mut out = String::new();
    out.push(cmd.code());
    for value in &cmd.params {
        out.push(' ');
        out.push_str(&format_number(*value));
    }
    out
}

/// Shortest representation that parses back to the same value (`10`, not `10.0`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandKind;

    #[test]
    fn test_parse_simple_path() {
        let cmds = parse_path_data("M 10 10 L 20 20");
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].kind, CommandKind::MoveTo);
        assert_eq!(cmds[0].params, vec![10.0, 10.0]);
        assert_eq!(cmds[1].kind, CommandKind::LineTo);
        assert_eq!(cmds[1].params, vec![20.0, 20.0]);
    }

    #[test]
    fn test_parse_commas_and_compact_letters() {
        let cmds = parse_path_data("M10,10l5,5,5,5z");
        assert_eq!(cmds.len(), 3);
        assert!(cmds[1].is_relative());
        assert_eq!(cmds[1].params, vec![5.0, 5.0, 5.0, 5.0]);
        assert_eq!(cmds[2].kind, CommandKind::Close);
        assert!(cmds[2].params.is_empty());
    }

    #[test]
    fn test_parse_exponent_stays_numeric() {
        let cmds = parse_path_data("M 1e2 2.5E1");
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].params, vec![100.0, 25.0]);
    }

    #[test]
    fn test_malformed_token_becomes_nan() {
        let cmds = parse_path_data("M 10 1-2");
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].params[0], 10.0);
        assert!(cmds[0].params[1].is_nan());
    }

    #[test]
    fn test_nan_survives_round_trip() {
        let cmds = parse_path_data("M 10 x L 20 20");
        let text = serialize_commands(&cmds);
        assert_eq!(text, "M 10 NaN L 20 20");

        let reparsed = parse_path_data(&text);
        assert_eq!(reparsed.len(), 2);
        assert_eq!(reparsed[0].kind, CommandKind::MoveTo);
        assert!(reparsed[0].params[1].is_nan());
        assert_eq!(reparsed[1].params, vec![20.0, 20.0]);
    }

    #[test]
    fn test_infinity_round_trip() {
        let cmds = parse_path_data("M 1e999 -1e999");
        let text = serialize_commands(&cmds);
        assert_eq!(text, "M inf -inf");
        assert_eq!(parse_path_data(&text), cmds);
    }

    #[test]
    fn test_leading_garbage_ignored() {
        let cmds = parse_path_data("   ### M 1 2");
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].params, vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_path_data("").is_empty());
        assert_eq!(serialize_commands(&[]), "");
    }

    #[test]
    fn test_serialize_format() {
        let cmds = parse_path_data("M10.0,10   l 5.5 -2 Z");
        assert_eq!(serialize_commands(&cmds), "M 10 10 l 5.5 -2 Z");
    }
}
