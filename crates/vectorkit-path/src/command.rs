//! Path command model.

use serde::{Deserialize, Serialize};

/// The instruction a path command performs, independent of its
/// absolute/relative encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// `M` - start a new subpath
    MoveTo,
    /// `L` - straight line
    LineTo,
    /// `H` - horizontal line (x only)
    Horizontal,
    /// `V` - vertical line (y only)
    Vertical,
    /// `C` - cubic bezier
    CubicTo,
    /// `S` - smooth cubic bezier
    SmoothCubicTo,
    /// `Q` - quadratic bezier
    QuadTo,
    /// `T` - smooth quadratic bezier
    SmoothQuadTo,
    /// `A` - elliptical arc
    Arc,
    /// `Z` - close the current subpath
    Close,
}

impl CommandKind {
    pub const ALL: [CommandKind; 10] = [
        CommandKind::MoveTo,
        CommandKind::LineTo,
        CommandKind::Horizontal,
        CommandKind::Vertical,
        CommandKind::CubicTo,
        CommandKind::SmoothCubicTo,
        CommandKind::QuadTo,
        CommandKind::SmoothQuadTo,
        CommandKind::Arc,
        CommandKind::Close,
    ];

    /// Maps a command letter (either case) to its kind.
    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::Horizontal,
            'V' => Self::Vertical,
            'C' => Self::CubicTo,
            'S' => Self::SmoothCubicTo,
            'Q' => Self::QuadTo,
            'T' => Self::SmoothQuadTo,
            'A' => Self::Arc,
            'Z' => Self::Close,
            _ => return None,
        };
        Some(kind)
    }

    /// Uppercase (absolute) letter for this kind.
    pub fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
            Self::CubicTo => 'C',
            Self::SmoothCubicTo => 'S',
            Self::QuadTo => 'Q',
            Self::SmoothQuadTo => 'T',
            Self::Arc => 'A',
            Self::Close => 'Z',
        }
    }

    /// Number of parameters consumed per addressable group.
    ///
    /// Curve commands are addressed pair by pair rather than per segment, so
    /// `C`, `S` and `Q` report 2 like `M`/`L`/`T`.
    pub fn group_arity(self) -> usize {
        match self {
            Self::MoveTo
            | Self::LineTo
            | Self::SmoothQuadTo
            | Self::CubicTo
            | Self::SmoothCubicTo
            | Self::QuadTo => 2,
            Self::Horizontal | Self::Vertical => 1,
            Self::Arc => 7,
            Self::Close => 0,
        }
    }

    /// Number of coordinate pairs that make up one curve segment, or `None`
    /// for non-curve commands.
    pub fn pairs_per_segment(self) -> Option<usize> {
        match self {
            Self::CubicTo => Some(3),
            Self::SmoothCubicTo | Self::QuadTo => Some(2),
            _ => None,
        }
    }

    /// Initial parameters for a fresh command of this kind placed at `(x, y)`.
    pub fn seed_params(self, x: f64, y: f64) -> Vec<f64> {
        match self {
            Self::Horizontal => vec![x],
            Self::Vertical => vec![y],
            Self::Close => Vec::new(),
            // zero radii: a straight segment to (x, y)
            Self::Arc => vec![0.0, 0.0, 0.0, 0.0, 0.0, x, y],
            Self::MoveTo
            | Self::LineTo
            | Self::CubicTo
            | Self::SmoothCubicTo
            | Self::QuadTo
            | Self::SmoothQuadTo => vec![x, y],
        }
    }
}

/// One letter-coded instruction and its numeric parameters.
///
/// A single command may carry several repeated parameter groups, mirroring the
/// path grammar's implicit repetition of the preceding letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathCommand {
    pub kind: CommandKind,
    /// Lowercase letter: coordinates are offsets from the current point.
    pub relative: bool,
    pub params: Vec<f64>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, relative: bool, params: Vec<f64>) -> Self {
        Self {
            kind,
            relative,
            params,
        }
    }

    /// Absolute command seeded at `(x, y)` with the kind's initial parameters.
    pub fn seeded(kind: CommandKind, x: f64, y: f64) -> Self {
        Self::new(kind, false, kind.seed_params(x, y))
    }

    /// Builds a command from its letter; `None` for letters outside the grammar.
    pub fn from_code(code: char, params: Vec<f64>) -> Option<Self> {
        let kind = CommandKind::from_letter(code)?;
        Some(Self::new(kind, code.is_ascii_lowercase(), params))
    }

    /// The command letter, lowercase when relative.
    pub fn code(&self) -> char {
        let letter = self.kind.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_letter(kind.letter()), Some(kind));
            assert_eq!(
                CommandKind::from_letter(kind.letter().to_ascii_lowercase()),
                Some(kind)
            );
        }
        assert_eq!(CommandKind::from_letter('X'), None);
        assert_eq!(CommandKind::from_letter('e'), None);
    }

    #[test]
    fn test_code_reflects_relative_flag() {
        let cmd = PathCommand::from_code('l', vec![1.0, 2.0]).unwrap();
        assert!(cmd.is_relative());
        assert_eq!(cmd.code(), 'l');

        let cmd = PathCommand::from_code('C', vec![]).unwrap();
        assert!(!cmd.is_relative());
        assert_eq!(cmd.code(), 'C');
    }

    #[test]
    fn test_seed_params_per_kind() {
        assert_eq!(CommandKind::Horizontal.seed_params(3.0, 4.0), vec![3.0]);
        assert_eq!(CommandKind::Vertical.seed_params(3.0, 4.0), vec![4.0]);
        assert!(CommandKind::Close.seed_params(3.0, 4.0).is_empty());
        assert_eq!(CommandKind::LineTo.seed_params(3.0, 4.0), vec![3.0, 4.0]);
        assert_eq!(CommandKind::CubicTo.seed_params(3.0, 4.0), vec![3.0, 4.0]);
        assert_eq!(
            CommandKind::Arc.seed_params(3.0, 4.0),
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 4.0]
        );
    }
}
