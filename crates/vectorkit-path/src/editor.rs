//! Point-level and structural edits on a command sequence.
//!
//! Every function takes a [`PathPoint`] resolved from the *current* sequence.
//! Structural edits (insert, convert, delete) shift command indices, so any
//! point held across one of them is stale and must be re-resolved.

use crate::command::{CommandKind, PathCommand};
use crate::error::{PathError, PathResult};
use crate::resolver::PathPoint;

fn owning_command<'a>(
    commands: &'a mut [PathCommand],
    point: &PathPoint,
) -> PathResult<&'a mut PathCommand> {
    let len = commands.len();
    commands
        .get_mut(point.command_index)
        .ok_or(PathError::CommandOutOfRange {
            index: point.command_index,
            len,
        })
}

fn check_command(commands: &[PathCommand], point: &PathPoint) -> PathResult<()> {
    if point.command_index < commands.len() {
        Ok(())
    } else {
        Err(PathError::CommandOutOfRange {
            index: point.command_index,
            len: commands.len(),
        })
    }
}

/// Moves one point to the absolute position `(x, y)`.
///
/// A relative owning command is switched to absolute, but only the targeted
/// group is rewritten; other groups of the same command keep their stored
/// values and are reinterpreted as absolute.
pub fn move_point(
    commands: &mut [PathCommand],
    point: &PathPoint,
    x: f64,
    y: f64,
) -> PathResult<()> {
    let cmd = owning_command(commands, point)?;
    let offset = point.param_offset;
    let (first, needed) = match cmd.kind {
        CommandKind::Close => return Err(PathError::NoAddressablePoint(cmd.code())),
        CommandKind::Horizontal | CommandKind::Vertical => (offset, 1),
        CommandKind::Arc => (offset + 5, 2),
        CommandKind::MoveTo
        | CommandKind::LineTo
        | CommandKind::SmoothQuadTo
        | CommandKind::CubicTo
        | CommandKind::SmoothCubicTo
        | CommandKind::QuadTo => (offset, 2),
    };
    if first + needed > cmd.params.len() {
        return Err(PathError::ParamOutOfRange {
            code: cmd.code(),
            offset,
            len: cmd.params.len(),
        });
    }

    cmd.relative = false;
    match cmd.kind {
        CommandKind::Horizontal => cmd.params[first] = x,
        CommandKind::Vertical => cmd.params[first] = y,
        _ => {
            cmd.params[first] = x;
            cmd.params[first + 1] = y;
        }
    }
    Ok(())
}

/// Inserts a new absolute command of `kind`, seeded at the point's
/// coordinates, directly after the point's owning command.
///
/// Returns the index of the inserted command.
pub fn insert_after(
    commands: &mut Vec<PathCommand>,
    point: &PathPoint,
    kind: CommandKind,
) -> PathResult<usize> {
    check_command(commands, point)?;
    let index = point.command_index + 1;
    commands.insert(index, PathCommand::seeded(kind, point.x, point.y));
    Ok(index)
}

/// Replaces the owning command with a fresh absolute command of `kind`
/// seeded at the point's coordinates.
///
/// Any other parameter groups the command carried are discarded.
pub fn convert(commands: &mut [PathCommand], point: &PathPoint, kind: CommandKind) -> PathResult<()> {
    let cmd = owning_command(commands, point)?;
    *cmd = PathCommand::seeded(kind, point.x, point.y);
    Ok(())
}

/// Flips the owning command between relative and absolute without touching
/// its values.
pub fn toggle_relative(commands: &mut [PathCommand], point: &PathPoint) -> PathResult<()> {
    let cmd = owning_command(commands, point)?;
    cmd.relative = !cmd.relative;
    Ok(())
}

/// Removes the point's owning command, with all of its groups.
pub fn delete_command(commands: &mut Vec<PathCommand>, point: &PathPoint) -> PathResult<PathCommand> {
    check_command(commands, point)?;
    Ok(commands.remove(point.command_index))
}
