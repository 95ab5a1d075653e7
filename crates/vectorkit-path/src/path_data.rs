//! Command sequence paired with its cached textual form.

use serde::{Deserialize, Serialize};

use crate::command::{CommandKind, PathCommand};
use crate::editor;
use crate::error::PathResult;
use crate::grammar::{parse_path_data, serialize_commands};
use crate::resolver::{resolve_points, PathPoint};

/// Editable path data.
///
/// The text is always the serialization of the current commands: every
/// mutator re-serializes before returning, including on the error path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
    text: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `d` and stores its normalized serialization.
    pub fn parse(d: &str) -> Self {
        Self::from_commands(parse_path_data(d))
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        let text = serialize_commands(&commands);
        Self { commands, text }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolves the addressable points of the current commands.
    pub fn points(&self) -> Vec<PathPoint> {
        resolve_points(&self.commands)
    }

    pub fn set_commands(&mut self, commands: Vec<PathCommand>) {
        self.commands = commands;
        self.sync_text();
    }

    pub fn move_point(&mut self, point: &PathPoint, x: f64, y: f64) -> PathResult<()> {
        let result = editor::move_point(&mut self.commands, point, x, y);
        self.sync_text();
        result
    }

    pub fn insert_after(&mut self, point: &PathPoint, kind: CommandKind) -> PathResult<usize> {
        let result = editor::insert_after(&mut self.commands, point, kind);
        self.sync_text();
        result
    }

    pub fn convert(&mut self, point: &PathPoint, kind: CommandKind) -> PathResult<()> {
        let result = editor::convert(&mut self.commands, point, kind);
        self.sync_text();
        result
    }

    pub fn toggle_relative(&mut self, point: &PathPoint) -> PathResult<()> {
        let result = editor::toggle_relative(&mut self.commands, point);
        self.sync_text();
        result
    }

    pub fn delete_command(&mut self, point: &PathPoint) -> PathResult<PathCommand> {
        let result = editor::delete_command(&mut self.commands, point);
        self.sync_text();
        result
    }

    fn sync_text(&mut self) {
        self.text = serialize_commands(&self.commands);
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
