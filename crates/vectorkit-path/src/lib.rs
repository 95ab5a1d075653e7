//! # vectorkit path
//!
//! The vector path command model used by the vectorkit designer.
//!
//! ## Core Components
//!
//! - **Grammar**: parses the compact path mini-language (`M L H V C S Q T A Z`,
//!   uppercase absolute, lowercase relative) into [`PathCommand`]s and
//!   serializes them back
//! - **Resolver**: walks commands with a running current point and produces
//!   addressable [`PathPoint`]s with back-references into the commands
//! - **Editor**: moves single points and inserts, converts, toggles or deletes
//!   whole commands
//! - **PathData**: a command list plus its cached text, kept in sync by every
//!   mutator
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit_path::{CommandKind, PathData};
//!
//! let mut data = PathData::parse("M 10 10 L 20 20");
//! let points = data.points();
//! data.insert_after(&points[0], CommandKind::LineTo).unwrap();
//! assert_eq!(data.text(), "M 10 10 L 10 10 L 20 20");
//! ```

pub mod command;
pub mod editor;
pub mod error;
pub mod grammar;
pub mod path_data;
pub mod resolver;

pub use command::{CommandKind, PathCommand};
pub use error::{PathError, PathResult};
pub use grammar::{format_number, parse_path_data, serialize_commands};
pub use path_data::PathData;
pub use resolver::{nearest_point, resolve_points, PathPoint, PointRole};
