use serde::{Deserialize, Serialize};

/// 三種可辨識的移動方向，依第一個字元分派
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Up,
    Down,
}

impl Direction {
    /// Dispatches on the first character of the direction token.
    /// Returns `None` for anything that does not start with `f`, `u` or `d`
    /// (lowercase, case-sensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.chars().next() {
            Some('f') => Some(Self::Forward),
            Some('u') => Some(Self::Up),
            Some('d') => Some(Self::Down),
            _ => None,
        }
    }
}

/// A parsed movement command. `Unknown` carries lines whose direction token
/// was not recognized; applying it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Forward(i64),
    Up(i64),
    Down(i64),
    Unknown,
}

impl Command {
    pub fn new(direction: Direction, magnitude: i64) -> Self {
        match direction {
            Direction::Forward => Self::Forward(magnitude),
            Direction::Up => Self::Up(magnitude),
            Direction::Down => Self::Down(magnitude),
        }
    }
}

/// The accumulator: horizontal position and depth, both starting at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
}

impl Position {
    /// Rule table: forward adds to horizontal, up subtracts from depth,
    /// down adds to depth, unknown does nothing.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Forward(n) => self.horizontal += n,
            Command::Up(n) => self.depth -= n,
            Command::Down(n) => self.depth += n,
            Command::Unknown => {}
        }
    }

    pub fn product(&self) -> i64 {
        self.horizontal * self.depth
    }
}

/// What to do when a magnitude field is missing or not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Treat an unparseable magnitude as 0 and keep going (legacy behavior).
    Zero,
    /// Drop the whole line.
    Skip,
    /// Stop processing with a parse error.
    Abort,
}

/// stdout rendering of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line: the decimal product.
    Plain,
    /// The full `CourseReport` as a JSON object.
    Json,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub commands: Vec<Command>,
    pub lines_read: usize,
}

/// Final result of a course run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseReport {
    pub horizontal: i64,
    pub depth: i64,
    pub product: i64,
    pub lines_read: usize,
    pub commands_applied: usize,
    pub lines_skipped: usize,
}
