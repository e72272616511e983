use thiserror::Error;

/// Invalid construction-time configuration.
///
/// These are programming/configuration defects surfaced at startup; nothing
/// here is produced while rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("bolt point list must hold x,y pairs, got {0} values")]
    OddBoltPoints(usize),
    #[error("bolt outline needs at least 3 points, got {0}")]
    TooFewBoltPoints(usize),
    #[error("bolt points must have a positive extent on both axes")]
    DegenerateBolt,
    #[error("bolt coordinates must be non-negative, found {0}")]
    NegativeBoltCoordinate(i32),
    #[error("critical level {critical} exceeds low level {low}")]
    CriticalAboveLow { critical: u8, low: u8 },
    #[error("level {0} is outside 0..=100")]
    LevelOutOfRange(u8),
    #[error("{name} must be within [0, 1), got {value}")]
    FractionOutOfRange { name: &'static str, value: f32 },
}

/// Malformed demo-mode command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoCommandError {
    #[error("unknown demo command `{0}`")]
    UnknownCommand(String),
    #[error("demo level `{0}` is not an integer")]
    InvalidLevel(String),
    #[error("demo plugged flag `{0}` is not a boolean")]
    InvalidPlugged(String),
}
