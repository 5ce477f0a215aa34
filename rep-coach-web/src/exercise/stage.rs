//! Named stages of the rep state machines

/// Rep stage shared by all profiles
///
/// Squat and push-up cycle UP → DESCENDING → DOWN → ASCENDING.
/// Pull-up cycles HANG → PULLING → TOP → LOWERING.
/// Push-up and pull-up start in CALIBRATING.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Calibrating,
    Up,
    Descending,
    Down,
    Ascending,
    Hang,
    Pulling,
    Top,
    Lowering,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Calibrating => "CALIBRATING",
            Stage::Up => "UP",
            Stage::Descending => "DESCENDING",
            Stage::Down => "DOWN",
            Stage::Ascending => "ASCENDING",
            Stage::Hang => "HANG",
            Stage::Pulling => "PULLING",
            Stage::Top => "TOP",
            Stage::Lowering => "LOWERING",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
