//! Attack-timer state machine for one encounter.
//!
//! A [`CombatSession`] lends itself two snapshots, tracks when each side may
//! swing next, and resolves attacks as the host advances the clock. Outcomes are
//! reported both as a drainable [`CombatEvent`] stream and through registered
//! [`CombatObserver`]s.

mod events;
mod session;

pub use events::{CombatEvent, CombatObserver};
pub use session::CombatSession;

/// One of the two seats in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The initiator; always active and always gets the first strike.
    Attacker,
    /// The target; swings back only if it has an attack speed.
    Defender,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Attacker => Self::Defender,
            Self::Defender => Self::Attacker,
        }
    }
}

/// Lifecycle of a session. `Ended` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Active,
    Ended,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionEnd {
    /// One side's hitpoints reached zero.
    Victory { winner: Side },
    /// Aborted by the host; no winner.
    Stopped,
}

impl SessionEnd {
    pub const fn winner(&self) -> Option<Side> {
        match self {
            Self::Victory { winner } => Some(*winner),
            Self::Stopped => None,
        }
    }
}
