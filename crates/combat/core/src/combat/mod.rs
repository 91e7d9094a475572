//! Combat resolution system.
//!
//! Pure functions for resolving one attack between two snapshots. The only side
//! effect is consuming draws from the injected [`UniformSource`](crate::env::UniformSource).
//!
//! # Core Functions
//!
//! - `perform_attack`: complete attack resolution (accuracy roll + damage roll)
//! - `hit_chance`: attack roll vs defense roll curve
//! - `max_hit` / `roll_damage`: damage ceiling and uniform damage draw
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_damage, max_hit, roll_damage};
pub use hit::{attack_roll, defense_roll, hit_chance, roll_accuracy};
pub use result::{AttackResult, perform_attack};
