pub mod attribute;
pub mod constants;
pub mod damage;
pub mod penetration;

pub use attribute::{resolve_cut_rate, AttackAttribute};
pub use damage::{compute_damage, ComputationInputs, DamageResult};
pub use penetration::{penetration_for_ratio, penetration_percent};
