//! Reference tables loaded once at startup

pub mod csv;
pub mod enemy;
pub mod motion;

pub use enemy::{EnemyRecord, EnemyTable};
pub use motion::MotionTable;
