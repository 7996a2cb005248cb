pub mod balance;
pub mod periods;

pub use balance::Balance;
pub use periods::{compute, compute_for_day};
