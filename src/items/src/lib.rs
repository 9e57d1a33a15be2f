//src/items/src/lib.rs

pub use crate::weapon::Weapon;

pub mod weapon;
