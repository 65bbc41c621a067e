// # Contact Store Implementations
//
// This module provides implementations of the ContactStore trait.

pub mod memory;

pub use memory::{MemoryContactStore, demo_contacts};
