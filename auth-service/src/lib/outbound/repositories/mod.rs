pub mod fixed;
pub mod memory;

pub use fixed::FixedAccountStore;
pub use memory::InMemoryAccountStore;
