pub mod filter;
pub mod metrics;
pub mod requirements;
pub mod selection;
pub mod sort;
pub mod state;
