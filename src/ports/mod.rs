pub mod backend;
pub mod bridge;

// Re-export all port traits for convenience
pub use backend::{ObjectApi, PinReceipt, PinningApi};
pub use bridge::RainbowBridge;
