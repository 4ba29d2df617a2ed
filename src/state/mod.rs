pub mod bridge;
pub mod stick;

pub use bridge::InputBridge;
pub use stick::{StickFrame, StickGeometry, StickState};
