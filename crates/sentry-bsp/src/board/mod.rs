pub mod disc1;
pub use disc1::*;
