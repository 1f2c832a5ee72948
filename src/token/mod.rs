pub mod codec;
pub mod format;

pub use codec::Token;
