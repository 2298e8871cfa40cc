pub mod error;
pub mod gemini;
#[cfg(test)]
pub mod mock;
pub mod poll;
#[cfg(test)]
pub mod stub;
pub mod traits;
pub mod types;

pub use error::Result;
pub use gemini::GeminiGateway;
pub use traits::MarketplaceAi;
pub use types::{GeminiModels, PollPolicy};
