//! Block model and engines shared by the builder backend and the browser preview.

pub mod blocks;
pub mod candidate;
pub mod device;
pub mod error;
pub mod export;
pub mod page;
pub mod payout;
pub mod probability;
pub mod registry;
pub mod render;
pub mod reveal;
pub mod rounds;
pub mod session;
pub mod validation;

pub use blocks::{BlockConfig, BlockKind};
pub use candidate::{OutcomeCandidate, PayoutValue};
pub use error::ConfigError;
pub use page::{Page, PageBlock};
pub use registry::BlockRegistry;
