//! Domain model types

pub mod brand;
pub mod conversation;
pub mod fleet;
pub mod truck;

pub use brand::{sort_by_brand, BrandRecord};
pub use conversation::{ConversationLog, Speaker, Utterance};
pub use fleet::Fleet;
pub use truck::{Identity, TruckRecord};
