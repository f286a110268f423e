//! Reaction handlers, one per observed document type.

mod proposal;
mod room;
mod task;

pub use proposal::ProposalAnnouncedHandler;
pub use room::RoomConnectedHandler;
pub use task::TaskAnnouncedHandler;
