mod booking;
mod fees;
mod ledger;
mod money;
mod room;

pub use booking::*;
pub use fees::*;
pub use ledger::*;
pub use money::*;
pub use room::*;
