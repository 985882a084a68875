mod bflist_player;
mod bflist_server;

pub use bflist_player::BflistPlayer;
pub use bflist_server::BflistServer;
