pub mod betting;
pub use betting::*;

pub mod decision;
pub use decision::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod observer;
pub use observer::*;

pub mod payout;
pub use payout::*;

pub mod player;
pub use player::*;

pub mod position;
pub use position::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;

pub mod spot;
pub use spot::*;
