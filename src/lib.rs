//! A no-limit Texas hold'em settlement engine.
//!
//! One [`table::Game`] plays exactly one hand: it shuffles, deals, runs the
//! four betting streets against pluggable [`table::Player`] collaborators,
//! narrates every transition to registered [`table::Observer`]s in order,
//! and settles the pot at showdown — side pots, split pots, and odd chips
//! included. The engine is single-use: play the hand, collect the
//! [`table::Payout`]s, discard it.
//!
//! Seating, button rotation, hand history, and participant strategies all
//! live outside this crate; they meet the engine only through the `Player`
//! and `Observer` traits.

pub mod cards;
pub mod table;

/// Chip amounts: stacks, bets, pots. Signed so that net results (reward
/// minus risk) need no widening; amounts in play never go negative.
pub type Chips = i32;

/// Seat index in table order. Seat 0 posts the small blind and is the
/// button when heads-up.
pub type Position = usize;

/// Fewest participants a hand can be dealt.
pub const MIN_PLAYERS: usize = 2;

/// Most participants one 52-card deck can serve: 23 two-card holes plus a
/// five-card board leaves one card to spare.
pub const MAX_PLAYERS: usize = 23;
