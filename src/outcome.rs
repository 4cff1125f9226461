//! Round outcome resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::TARGET_SUM;

/// Result of one player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player beats the dealer.
    PlayerWins,
    /// The dealer beats the player.
    DealerWins,
    /// No winner.
    Push,
}

/// Determines the outcome of a player sum against the dealer sum.
///
/// House rules, checked strictly in order (the conditions overlap at exactly
/// 21, so the order is load-bearing):
///
/// 1. Both at 21 push.
/// 2. Dealer at 21 wins.
/// 3. Dealer under 21 and above the player wins.
/// 4. A busted player loses, even if the dealer also busted.
/// 5. Player at 21 wins.
/// 6. Player under 21 and above the dealer wins.
/// 7. Everything else pushes, including a dealer bust against a
///    lower non-21 player sum.
///
/// Rules 4 and 7 deviate from common casino blackjack on purpose.
#[must_use]
pub fn resolve(dealer_sum: u8, player_sum: u8) -> Outcome {
    if dealer_sum == TARGET_SUM && player_sum == TARGET_SUM {
        Outcome::Push
    } else if dealer_sum == TARGET_SUM {
        Outcome::DealerWins
    } else if dealer_sum < TARGET_SUM && dealer_sum > player_sum {
        Outcome::DealerWins
    } else if player_sum > TARGET_SUM {
        Outcome::DealerWins
    } else if player_sum == TARGET_SUM {
        Outcome::PlayerWins
    } else if dealer_sum < player_sum {
        Outcome::PlayerWins
    } else {
        Outcome::Push
    }
}

/// Resolves every player sum against the same dealer sum.
///
/// Outcomes are returned in player-index order.
#[must_use]
pub fn resolve_all(dealer_sum: u8, player_sums: &[u8]) -> Vec<Outcome> {
    player_sums
        .iter()
        .map(|&player_sum| resolve(dealer_sum, player_sum))
        .collect()
}
