//! Hand representations and blackjack sum evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The winning blackjack total.
pub const TARGET_SUM: u8 = 21;

/// Value of an ace counted low.
pub const ACE_LOW: u8 = 1;

/// Value of an ace counted high.
pub const ACE_HIGH: u8 = 11;

/// Maximum point value of a non-ace card (10 and all face cards).
pub const FACE_VALUE: u8 = 10;

/// Point value of a non-ace card: `min(rank, 10)`.
const fn clipped_value(rank: u8) -> u8 {
    if rank > FACE_VALUE { FACE_VALUE } else { rank }
}

/// Greedy resolution of ace values against a fixed non-ace sum.
///
/// Ace `i` (0-based) counts as 11 only if the running total stays within
/// `21 - i`, which reserves one point of headroom per ace decided so far;
/// otherwise it counts as 1. This closed-form loop stands in for searching
/// all `2^k` ace valuations and its boundary behavior is part of the
/// evaluator's contract, so it must not be replaced by the usual
/// count-aces-and-demote loop even where the two disagree.
fn optimal_ace_sum(num_aces: u8, non_ace_sum: u8) -> u8 {
    let mut ace_sum: u8 = 0;
    for idx in 0..num_aces {
        let budget = TARGET_SUM.saturating_sub(idx);
        let tentative = non_ace_sum.saturating_add(ace_sum).saturating_add(ACE_HIGH);
        if tentative <= budget {
            ace_sum += ACE_HIGH;
        } else {
            ace_sum = ace_sum.saturating_add(ACE_LOW);
        }
    }
    ace_sum
}

/// Computes the blackjack sum of a set of cards.
///
/// Non-ace cards contribute `min(rank, 10)` points each; aces resolve to 1
/// or 11 via [`optimal_ace_sum`]. The result is uncapped: totals above 21
/// signal a bust to the caller. An empty slice evaluates to 0.
#[must_use]
pub fn evaluate(cards: &[Card]) -> u8 {
    let mut num_aces: u8 = 0;
    let mut non_ace_sum: u8 = 0;

    for card in cards {
        if card.is_ace() {
            num_aces = num_aces.saturating_add(1);
        } else {
            non_ace_sum = non_ace_sum.saturating_add(clipped_value(card.rank));
        }
    }

    non_ace_sum.saturating_add(optimal_ace_sum(num_aces, non_ace_sum))
}

/// A player's hand.
///
/// Grows one card at a time via [`Hand::push`]; cards are never removed or
/// reordered within a game.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the blackjack sum of the hand.
    #[must_use]
    pub fn sum(&self) -> u8 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.sum() > TARGET_SUM
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The first card is dealt face-up; the second is the hole card, hidden from
/// display until the dealer plays but always part of the evaluated sum.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, hole card included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible sum (only the up card until the hole is revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.sum()
        } else {
            evaluate(&self.cards[..self.cards.len().min(1)])
        }
    }

    /// Calculates the full blackjack sum of the hand.
    #[must_use]
    pub fn sum(&self) -> u8 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.sum() > TARGET_SUM
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
