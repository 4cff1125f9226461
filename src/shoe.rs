//! The shoe: one or more shuffled decks drawn without replacement.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered stack of cards drawn from the back.
///
/// A shoe is built once per game and never regenerates mid-game; every drawn
/// card leaves it permanently.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds and shuffles a shoe with the specified number of decks.
    #[must_use]
    pub fn shuffled(num_decks: u8, rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds an unshuffled shoe that yields the given cards in order.
    ///
    /// The first card in `draws` is the first card drawn. Intended for
    /// scripted rounds in tests and demos.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card, or `None` if the shoe is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
