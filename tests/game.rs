//! Game flow integration tests.

use std::collections::HashMap;

use twentyone::{
    ActionError, Card, ConfigError, DealError, DealerError, Game, GameOptions, GameState, Outcome,
    OutcomeError, Shoe, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn new_game(decks: u8, players: usize, seed: u64) -> Game {
    Game::new(
        GameOptions::default().with_decks(decks).with_players(players),
        seed,
    )
    .unwrap()
}

#[test]
fn construction_rejects_zero_counts() {
    let no_decks = GameOptions::default().with_decks(0);
    assert_eq!(Game::new(no_decks, 1).unwrap_err(), ConfigError::NoDecks);

    let no_players = GameOptions::default().with_players(0);
    assert_eq!(Game::new(no_players, 1).unwrap_err(), ConfigError::NoPlayers);
}

#[test]
fn two_deck_shoe_holds_each_card_exactly_twice() {
    let mut game = new_game(2, 1, 3);
    assert_eq!(game.cards_remaining(), 104);

    let mut counts: HashMap<(Suit, u8), usize> = HashMap::new();
    while let Some(drawn) = game.shoe.draw() {
        *counts.entry((drawn.suit, drawn.rank)).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&count| count == 2));
}

#[test]
fn initial_deal_gives_everyone_two_cards_in_order() {
    let mut game = new_game(1, 2, 7);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10),  // dealer up
        card(Suit::Clubs, 6),    // dealer hole
        card(Suit::Spades, 9),   // player 0
        card(Suit::Diamonds, 9), // player 0
        card(Suit::Hearts, 5),   // player 1
        card(Suit::Clubs, 4),    // player 1
    ]);

    game.deal_initial().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);

    let dealer = game.dealer_hand();
    assert_eq!(dealer.len(), 2);
    assert_eq!(dealer.up_card(), Some(&card(Suit::Hearts, 10)));
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 10);
    assert_eq!(dealer.sum(), 16);

    assert_eq!(game.player_hand(0).unwrap().sum(), 18);
    assert_eq!(game.player_hand(1).unwrap().sum(), 9);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn initial_deal_runs_exactly_once() {
    let mut game = new_game(1, 1, 9);
    game.deal_initial().unwrap();
    assert_eq!(game.deal_initial().unwrap_err(), DealError::InvalidState);
}

#[test]
fn initial_deal_requires_enough_cards() {
    let mut game = new_game(1, 1, 9);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 5),
        card(Suit::Diamonds, 7),
    ]);

    assert_eq!(game.deal_initial().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn actions_are_rejected_before_the_deal() {
    let mut game = new_game(1, 1, 2);
    assert_eq!(game.hit(0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stay(0).unwrap_err(), ActionError::InvalidState);
}

#[test]
fn actions_reject_unknown_and_finished_players() {
    let mut game = new_game(1, 2, 4);
    game.deal_initial().unwrap();

    assert_eq!(game.hit(2).unwrap_err(), ActionError::PlayerNotFound);
    assert_eq!(game.stay(5).unwrap_err(), ActionError::PlayerNotFound);

    game.stay(0).unwrap();
    let cards_before = game.player_hand(0).unwrap().len();
    let shoe_before = game.cards_remaining();

    assert_eq!(game.hit(0).unwrap_err(), ActionError::PlayerDone);
    assert_eq!(game.stay(0).unwrap_err(), ActionError::PlayerDone);

    // A rejected action must leave the hand and the shoe untouched.
    assert_eq!(game.player_hand(0).unwrap().len(), cards_before);
    assert_eq!(game.cards_remaining(), shoe_before);
}

#[test]
fn hit_marks_a_busting_player_done() {
    let mut game = new_game(1, 1, 5);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10),  // dealer up
        card(Suit::Clubs, 7),    // dealer hole
        card(Suit::Spades, 10),  // player
        card(Suit::Diamonds, 9), // player
        card(Suit::Hearts, 5),   // player hit, busting at 24
    ]);

    game.deal_initial().unwrap();
    let drawn = game.hit(0).unwrap();
    assert_eq!(drawn.rank, 5);

    assert_eq!(game.is_done(0), Some(true));
    assert!(game.player_hand(0).unwrap().is_bust());
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn hit_with_empty_shoe_returns_an_error() {
    let mut game = new_game(1, 1, 6);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 9), // dealer up
        card(Suit::Clubs, 5),  // dealer hole
        card(Suit::Spades, 6), // player
        card(Suit::Hearts, 7), // player
    ]);

    game.deal_initial().unwrap();
    assert_eq!(game.hit(0).unwrap_err(), ActionError::NoCards);
}

#[test]
fn dealer_cannot_act_while_players_are_active() {
    let mut game = new_game(1, 2, 8);
    game.deal_initial().unwrap();

    assert_eq!(game.dealer_step().unwrap_err(), DealerError::InvalidState);

    game.stay(0).unwrap();
    // Player 1 is still acting.
    assert_eq!(game.dealer_step().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::InvalidState);
}

#[test]
fn dealer_stands_immediately_at_seventeen() {
    let mut game = new_game(1, 1, 10);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10), // dealer up
        card(Suit::Clubs, 7),   // dealer hole
        card(Suit::Spades, 9),  // player
        card(Suit::Hearts, 8),  // player
    ]);

    game.deal_initial().unwrap();
    game.stay(0).unwrap();

    assert!(game.dealer_step().unwrap());
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn dealer_draw_that_busts_still_stands_on_the_next_step() {
    let mut game = new_game(1, 1, 11);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10),  // dealer up
        card(Suit::Clubs, 6),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Hearts, 8),   // player
        card(Suit::Diamonds, 10), // dealer draw, busting at 26
    ]);

    game.deal_initial().unwrap();
    game.stay(0).unwrap();

    // 16 is below the stand threshold, so the dealer draws and busts.
    assert!(!game.dealer_step().unwrap());
    assert_eq!(game.dealer_sum(), 26);
    assert_eq!(game.state(), GameState::DealerTurn);

    // The bust surfaces as a stand on the following step.
    assert!(game.dealer_step().unwrap());
    assert_eq!(game.state(), GameState::RoundOver);

    assert_eq!(game.outcomes().unwrap(), vec![Outcome::Push]);
}

#[test]
fn dealer_draw_on_empty_shoe_returns_an_error() {
    let mut game = new_game(1, 1, 12);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10), // dealer up
        card(Suit::Clubs, 6),   // dealer hole
        card(Suit::Spades, 9),  // player
        card(Suit::Hearts, 8),  // player
    ]);

    game.deal_initial().unwrap();
    game.stay(0).unwrap();

    assert_eq!(game.dealer_step().unwrap_err(), DealerError::NoCards);
}

#[test]
fn outcomes_require_a_finished_round() {
    let mut game = new_game(1, 1, 13);
    assert_eq!(game.outcomes().unwrap_err(), OutcomeError::InvalidState);

    game.deal_initial().unwrap();
    assert_eq!(game.outcomes().unwrap_err(), OutcomeError::InvalidState);
}

#[test]
fn scripted_round_dealer_wins_twenty_to_eighteen() {
    let mut game = new_game(1, 1, 14);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10),  // dealer up
        card(Suit::Clubs, 6),    // dealer hole
        card(Suit::Spades, 9),   // player
        card(Suit::Diamonds, 9), // player
        card(Suit::Hearts, 4),   // dealer draw to 20
    ]);

    game.deal_initial().unwrap();
    game.stay(0).unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, 4)]);
    assert_eq!(game.dealer_sum(), 20);
    assert_eq!(game.state(), GameState::RoundOver);

    assert_eq!(game.outcomes().unwrap(), vec![Outcome::DealerWins]);
}

#[test]
fn multi_player_round_resolves_each_player_independently() {
    let mut game = new_game(1, 3, 15);
    game.shoe = Shoe::from_draws(&[
        card(Suit::Hearts, 10),  // dealer up
        card(Suit::Clubs, 9),    // dealer hole, dealer stands at 19
        card(Suit::Spades, 10),  // player 0
        card(Suit::Diamonds, 10), // player 0, stays at 20
        card(Suit::Hearts, 9),   // player 1
        card(Suit::Clubs, 8),    // player 1, stays at 17
        card(Suit::Spades, 10),  // player 2
        card(Suit::Hearts, 6),   // player 2
        card(Suit::Diamonds, 10), // player 2 hit, busting at 26
    ]);

    game.deal_initial().unwrap();
    game.stay(0).unwrap();
    game.stay(1).unwrap();
    game.hit(2).unwrap();
    assert!(game.all_players_done());

    assert!(game.dealer_step().unwrap());

    assert_eq!(
        game.outcomes().unwrap(),
        vec![Outcome::PlayerWins, Outcome::DealerWins, Outcome::DealerWins]
    );
}
