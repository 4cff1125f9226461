//! CLI blackjack demo: the presentation layer around the round engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{DealerHand, Game, GameOptions, GameState, Outcome};

fn main() {
    loop {
        println!("Welcome to Blackjack!");

        let Some(players) = prompt_usize("How many players? ") else {
            return;
        };
        let Some(decks) = prompt_usize("How many decks? ") else {
            return;
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let options = GameOptions::default()
            .with_decks(decks.min(u8::MAX as usize) as u8)
            .with_players(players);

        match Game::new(options, seed) {
            Ok(mut game) => play_round(&mut game),
            Err(err) => {
                println!("Cannot start game: {err}");
                continue;
            }
        }

        if prompt_line("Type y to play another game: ") != "y" {
            return;
        }
    }
}

fn play_round(game: &mut Game) {
    println!("Starting game...");

    if let Err(err) = game.deal_initial() {
        println!("Deal error: {err}");
        return;
    }

    print_dealer_up_card(game.dealer_hand());

    let mut first_pass = true;
    while game.state() == GameState::PlayerTurn {
        for player in 0..game.player_count() {
            if game.is_done(player) == Some(true) {
                continue;
            }
            if first_pass {
                print_player_hand(game, player);
            }
            player_turn(game, player);
            print_player_hand(game, player);
        }
        first_pass = false;
    }

    while game.state() == GameState::DealerTurn {
        match game.dealer_step() {
            Ok(true) => {
                println!("Dealer: stays at {}", game.dealer_sum());
            }
            Ok(false) => {
                if let Some(card) = game.dealer_hand().cards().last() {
                    println!("Dealer: hit and drew a {card}");
                }
                print_dealer_hand(game.dealer_hand());
            }
            Err(err) => {
                println!("Dealer error: {err}");
                return;
            }
        }
    }

    print_dealer_hand(game.dealer_hand());

    match game.outcomes() {
        Ok(outcomes) => {
            for (player, outcome) in outcomes.iter().enumerate() {
                let verdict = match outcome {
                    Outcome::PlayerWins => "wins",
                    Outcome::DealerWins => "loses to the dealer",
                    Outcome::Push => "pushes",
                };
                println!("Player {player} {verdict}.");
            }
        }
        Err(err) => println!("Outcome error: {err}"),
    }
}

fn player_turn(game: &mut Game, player: usize) {
    loop {
        match prompt_line(&format!("Player {player}: Type h to hit or s to stay. ")).as_str() {
            "h" => {
                match game.hit(player) {
                    Ok(card) => println!("Player {player}: Chose to hit and drew {card}"),
                    Err(err) => println!("Action error: {err}"),
                }
                return;
            }
            "s" => {
                if let Err(err) = game.stay(player) {
                    println!("Action error: {err}");
                }
                println!("Player {player}: Chose to Stay.");
                return;
            }
            _ => {}
        }
    }
}

fn print_dealer_up_card(dealer: &DealerHand) {
    if let Some(card) = dealer.up_card() {
        println!("Dealer: {card}");
    }
}

fn print_dealer_hand(dealer: &DealerHand) {
    println!("Dealer: {} at sum {}", format_cards(dealer.cards()), dealer.sum());
}

fn print_player_hand(game: &Game, player: usize) {
    if let Some(hand) = game.player_hand(player) {
        println!(
            "Player {player}: {} at sum {}",
            format_cards(hand.cards()),
            hand.sum()
        );
    }
}

fn format_cards(cards: &[twentyone::Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
