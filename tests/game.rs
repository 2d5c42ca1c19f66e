//! Game integration tests.

use std::collections::HashMap;

use bjgame::{
    ActionError, Card, DECK_SIZE, DealError, Game, GameOptions, GameStatus, NaturalRule, Rank,
    Suit, Winner, determine_winner, hand_score, shuffle, standard_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds an undealt game whose cards come off the deck in the given order.
fn game_from_draws(draws: &[Card], options: &GameOptions) -> Game {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    Game::with_deck(deck, options)
}

fn dealt_game(draws: &[Card]) -> Game {
    let options = GameOptions::default();
    let mut game = game_from_draws(draws, &options);
    game.deal(&options).unwrap();
    game
}

fn card_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn standard_deck_has_forty_distinct_cards() {
    let deck = standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(DECK_SIZE, 40);

    let counts = card_counts(&deck);
    assert_eq!(counts.len(), 40);
    assert!(counts.values().all(|&n| n == 1));

    assert_eq!(deck[0], card(Suit::Hearts, Rank::Two));
    assert_eq!(deck[39], card(Suit::Spades, Rank::Ace));
    assert_eq!(card(Suit::Clubs, Rank::Ace).value(), 11);
    assert_eq!(card(Suit::Clubs, Rank::Ten).value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Seven).value(), 7);
}

#[test]
fn shuffle_keeps_every_card() {
    let original = card_counts(&standard_deck());

    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = standard_deck();
        shuffle(&mut deck, &mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(card_counts(&deck), original);
    }
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    let mut first = standard_deck();
    let mut second = standard_deck();
    shuffle(&mut first, &mut ChaCha8Rng::seed_from_u64(7));
    shuffle(&mut second, &mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(first, second);

    let mut other = standard_deck();
    shuffle(&mut other, &mut ChaCha8Rng::seed_from_u64(8));
    assert_ne!(first, other);
    assert_ne!(first, standard_deck());
}

#[test]
fn hand_score_reduces_aces_one_at_a_time() {
    let ace = card(Suit::Hearts, Rank::Ace);
    let ace2 = card(Suit::Spades, Rank::Ace);
    let ten = card(Suit::Clubs, Rank::Ten);
    let nine = card(Suit::Diamonds, Rank::Nine);
    let five = card(Suit::Hearts, Rank::Five);

    assert_eq!(hand_score(&[]), 0);
    assert_eq!(hand_score(&[ace, ace2]), 12);
    assert_eq!(hand_score(&[ace, nine]), 20);
    assert_eq!(hand_score(&[ten, nine, five]), 24);
    assert_eq!(hand_score(&[ten, ace]), 21);
    assert_eq!(hand_score(&[ace, ace2, nine]), 21);
    assert_eq!(hand_score(&[ten, five, ace, ace2]), 17);
    assert_eq!(hand_score(&[ten, nine, ace, five]), 25);
}

#[test]
fn determine_winner_policy() {
    assert_eq!(determine_winner(22, 20), Winner::Dealer);
    assert_eq!(determine_winner(20, 22), Winner::Player);
    assert_eq!(determine_winner(20, 20), Winner::Draw);
    assert_eq!(determine_winner(21, 21), Winner::Draw);
    assert_eq!(determine_winner(19, 18), Winner::Player);
    assert_eq!(determine_winner(17, 18), Winner::Dealer);
    // A player bust loses even when the dealer also busts.
    assert_eq!(determine_winner(23, 25), Winner::Dealer);
}

#[test]
fn deal_gives_two_cards_each_from_the_tail() {
    let options = GameOptions::default();
    let mut game = Game::shuffled(&mut ChaCha8Rng::seed_from_u64(3), &options);
    assert_eq!(game.status(), GameStatus::Started);
    assert_eq!(game.cards_remaining(), DECK_SIZE);

    let deck = game.deck().to_vec();
    game.deal(&options).unwrap();

    assert_eq!(game.cards_remaining(), 36);
    assert_eq!(game.player().hand(), &[deck[39], deck[38]]);
    assert_eq!(game.dealer().hand(), &[deck[37], deck[36]]);
    assert_eq!(game.player().score(), hand_score(game.player().hand()));
    assert_eq!(game.dealer().score(), hand_score(game.dealer().hand()));
    assert_eq!(game.player().name(), "player");
    assert_eq!(game.dealer().name(), "dealer");
}

#[test]
fn deal_without_naturals_leaves_game_in_play() {
    let game = dealt_game(&[
        card(Suit::Hearts, Rank::Eight),  // player
        card(Suit::Clubs, Rank::Seven),   // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Six),    // dealer
    ]);

    assert_eq!(game.status(), GameStatus::InPlay);
    assert_eq!(game.winner(), None);
    assert_eq!(game.player().score(), 15);
    assert_eq!(game.dealer().score(), 16);
}

#[test]
fn legacy_naturals_make_player_21_a_draw() {
    let game = dealt_game(&[
        card(Suit::Hearts, Rank::Ace),   // player
        card(Suit::Clubs, Rank::Ten),    // player
        card(Suit::Diamonds, Rank::Nine), // dealer
        card(Suit::Spades, Rank::Five),  // dealer
    ]);

    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner(), Some(Winner::Draw));
}

#[test]
fn legacy_naturals_give_dealer_21_to_dealer() {
    let game = dealt_game(&[
        card(Suit::Hearts, Rank::Nine),   // player
        card(Suit::Clubs, Rank::Five),    // player
        card(Suit::Diamonds, Rank::Ace),  // dealer
        card(Suit::Spades, Rank::Ten),    // dealer
    ]);

    assert_eq!(game.winner(), Some(Winner::Dealer));
    assert!(game.is_finished());
}

#[test]
fn legacy_naturals_both_21_is_a_draw() {
    let game = dealt_game(&[
        card(Suit::Hearts, Rank::Ace),   // player
        card(Suit::Clubs, Rank::Ten),    // player
        card(Suit::Spades, Rank::Ace),   // dealer
        card(Suit::Diamonds, Rank::Ten), // dealer
    ]);

    assert_eq!(game.player().score(), 21);
    assert_eq!(game.dealer().score(), 21);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner(), Some(Winner::Draw));
}

#[test]
fn hand_score_saturates_instead_of_overflowing() {
    let aces = vec![card(Suit::Spades, Rank::Ace); 6000];
    assert_eq!(hand_score(&aces), u16::MAX - 10 * 6000);
}

#[test]
fn standard_naturals_check_both_sides() {
    let options = GameOptions::default().with_naturals(NaturalRule::Standard);
    let blackjack = [card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Ten)];
    let fourteen = [card(Suit::Diamonds, Rank::Nine), card(Suit::Spades, Rank::Five)];
    let other_blackjack = [card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::Ten)];

    let cases = [
        ([blackjack, fourteen].concat(), Some(Winner::Player)),
        ([fourteen, blackjack].concat(), Some(Winner::Dealer)),
        ([blackjack, other_blackjack].concat(), Some(Winner::Draw)),
        (
            [fourteen, [card(Suit::Clubs, Rank::Two), card(Suit::Clubs, Rank::Three)]].concat(),
            None,
        ),
    ];

    for (draws, expected) in cases {
        let mut game = game_from_draws(&draws, &options);
        game.deal(&options).unwrap();
        assert_eq!(game.winner(), expected);
    }
}

#[test]
fn deal_errors() {
    let options = GameOptions::default();
    let mut short = game_from_draws(
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Hearts, Rank::Four),
        ],
        &options,
    );
    assert_eq!(short.deal(&options).unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(short.cards_remaining(), 3);
    assert!(short.player().is_empty());

    let mut game = Game::shuffled(&mut ChaCha8Rng::seed_from_u64(1), &options);
    game.deal(&options).unwrap();
    assert_eq!(game.deal(&options).unwrap_err(), DealError::InvalidState);
}

#[test]
fn hit_before_deal_is_rejected() {
    let options = GameOptions::default();
    let mut game = Game::shuffled(&mut ChaCha8Rng::seed_from_u64(1), &options);
    assert_eq!(game.hit().unwrap_err(), ActionError::NotInPlay);
    assert_eq!(game.stand(&options).unwrap_err(), ActionError::NotInPlay);
}

#[test]
fn hit_draws_one_card_and_rescores() {
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Two),    // player
        card(Suit::Clubs, Rank::Three),   // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Six),    // dealer
        card(Suit::Hearts, Rank::Ace),    // hit
        card(Suit::Clubs, Rank::Nine),    // hit
    ]);

    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Suit::Hearts, Rank::Ace));
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.player().len(), 3);
    assert_eq!(game.player().score(), 16);
    assert_eq!(game.status(), GameStatus::InPlay);

    // 2 + 3 + 11 + 9 = 25, the ace drops it to 15.
    game.hit().unwrap();
    assert_eq!(game.player().score(), 15);
    assert_eq!(game.winner(), None);
}

#[test]
fn hit_bust_finishes_for_dealer() {
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Six),     // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Two),    // dealer
        card(Suit::Hearts, Rank::Nine),   // hit
    ]);

    game.hit().unwrap();
    assert_eq!(game.player().score(), 25);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner(), Some(Winner::Dealer));

    let before = game.clone();
    assert_eq!(game.hit().unwrap_err(), ActionError::GameFinished);
    assert_eq!(game, before);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Five),   // player
        card(Suit::Clubs, Rank::Six),     // player
        card(Suit::Diamonds, Rank::Nine), // dealer
        card(Suit::Spades, Rank::Seven),  // dealer
    ]);

    let before = game.clone();
    assert_eq!(game.hit().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(game, before);
}

#[test]
fn stand_dealer_draws_to_seventeen() {
    let options = GameOptions::default();
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Eight),   // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Three),  // dealer
        card(Suit::Hearts, Rank::Two),    // dealer draw, 15
        card(Suit::Hearts, Rank::Five),   // dealer draw, 20
        card(Suit::Clubs, Rank::Four),    // left in the deck
    ]);

    let drawn = game.stand(&options).unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(game.dealer().len(), 4);
    assert_eq!(game.dealer().score(), 20);
    assert_eq!(game.deck(), &[card(Suit::Clubs, Rank::Four)]);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.winner(), Some(Winner::Dealer));
}

#[test]
fn stand_dealer_bust_gives_player_the_win() {
    let options = GameOptions::default();
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Two),    // player
        card(Suit::Clubs, Rank::Three),   // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Six),    // dealer
        card(Suit::Hearts, Rank::Ten),    // dealer draw, 26
    ]);

    game.stand(&options).unwrap();
    assert_eq!(game.dealer().score(), 26);
    assert_eq!(game.winner(), Some(Winner::Player));
}

#[test]
fn stand_on_seventeen_does_not_draw() {
    let options = GameOptions::default();
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Seven),   // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Seven),  // dealer
        card(Suit::Hearts, Rank::Two),
    ]);

    let drawn = game.stand(&options).unwrap();
    assert!(drawn.is_empty());
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.winner(), Some(Winner::Draw));
}

#[test]
fn stand_respects_configured_threshold() {
    let options = GameOptions::default().with_dealer_stands_on(19);
    let mut game = game_from_draws(
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Nine),    // player
            card(Suit::Diamonds, Rank::Ten),  // dealer
            card(Suit::Spades, Rank::Seven),  // dealer
            card(Suit::Hearts, Rank::Two),    // dealer draw, 19
        ],
        &options,
    );
    game.deal(&options).unwrap();

    game.stand(&options).unwrap();
    assert_eq!(game.dealer().score(), 19);
    assert_eq!(game.winner(), Some(Winner::Draw));
}

#[test]
fn stand_on_finished_game_changes_nothing() {
    let options = GameOptions::default();
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Nine),    // player
        card(Suit::Diamonds, Rank::Ten),  // dealer
        card(Suit::Spades, Rank::Two),    // dealer
        card(Suit::Hearts, Rank::Three),  // dealer draw
        card(Suit::Hearts, Rank::Four),   // dealer draw
        card(Suit::Clubs, Rank::Five),
        card(Suit::Clubs, Rank::Six),
    ]);

    game.stand(&options).unwrap();
    let finished = game.clone();

    assert_eq!(game.stand(&options).unwrap_err(), ActionError::GameFinished);
    assert_eq!(game, finished);
}

#[test]
fn stand_with_exhausted_deck_leaves_game_untouched() {
    let options = GameOptions::default();
    let mut game = dealt_game(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Nine),    // player
        card(Suit::Diamonds, Rank::Two),  // dealer
        card(Suit::Spades, Rank::Three),  // dealer
        card(Suit::Hearts, Rank::Four),   // dealer draw, 9, then the deck is empty
    ]);

    let before = game.clone();
    assert_eq!(game.stand(&options).unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(game, before);
}

#[test]
fn full_games_conserve_the_deck() {
    let options = GameOptions::default();
    let original = card_counts(&standard_deck());

    for seed in 0..32 {
        let mut game = Game::shuffled(&mut ChaCha8Rng::seed_from_u64(seed), &options);
        game.deal(&options).unwrap();

        while game.status() == GameStatus::InPlay && game.player().score() < 15 {
            game.hit().unwrap();
        }
        if game.status() == GameStatus::InPlay {
            game.stand(&options).unwrap();
        }

        assert!(game.is_finished());
        assert!(game.winner().is_some());
        assert!(game.player().is_bust() || game.dealer().score() >= 17 || game.player().len() == 2);

        let held = game
            .deck()
            .iter()
            .chain(game.player().hand())
            .chain(game.dealer().hand());
        assert_eq!(card_counts(held), original);
        assert_eq!(game.player().score(), hand_score(game.player().hand()));
        assert_eq!(game.dealer().score(), hand_score(game.dealer().hand()));
    }
}
