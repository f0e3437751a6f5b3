//! Game integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cribbage::{
    Card, ContinueError, CountError, CutError, DealError, Deck, DiscardError, EventKind, Game,
    GameOptions, GameState, GoError, PeggingMove, PlayError, PlayedCard, ResetReason, RunScoring,
    Seat, SimulationOptions, Simulator, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `draws` in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// Computer deals. The player keeps K♥ Q♥ 9♣ 8♣, the computer keeps
/// 3♠ 4♠ 6♠ 7♠, the crib is 2♦ 3♦ A♠ 2♠ and the cut is 5♥.
fn thirty_one_deal() -> Deck {
    deck_from_draws(&[
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 1),
        card(Suit::Diamonds, 3),
        card(Suit::Spades, 2),
        card(Suit::Hearts, 13),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 12),
        card(Suit::Spades, 4),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 7),
        card(Suit::Hearts, 5),
    ])
}

/// Computer deals. The player keeps K♥ Q♥ J♣ 10♦, the computer keeps
/// 3♠ 4♠ 6♠ 7♠ and the cut is 5♥.
fn go_deal() -> Deck {
    deck_from_draws(&[
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 1),
        card(Suit::Diamonds, 3),
        card(Suit::Spades, 2),
        card(Suit::Hearts, 13),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 12),
        card(Suit::Spades, 4),
        card(Suit::Clubs, 11),
        card(Suit::Spades, 6),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 7),
        card(Suit::Hearts, 5),
    ])
}

fn ready_to_peg(options: GameOptions, deck: Deck) -> Game {
    let game = Game::new(options, 1);
    game.stack_deck(deck);
    game.start_game(Seat::Computer).unwrap();
    game.discard_to_crib([0, 1]).unwrap();
    game
}

/// Plays K♥ 7♠ Q♥ 4♠ from [`thirty_one_deal`], reaching 31.
fn play_to_thirty_one(game: &Game) {
    game.play_card(Seat::Player, card(Suit::Hearts, 13)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 7)).unwrap();
    game.play_card(Seat::Player, card(Suit::Hearts, 12)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 4)).unwrap();
}

#[test]
fn card_values_and_names() {
    assert_eq!(card(Suit::Hearts, 1).point_value(), 1);
    assert_eq!(card(Suit::Clubs, 7).point_value(), 7);
    assert_eq!(card(Suit::Spades, 12).point_value(), 10);
    assert_eq!(card(Suit::Spades, 12).order_rank(), 12);
    assert!(card(Suit::Diamonds, 11).is_jack());
    assert!(card(Suit::Diamonds, 2).is_red());
    assert!(!card(Suit::Clubs, 2).is_red());
    assert_eq!(card(Suit::Hearts, 5).to_string(), "Five of Hearts");
    assert_eq!(card(Suit::Hearts, 5).short_name().to_string(), "5\u{2665}");
    assert_eq!(card(Suit::Spades, 10).short_name().to_string(), "10\u{2660}");
}

#[test]
fn deal_alternates_starting_with_non_dealer() {
    let game = Game::new(GameOptions::default(), 1);
    game.stack_deck(thirty_one_deal());
    game.start_game(Seat::Computer).unwrap();

    assert_eq!(game.state(), GameState::Discard);
    assert_eq!(game.dealer(), Some(Seat::Computer));
    assert_eq!(
        game.hand(Seat::Player),
        vec![
            card(Suit::Diamonds, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Hearts, 13),
            card(Suit::Hearts, 12),
            card(Suit::Clubs, 9),
            card(Suit::Clubs, 8),
        ]
    );
    assert_eq!(game.hand(Seat::Computer).len(), 6);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn sort_hand_orders_by_rank() {
    let game = Game::new(GameOptions::default(), 1);
    game.stack_deck(thirty_one_deal());
    game.start_game(Seat::Computer).unwrap();
    game.sort_hand(Seat::Player);

    assert_eq!(
        game.hand(Seat::Player),
        vec![
            card(Suit::Diamonds, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Clubs, 8),
            card(Suit::Clubs, 9),
            card(Suit::Hearts, 12),
            card(Suit::Hearts, 13),
        ]
    );
}

#[test]
fn discard_fills_crib_and_non_dealer_leads() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());

    assert_eq!(game.state(), GameState::Play);
    assert_eq!(game.current_turn(), Some(Seat::Player));
    assert_eq!(game.cut_card(), Some(card(Suit::Hearts, 5)));
    assert_eq!(
        game.crib(),
        vec![
            card(Suit::Diamonds, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 1),
            card(Suit::Spades, 2),
        ]
    );
    assert_eq!(
        game.hand(Seat::Computer),
        vec![
            card(Suit::Spades, 3),
            card(Suit::Spades, 4),
            card(Suit::Spades, 6),
            card(Suit::Spades, 7),
        ]
    );
}

#[test]
fn discard_rejects_bad_indices_and_wrong_state() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.discard_to_crib([0, 1]),
        Err(DiscardError::InvalidState)
    );

    game.stack_deck(thirty_one_deal());
    game.start_game(Seat::Computer).unwrap();
    assert_eq!(
        game.discard_to_crib([2, 2]),
        Err(DiscardError::InvalidIndices)
    );
    assert_eq!(
        game.discard_to_crib([0, 6]),
        Err(DiscardError::InvalidIndices)
    );
    assert_eq!(game.hand(Seat::Player).len(), 6);
    assert_eq!(game.hand(Seat::Computer).len(), 6);
    assert!(game.crib().is_empty());
    assert_eq!(game.state(), GameState::Discard);
}

#[test]
fn jack_cut_scores_heels_for_computer_dealer() {
    let game = Game::new(GameOptions::default(), 1);
    game.stack_deck(deck_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Spades, 1),
        card(Suit::Hearts, 3),
        card(Suit::Spades, 2),
        card(Suit::Hearts, 4),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 6),
        card(Suit::Spades, 4),
        card(Suit::Hearts, 7),
        card(Suit::Spades, 6),
        card(Suit::Hearts, 8),
        card(Suit::Spades, 7),
        card(Suit::Diamonds, 11),
    ]));
    game.start_game(Seat::Computer).unwrap();
    game.take_events();

    let cut = game.discard_to_crib([3, 4]).unwrap();
    assert_eq!(cut, card(Suit::Diamonds, 11));
    assert_eq!(game.score(Seat::Computer), 2);
    assert_eq!(game.score(Seat::Player), 0);
    assert_eq!(game.state(), GameState::Play);

    let events = game.take_events();
    assert!(events.iter().any(|event| event.kind
        == EventKind::HisHeels {
            seat: Seat::Computer
        }));
}

#[test]
fn heels_can_end_the_game() {
    let game = Game::new(GameOptions::default().with_target_score(2), 1);
    game.stack_deck(deck_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Spades, 1),
        card(Suit::Hearts, 3),
        card(Suit::Spades, 2),
        card(Suit::Hearts, 4),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 6),
        card(Suit::Spades, 4),
        card(Suit::Hearts, 7),
        card(Suit::Spades, 6),
        card(Suit::Hearts, 8),
        card(Suit::Spades, 7),
        card(Suit::Clubs, 11),
    ]));
    game.start_game(Seat::Computer).unwrap();
    game.discard_to_crib([0, 1]).unwrap();

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.winner(), Some(Seat::Computer));
    assert_eq!(game.current_turn(), None);
    assert_eq!(
        game.play_card(Seat::Player, card(Suit::Hearts, 4)),
        Err(PlayError::InvalidState)
    );
    assert_eq!(game.count_hands(), Err(CountError::InvalidState));
}

#[test]
fn play_card_validates_turn_card_and_count() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());

    assert_eq!(
        game.play_card(Seat::Computer, card(Suit::Spades, 3)),
        Err(PlayError::NotYourTurn)
    );
    assert_eq!(
        game.play_card(Seat::Player, card(Suit::Spades, 1)),
        Err(PlayError::CardNotInHand)
    );

    game.play_card(Seat::Player, card(Suit::Hearts, 13)).unwrap();
    assert_eq!(game.current_turn(), Some(Seat::Computer));
    game.play_card(Seat::Computer, card(Suit::Spades, 7)).unwrap();
    assert_eq!(
        game.play_card(Seat::Player, card(Suit::Hearts, 13)),
        Err(PlayError::AlreadyPlayed)
    );
    game.play_card(Seat::Player, card(Suit::Hearts, 12)).unwrap();
    assert_eq!(game.current_count(), 27);
    assert_eq!(
        game.play_card(Seat::Computer, card(Suit::Spades, 6)),
        Err(PlayError::ExceedsThirtyOne)
    );
    assert_eq!(game.current_count(), 27);
    assert_eq!(game.remaining_cards(Seat::Computer).len(), 3);
}

#[test]
fn say_go_is_refused_while_a_card_fits() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());

    assert_eq!(game.say_go(Seat::Player), Err(GoError::CanStillPlay));
    assert_eq!(game.say_go(Seat::Computer), Err(GoError::NotYourTurn));
    assert_eq!(game.continue_after_pause(), Err(ContinueError::InvalidState));
}

#[test]
fn thirty_one_scores_two_and_opponent_leads() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());
    game.take_events();
    play_to_thirty_one(&game);

    assert_eq!(game.score(Seat::Computer), 2);
    assert_eq!(game.current_count(), 0);
    assert!(game.played_pile().is_empty());
    assert_eq!(game.state(), GameState::PauseAt31);
    assert_eq!(game.current_turn(), Some(Seat::Player));

    let events = game.take_events();
    assert!(
        events
            .iter()
            .any(|event| event.message == "Computer scores 2 (31 for 2)")
    );
    assert!(events.iter().any(|event| event.kind
        == EventKind::CountReset {
            reason: ResetReason::ThirtyOne
        }));

    assert_eq!(
        game.play_card(Seat::Player, card(Suit::Clubs, 9)),
        Err(PlayError::InvalidState)
    );
    game.continue_after_pause().unwrap();
    assert_eq!(game.state(), GameState::Play);
    assert_eq!(game.current_turn(), Some(Seat::Player));
}

#[test]
fn go_scores_one_for_last_card_and_opponent_leads() {
    let game = ready_to_peg(GameOptions::default(), go_deal());
    game.play_card(Seat::Player, card(Suit::Hearts, 13)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 7)).unwrap();
    game.play_card(Seat::Player, card(Suit::Hearts, 12)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 3)).unwrap();

    // At 30 neither seat can play.
    assert_eq!(game.score(Seat::Computer), 1);
    assert_eq!(game.score(Seat::Player), 0);
    assert_eq!(game.current_count(), 0);
    assert_eq!(game.state(), GameState::PauseOnGo);
    assert_eq!(game.current_turn(), Some(Seat::Player));
    assert!(
        game.take_events()
            .iter()
            .any(|event| event.kind == EventKind::GoPoint { seat: Seat::Computer })
    );
}

#[test]
fn opponent_says_go_and_last_seat_keeps_playing() {
    // Computer deals. The player keeps 7♥ 8♥ 4♥ 3♥, the computer keeps
    // K♠ Q♠ J♠ 10♠ and the cut is 5♦.
    let game = ready_to_peg(
        GameOptions::default(),
        deck_from_draws(&[
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 1),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 2),
            card(Suit::Hearts, 7),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 8),
            card(Suit::Spades, 12),
            card(Suit::Hearts, 4),
            card(Suit::Spades, 11),
            card(Suit::Hearts, 3),
            card(Suit::Spades, 10),
            card(Suit::Diamonds, 5),
        ]),
    );
    game.play_card(Seat::Player, card(Suit::Hearts, 7)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 13)).unwrap();
    game.take_events();

    game.play_card(Seat::Player, card(Suit::Hearts, 8)).unwrap();
    assert_eq!(game.current_count(), 25);
    assert_eq!(game.state(), GameState::Play);
    assert_eq!(game.current_turn(), Some(Seat::Player));
    assert!(
        game.take_events()
            .iter()
            .any(|event| event.kind == EventKind::Go { seat: Seat::Computer })
    );
    assert_eq!(
        game.play_card(Seat::Computer, card(Suit::Spades, 12)),
        Err(PlayError::NotYourTurn)
    );

    // 29 leaves the 3♥ stuck in hand, so the player pegs one for go.
    game.play_card(Seat::Player, card(Suit::Hearts, 4)).unwrap();
    assert_eq!(game.score(Seat::Player), 1);
    assert_eq!(game.score(Seat::Computer), 0);
    assert_eq!(game.current_count(), 0);
    assert_eq!(game.state(), GameState::PauseOnGo);
    assert_eq!(game.current_turn(), Some(Seat::Computer));
    assert!(
        game.take_events()
            .iter()
            .any(|event| event.kind == EventKind::GoPoint { seat: Seat::Player })
    );
}

#[test]
fn played_pile_tracks_seats_in_order() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());
    game.play_card(Seat::Player, card(Suit::Hearts, 13)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 7)).unwrap();

    assert_eq!(
        game.played_pile(),
        vec![
            PlayedCard {
                card: card(Suit::Hearts, 13),
                seat: Seat::Player,
            },
            PlayedCard {
                card: card(Suit::Spades, 7),
                seat: Seat::Computer,
            },
        ]
    );
    assert_eq!(game.played_cards(Seat::Player), vec![card(Suit::Hearts, 13)]);
    assert_eq!(game.hand(Seat::Player).len(), 4);
}

/// Finishes pegging after [`play_to_thirty_one`]: 9♣ 6♠ 8♣ 3♠, ending on 26.
fn finish_pegging(game: &Game) {
    game.continue_after_pause().unwrap();
    game.play_card(Seat::Player, card(Suit::Clubs, 9)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 6)).unwrap();
    game.play_card(Seat::Player, card(Suit::Clubs, 8)).unwrap();
    game.play_card(Seat::Computer, card(Suit::Spades, 3)).unwrap();
}

#[test]
fn full_round_counts_non_dealer_dealer_then_crib() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());
    play_to_thirty_one(&game);
    finish_pegging(&game);

    // 31 for 2, fifteen for 2, last card for 1.
    assert_eq!(game.score(Seat::Computer), 5);
    assert_eq!(game.state(), GameState::PauseBeforeCount);
    assert_eq!(game.current_turn(), None);

    let counts = game.count_hands().unwrap();
    assert_eq!(counts.len(), 3);
    assert_eq!((counts[0].seat, counts[0].is_crib), (Seat::Player, false));
    assert_eq!((counts[1].seat, counts[1].is_crib), (Seat::Computer, false));
    assert_eq!((counts[2].seat, counts[2].is_crib), (Seat::Computer, true));

    // K♥ Q♥ 9♣ 8♣ with 5♥: two fifteens.
    assert_eq!(counts[0].score.total(), 4);
    // 3♠ 4♠ 6♠ 7♠ with 5♥: two fifteens, a run of five and a flush.
    assert_eq!(counts[1].score.fifteens, 4);
    assert_eq!(counts[1].score.runs, 5);
    assert_eq!(counts[1].score.flush, 4);
    assert_eq!(counts[1].score.total(), 13);
    // 2♦ 3♦ A♠ 2♠ with 5♥: a pair and a run of three.
    assert_eq!(counts[2].score.total(), 5);

    assert_eq!(game.score(Seat::Player), 4);
    assert_eq!(game.score(Seat::Computer), 23);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer(), Some(Seat::Player));

    game.start_round().unwrap();
    assert_eq!(game.state(), GameState::Discard);
    assert_eq!(game.hand(Seat::Player).len(), 6);
    assert_eq!(game.score(Seat::Computer), 23);
    assert!(game.crib().is_empty());
    assert_eq!(game.cut_card(), None);
}

#[test]
fn multiplied_runs_reach_the_crib_count() {
    let game = ready_to_peg(
        GameOptions::default().with_run_scoring(RunScoring::Multiplied),
        thirty_one_deal(),
    );
    play_to_thirty_one(&game);
    finish_pegging(&game);

    let counts = game.count_hands().unwrap();
    // 2♦ 3♦ A♠ 2♠ with 5♥: a double run of three and a pair.
    assert!(counts[2].is_crib);
    assert_eq!(counts[2].score.runs, 6);
    assert_eq!(counts[2].score.pairs, 2);
    assert_eq!(counts[2].score.total(), 8);
    assert_eq!(counts[1].score.runs, 5);
    assert_eq!(game.score(Seat::Player), 4);
    assert_eq!(game.score(Seat::Computer), 26);
}

#[test]
fn counting_stops_once_target_is_reached() {
    let game = ready_to_peg(
        GameOptions::default().with_target_score(10),
        thirty_one_deal(),
    );
    play_to_thirty_one(&game);
    finish_pegging(&game);

    let counts = game.count_hands().unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(game.score(Seat::Player), 4);
    assert_eq!(game.score(Seat::Computer), 18);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.winner(), Some(Seat::Computer));
    assert_eq!(game.dealer(), Some(Seat::Computer));
}

#[test]
fn computer_turn_plays_a_legal_card() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());
    assert_eq!(game.play_computer_turn(), Err(PlayError::NotYourTurn));

    game.play_card(Seat::Player, card(Suit::Hearts, 13)).unwrap();
    let PeggingMove::Played(played) = game.play_computer_turn().unwrap() else {
        panic!("computer should have a playable card");
    };
    assert!(game.played_cards(Seat::Computer).contains(&played));
    assert_eq!(game.current_count(), 10 + played.point_value());
}

#[test]
fn cut_for_deal_lower_card_deals() {
    let game = Game::new(GameOptions::default(), 1);
    game.stack_deck(deck_from_draws(&[card(Suit::Clubs, 5)]));
    game.stack_deck(deck_from_draws(&[card(Suit::Diamonds, 13)]));
    game.stack_deck(Deck::ordered());

    assert_eq!(game.cut_for_deal(), Ok(Some(Seat::Player)));
    assert_eq!(game.dealer(), Some(Seat::Player));
    assert_eq!(game.state(), GameState::Discard);
    assert_eq!(game.hand(Seat::Computer).len(), 6);
    assert_eq!(game.cut_for_deal(), Err(CutError::InvalidState));
}

#[test]
fn cut_for_deal_with_empty_deck_keeps_stacked_decks() {
    let game = Game::new(GameOptions::default(), 1);
    game.stack_deck(deck_from_draws(&[card(Suit::Clubs, 5)]));
    game.stack_deck(Deck::from_cards(Vec::new()));

    assert_eq!(game.cut_for_deal(), Err(CutError::NotEnoughCards));
    assert_eq!(game.state(), GameState::CutForDeal);
    assert!(game.take_events().is_empty());

    // The one-card deck is still first in line, and too short for a round.
    assert_eq!(
        game.start_game(Seat::Player),
        Err(DealError::NotEnoughCards)
    );
}

#[test]
fn cut_for_deal_tie_compares_point_values() {
    let game = Game::new(GameOptions::default(), 1);
    game.stack_deck(deck_from_draws(&[card(Suit::Clubs, 12)]));
    game.stack_deck(deck_from_draws(&[card(Suit::Diamonds, 13)]));

    assert_eq!(game.cut_for_deal(), Ok(None));
    assert_eq!(game.state(), GameState::CutForDeal);
    assert_eq!(game.dealer(), None);
    assert!(
        game.take_events()
            .iter()
            .any(|event| event.kind == EventKind::CutTie)
    );
}

#[test]
fn new_game_resets_scores() {
    let game = ready_to_peg(GameOptions::default(), thirty_one_deal());
    play_to_thirty_one(&game);
    assert_eq!(game.score(Seat::Computer), 2);

    game.new_game();
    assert_eq!(game.score(Seat::Computer), 0);
    assert_eq!(game.state(), GameState::CutForDeal);
    assert_eq!(game.dealer(), None);
    assert!(game.hand(Seat::Player).is_empty());
}

#[test]
fn listeners_see_every_event_in_order() {
    let game = Game::new(GameOptions::default(), 5);
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    game.add_listener(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    game.start_game(Seat::Player).unwrap();
    game.discard_to_crib([0, 1]).unwrap();

    let events = game.take_events();
    assert!(!events.is_empty());
    assert_eq!(seen.load(Ordering::SeqCst), events.len());
    assert_eq!(
        events[0].kind,
        EventKind::DealerChosen {
            dealer: Seat::Player
        }
    );
    assert!(game.take_events().is_empty());
}

#[test]
fn same_seed_same_game() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    a.start_game(Seat::Player).unwrap();
    b.start_game(Seat::Player).unwrap();
    assert_eq!(a.hand(Seat::Player), b.hand(Seat::Player));
    assert_eq!(a.hand(Seat::Computer), b.hand(Seat::Computer));
}

#[test]
fn simulation_is_deterministic_and_alternates_dealer() {
    let options = SimulationOptions::default().with_games(6).with_seed(7);
    let first = Simulator::new(options.clone()).run();
    let second = Simulator::new(options).run();

    assert_eq!(first, second);
    assert_eq!(first.results.len(), 6);
    assert_eq!(first.summary.total_games, 6);
    assert_eq!(
        first.summary.player_wins + first.summary.computer_wins,
        6
    );
    for (index, record) in first.results.iter().enumerate() {
        assert_eq!(record.game_number, index + 1);
        let expected_dealer = if index % 2 == 0 {
            Seat::Computer
        } else {
            Seat::Player
        };
        assert_eq!(record.dealer, expected_dealer);

        let (winner_score, loser_score) = match record.winner {
            Seat::Player => (record.player_score, record.computer_score),
            Seat::Computer => (record.computer_score, record.player_score),
        };
        assert!(winner_score >= 121);
        assert!(loser_score < 121);
    }
}
