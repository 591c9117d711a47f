//! The game: one deal of the patience and every move made on it.
//!
//! ## Table
//!
//! - Draw pile: the 3 cards left after dealing, one turned up
//! - 7 play columns of 7 cards, building down by value
//! - 7 reserve slots of one card each
//! - 4 base columns, building up in suit from a shared start value
//!
//! ## Start value
//!
//! The first card placed on any base column fixes the value every other
//! base column must start with. It is held here, not on the columns, and
//! reset by [`Game::new_game`].
//!
//! ## Move requests
//!
//! Requests never panic. Out-of-range indices, empty sources and rule
//! violations all come back as `false` (or a [`MoveError`] from
//! [`Game::try_apply`]) with the table unchanged.

use tracing::{debug, info};

use super::moves::Move;
use crate::cards::{Card, Deck};
use crate::columns::{move_card, BaseColumn, Column, DrawPile, PlayColumn, ReserveColumn};
use crate::core::{
    GameConfig, GameRng, MoveError, BASE_COLUMNS, PLAY_COLUMNS, PLAY_DEPTH, RESERVE_COLUMNS,
};

/// A game of patience.
///
/// ## Example
///
/// ```
/// use patience::Game;
///
/// let mut game = Game::with_seed(7);
/// assert_eq!(game.card_count(), 52);
///
/// // Moving a column onto itself is always allowed and changes nothing.
/// assert!(game.play_to_play(2, 2));
///
/// // Out-of-range requests are refused.
/// assert!(!game.play_to_base(7, 0));
/// assert!(!game.win());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    rng: GameRng,
    draw: DrawPile,
    play: [PlayColumn; PLAY_COLUMNS],
    reserve: [ReserveColumn; RESERVE_COLUMNS],
    base: [BaseColumn; BASE_COLUMNS],
    start_value: Option<u8>,
    active: bool,
}

impl Game {
    /// Deal a game seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    /// Deal a reproducible game.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Deal a game as described by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::from_rng(config.rng())
    }

    fn from_rng(rng: GameRng) -> Self {
        let mut game = Self {
            rng,
            draw: DrawPile::new(Deck::new()),
            play: Default::default(),
            reserve: Default::default(),
            base: Default::default(),
            start_value: None,
            active: false,
        };
        game.new_game();
        game
    }

    /// Throw away the current table and deal a fresh one.
    ///
    /// Successive deals continue the same random stream, so a seeded
    /// session replays identically.
    pub fn new_game(&mut self) {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.draw = DrawPile::new(deck);

        let draw = &mut self.draw;
        self.play = std::array::from_fn(|_| PlayColumn::deal(draw, PLAY_DEPTH));
        self.reserve = Default::default();
        self.base = Default::default();
        self.start_value = None;
        self.active = true;

        info!(seed = self.rng.seed(), draw_pile = self.draw.len(), "new game dealt");
    }

    /// Seed of the random stream this session deals from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Check for a win: every base column holds 13 cards.
    ///
    /// A win ends the game; later calls keep returning `true`.
    pub fn win(&mut self) -> bool {
        let won = self.is_won();
        if won && self.active {
            info!("game won");
        }
        self.active = !won;
        won
    }

    /// Same test as [`Game::win`] without touching the active flag.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.base.iter().all(BaseColumn::full)
    }

    /// False once [`Game::win`] has seen a completed table.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    // === Move requests ===

    /// Move the top card of play column `from` onto play column `to`.
    ///
    /// `from == to` succeeds without changing anything.
    pub fn play_to_play(&mut self, from: usize, to: usize) -> bool {
        self.apply(Move::PlayToPlay { from, to })
    }

    pub fn play_to_base(&mut self, from: usize, to: usize) -> bool {
        self.apply(Move::PlayToBase { from, to })
    }

    pub fn play_to_reserve(&mut self, from: usize, to: usize) -> bool {
        self.apply(Move::PlayToReserve { from, to })
    }

    pub fn reserve_to_base(&mut self, from: usize, to: usize) -> bool {
        self.apply(Move::ReserveToBase { from, to })
    }

    pub fn reserve_to_play(&mut self, from: usize, to: usize) -> bool {
        self.apply(Move::ReserveToPlay { from, to })
    }

    /// Move the draw pile's card onto play column `to`, which must be empty.
    pub fn draw_to_play(&mut self, to: usize) -> bool {
        self.apply(Move::DrawToPlay { to })
    }

    pub fn draw_to_base(&mut self, to: usize) -> bool {
        self.apply(Move::DrawToBase { to })
    }

    /// Perform `mv`, reporting only success.
    pub fn apply(&mut self, mv: Move) -> bool {
        self.try_apply(mv).is_ok()
    }

    /// Perform `mv`, or explain why it was refused.
    ///
    /// On error nothing has changed.
    pub fn try_apply(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.perform(mv) {
            Ok(Some(card)) => {
                if mv.targets_base() {
                    self.start_value.get_or_insert(card.value());
                }
                debug!(?mv, %card, "move accepted");
                Ok(())
            }
            Ok(None) => {
                debug!(?mv, "column moved onto itself");
                Ok(())
            }
            Err(err) => {
                debug!(?mv, %err, "move refused");
                Err(err)
            }
        }
    }

    /// Validate and carry out `mv`. `Ok(None)` means a successful no-op.
    fn perform(&mut self, mv: Move) -> Result<Option<Card>, MoveError> {
        let card = match mv {
            Move::PlayToPlay { from, to } => {
                check_index(from, PLAY_COLUMNS)?;
                check_index(to, PLAY_COLUMNS)?;
                if from == to {
                    return Ok(None);
                }
                let (source, target) = pair_mut(&mut self.play, from, to);
                move_card(source, target)?
            }
            Move::PlayToBase { from, to } => {
                check_index(from, PLAY_COLUMNS)?;
                self.check_base_start(self.play[from].top(), to)?;
                move_card(&mut self.play[from], &mut self.base[to])?
            }
            Move::PlayToReserve { from, to } => {
                check_index(from, PLAY_COLUMNS)?;
                check_index(to, RESERVE_COLUMNS)?;
                move_card(&mut self.play[from], &mut self.reserve[to])?
            }
            Move::ReserveToBase { from, to } => {
                check_index(from, RESERVE_COLUMNS)?;
                self.check_base_start(self.reserve[from].top(), to)?;
                move_card(&mut self.reserve[from], &mut self.base[to])?
            }
            Move::ReserveToPlay { from, to } => {
                check_index(from, RESERVE_COLUMNS)?;
                check_index(to, PLAY_COLUMNS)?;
                move_card(&mut self.reserve[from], &mut self.play[to])?
            }
            Move::DrawToPlay { to } => {
                check_index(to, PLAY_COLUMNS)?;
                if !self.play[to].is_empty() {
                    return Err(MoveError::PlayColumnOccupied);
                }
                move_card(&mut self.draw, &mut self.play[to])?
            }
            Move::DrawToBase { to } => {
                self.check_base_start(self.draw.top(), to)?;
                move_card(&mut self.draw, &mut self.base[to])?
            }
        };
        Ok(Some(card))
    }

    /// Gate the first card into an empty base column on the start value.
    ///
    /// Also rejects an out-of-range base index. Placement on a non-empty
    /// base column is left to `BaseColumn::can_put`.
    fn check_base_start(&self, card: Option<Card>, to: usize) -> Result<(), MoveError> {
        let target = self.base.get(to).ok_or(MoveError::OutOfRange)?;
        let Some(card) = card else {
            return Ok(());
        };
        if !target.is_empty() {
            return Ok(());
        }
        match self.start_value {
            Some(expected) if expected != card.value() => Err(MoveError::StartRankMismatch {
                expected,
                found: card.value(),
            }),
            _ => Ok(()),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw
    }

    #[must_use]
    pub fn play(&self, index: usize) -> Option<&PlayColumn> {
        self.play.get(index)
    }

    #[must_use]
    pub fn reserve(&self, index: usize) -> Option<&ReserveColumn> {
        self.reserve.get(index)
    }

    #[must_use]
    pub fn base(&self, index: usize) -> Option<&BaseColumn> {
        self.base.get(index)
    }

    /// The value every base column must start with, once one has been started.
    #[must_use]
    pub fn start_value(&self) -> Option<u8> {
        self.start_value
    }

    /// Cards on the table, draw pile included. Always 52.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw.len()
            + self.play.iter().map(Column::len).sum::<usize>()
            + self.reserve.iter().map(Column::len).sum::<usize>()
            + self.base.iter().map(Column::len).sum::<usize>()
    }

    /// Multi-line rendering of the whole table.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "==============")?;
        writeln!(f, "Deck on table:  {}", self.draw)?;
        writeln!(f, "\nPlay columns:")?;
        for (i, column) in self.play.iter().enumerate() {
            writeln!(f, "{}. {column}", i + 1)?;
        }
        writeln!(f, "\nBase columns:")?;
        for (i, column) in self.base.iter().enumerate() {
            writeln!(f, "{}. {column}", i + 1)?;
        }
        writeln!(f, "\nReserve columns:")?;
        for (i, column) in self.reserve.iter().enumerate() {
            writeln!(f, "{}. {column}", i + 1)?;
        }
        write!(f, "==============")
    }
}

/// A table one move from a win: every base column is complete except the
/// last, whose King sits in reserve column 1.
#[cfg(test)]
pub(crate) fn one_move_from_win() -> Game {
    use crate::cards::{Rank, Suit};

    let mut game = Game::with_seed(1);
    let mut deck = Deck::new();
    deck.by_ref().for_each(drop);
    game.draw = DrawPile::new(deck);
    game.play = Default::default();
    for (column, suit) in Suit::ALL.into_iter().enumerate() {
        for rank in Rank::ALL {
            let card = Card::new(suit, rank);
            let placed = if suit == Suit::Diamonds && rank == Rank::King {
                game.reserve[0].put(card)
            } else {
                game.base[column].put(card)
            };
            assert!(placed);
        }
    }
    game.start_value = Some(1);
    game
}

fn check_index(index: usize, len: usize) -> Result<(), MoveError> {
    if index < len {
        Ok(())
    } else {
        Err(MoveError::OutOfRange)
    }
}

/// Borrow two distinct elements mutably.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (low, high) = items.split_at_mut(b);
        (&mut low[a], &mut high[0])
    } else {
        let (low, high) = items.split_at_mut(a);
        (&mut high[0], &mut low[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    /// A game with every column and the draw pile emptied.
    fn bare_table() -> Game {
        let mut game = Game::with_seed(1);
        let mut deck = Deck::new();
        deck.by_ref().for_each(drop);
        game.draw = DrawPile::new(deck);
        game.play = Default::default();
        game
    }

    fn stack(game: &mut Game, column: usize, cards: &[&str]) {
        for c in cards {
            assert!(game.play[column].put(card(c)), "cannot stack {c}");
        }
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::with_seed(42);

        for i in 0..PLAY_COLUMNS {
            assert_eq!(game.play(i).unwrap().len(), PLAY_DEPTH);
        }
        assert_eq!(game.draw_pile().len(), 3);
        assert!(game.draw_pile().top().is_some());
        assert!((0..RESERVE_COLUMNS).all(|i| game.reserve(i).unwrap().is_empty()));
        assert!((0..BASE_COLUMNS).all(|i| game.base(i).unwrap().is_empty()));
        assert_eq!(game.start_value(), None);
        assert!(game.is_active());
        assert_eq!(game.card_count(), 52);
    }

    #[test]
    fn test_new_game_resets_state() {
        let mut game = bare_table();
        stack(&mut game, 0, &["8-C"]);
        assert!(game.play_to_base(0, 0));
        assert_eq!(game.start_value(), Some(8));

        game.new_game();
        assert_eq!(game.start_value(), None);
        assert_eq!(game.card_count(), 52);
        assert!(game.base(0).unwrap().is_empty());
    }

    #[test]
    fn test_seeded_deals_repeat() {
        let a = Game::with_seed(2024);
        let b = Game::with_seed(2024);
        assert_eq!(a.describe(), b.describe());

        let mut c = Game::with_seed(2024);
        c.new_game();
        assert_ne!(a.describe(), c.describe());
    }

    #[test]
    fn test_play_to_same_column_is_noop() {
        let mut game = Game::with_seed(3);
        let before = game.play(2).unwrap().clone();
        assert!(game.play_to_play(2, 2));
        assert_eq!(game.play(2).unwrap(), &before);

        // Even an empty column
        let mut bare = bare_table();
        assert!(bare.play_to_play(4, 4));
    }

    #[test]
    fn test_play_to_play_rules() {
        let mut game = bare_table();
        stack(&mut game, 0, &["9-H"]);
        stack(&mut game, 1, &["K-S", "T-C"]);

        assert_eq!(
            game.try_apply(Move::PlayToPlay { from: 1, to: 0 }),
            Err(MoveError::Rejected)
        );
        assert!(game.play_to_play(0, 1));
        assert!(game.play(0).unwrap().is_empty());
        assert_eq!(game.play(1).unwrap().top(), Some(card("9-H")));

        // Into an empty column
        assert!(game.play_to_play(1, 0));
        assert_eq!(game.play(0).unwrap().cards(), &[card("9-H")]);

        assert_eq!(
            game.try_apply(Move::PlayToPlay { from: 5, to: 0 }),
            Err(MoveError::EmptySource)
        );
        assert!(!game.play_to_play(0, 7));
        assert!(!game.play_to_play(7, 0));
    }

    #[test]
    fn test_out_of_range_has_no_effect() {
        let mut game = Game::with_seed(9);
        let before = game.describe();

        assert!(!game.play_to_base(7, 0));
        assert!(!game.play_to_base(0, 4));
        assert!(!game.play_to_reserve(0, 7));
        assert!(!game.reserve_to_base(7, 0));
        assert!(!game.reserve_to_play(0, 7));
        assert!(!game.draw_to_play(7));
        assert!(!game.draw_to_base(4));
        assert_eq!(
            game.try_apply(Move::DrawToBase { to: usize::MAX }),
            Err(MoveError::OutOfRange)
        );

        assert_eq!(game.describe(), before);
        assert_eq!(game.start_value(), None);
    }

    #[test]
    fn test_draw_to_play_needs_empty_column() {
        let mut game = Game::with_seed(5);
        for j in 0..PLAY_COLUMNS {
            assert_eq!(
                game.try_apply(Move::DrawToPlay { to: j }),
                Err(MoveError::PlayColumnOccupied)
            );
        }
        assert_eq!(game.draw_pile().len(), 3);

        // Empty column 0 into the reserves, then draw onto it
        for r in 0..PLAY_DEPTH {
            assert!(game.play_to_reserve(0, r));
        }
        let drawn = game.draw_pile().top();
        assert!(game.draw_to_play(0));
        assert_eq!(game.play(0).unwrap().top(), drawn);
        assert_eq!(game.draw_pile().len(), 2);
        assert_eq!(game.card_count(), 52);
    }

    #[test]
    fn test_draw_from_empty_pile() {
        let mut game = bare_table();
        assert_eq!(
            game.try_apply(Move::DrawToPlay { to: 0 }),
            Err(MoveError::EmptySource)
        );
        assert_eq!(
            game.try_apply(Move::DrawToBase { to: 0 }),
            Err(MoveError::EmptySource)
        );
    }

    #[test]
    fn test_reserve_round_trip() {
        let mut game = bare_table();
        stack(&mut game, 0, &["Q-H", "4-D"]);

        assert!(game.play_to_reserve(0, 3));
        assert_eq!(game.reserve(3).unwrap().top(), Some(card("4-D")));
        assert!(!game.play_to_reserve(0, 3));
        assert_eq!(game.play(0).unwrap().top(), Some(card("Q-H")));

        assert!(game.reserve_to_play(3, 0));
        assert!(game.reserve(3).unwrap().is_empty());
        assert!(!game.reserve_to_play(3, 0));
    }

    #[test]
    fn test_reserve_to_base_from_empty_reserve() {
        let mut game = Game::with_seed(8);
        assert_eq!(
            game.try_apply(Move::ReserveToBase { from: 0, to: 0 }),
            Err(MoveError::EmptySource)
        );
        assert_eq!(game.start_value(), None);
    }

    #[test]
    fn test_first_base_card_fixes_start_value() {
        let mut game = bare_table();
        stack(&mut game, 0, &["5-H"]);
        stack(&mut game, 1, &["5-S"]);
        stack(&mut game, 2, &["6-C"]);
        stack(&mut game, 3, &["6-H"]);

        assert!(game.play_to_base(0, 0));
        assert_eq!(game.start_value(), Some(5));

        assert!(game.play_to_base(1, 1));
        assert_eq!(
            game.try_apply(Move::PlayToBase { from: 2, to: 2 }),
            Err(MoveError::StartRankMismatch { expected: 5, found: 6 })
        );
        assert_eq!(game.play(2).unwrap().top(), Some(card("6-C")));

        // A started column follows suit order instead
        assert!(game.play_to_base(3, 0));
        assert_eq!(game.base(0).unwrap().top(), Some(card("6-H")));
        assert_eq!(game.start_value(), Some(5));
    }

    #[test]
    fn test_start_value_applies_to_every_source() {
        let mut game = bare_table();
        stack(&mut game, 0, &["J-D"]);
        assert!(game.play_to_base(0, 3));

        assert!(game.reserve[0].put(card("2-C")));
        assert!(!game.reserve_to_base(0, 0));
        assert!(game.reserve[1].put(card("J-C")));
        assert!(game.reserve_to_base(1, 0));

        let mut deck = Deck::new();
        deck.by_ref().take(51).for_each(drop);
        // Only A-C is left
        game.draw = DrawPile::new(deck);
        assert_eq!(
            game.try_apply(Move::DrawToBase { to: 1 }),
            Err(MoveError::StartRankMismatch { expected: 11, found: 1 })
        );
        assert_eq!(game.draw_pile().len(), 1);
    }

    #[test]
    fn test_base_rejects_wrong_suit() {
        let mut game = bare_table();
        stack(&mut game, 0, &["3-S"]);
        stack(&mut game, 1, &["4-H"]);
        assert!(game.play_to_base(0, 0));
        assert_eq!(
            game.try_apply(Move::PlayToBase { from: 1, to: 0 }),
            Err(MoveError::Rejected)
        );
    }

    #[test]
    fn test_win_requires_all_bases_full() {
        let mut game = bare_table();
        for (column, suit) in Suit::ALL.into_iter().enumerate() {
            for rank in Rank::ALL {
                assert!(game.base[column].put(Card::new(suit, rank)));
            }
        }
        game.start_value = Some(1);

        assert!(game.is_active());
        assert!(game.win());
        assert!(!game.is_active());
        assert!(game.win());

        game.base[2].away();
        assert!(!game.win());
        assert!(game.is_active());
    }

    #[test]
    fn test_fresh_game_is_not_won() {
        let mut game = Game::with_seed(77);
        assert!(!game.win());
        assert!(game.is_active());
    }

    #[test]
    fn test_describe_layout() {
        let mut game = bare_table();
        stack(&mut game, 0, &["K-H", "2-S"]);
        assert!(game.reserve[6].put(card("T-D")));
        assert!(game.base[1].put(card("A-C")));

        let expected = "\
==============
Deck on table:  [-]

Play columns:
1. [K-H 2-S]
2. []
3. []
4. []
5. []
6. []
7. []

Base columns:
1. [ ]
2. [A-C]
3. [ ]
4. [ ]

Reserve columns:
1. [ ]
2. [ ]
3. [ ]
4. [ ]
5. [ ]
6. [ ]
7. [T-D]
==============";
        assert_eq!(game.describe(), expected);
    }

    #[test]
    fn test_pair_mut() {
        let mut items = [1, 2, 3, 4];
        let (a, b) = pair_mut(&mut items, 3, 1);
        std::mem::swap(a, b);
        assert_eq!(items, [1, 4, 3, 2]);
    }
}
