//! Text menu front end.
//!
//! Reads commands line by line, prompts for one-based column numbers and
//! drives a [`Game`]. Input and output are generic so the loop can run
//! against stdin/stdout or in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::game::{Game, Move};

/// Rules text shown by the `rules` command.
pub const RULES: &str = "\
Rules of Solitaire.
 The deck is shuffled and 49 cards are dealt into 7 play columns
 of 7 cards each. There are 7 reserve columns holding one card each,
 and 4 base columns. The 3 cards left over form the draw pile.

 The first card placed on any base column fixes the starting value
 for all four base columns. Base columns build up in suit, one value
 at a time. The top card of a play column may be moved onto another
 play column whose top card has a higher value. Any top card of a play
 column may be moved to an empty reserve column, and reserve cards may
 go to base or play columns. The draw pile's card may be placed on an
 empty play column or on a base column.

 The game is won when all 52 cards are on the base columns.";

/// A menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Rules,
    PlayToPlay,
    PlayToBase,
    PlayToReserve,
    ReserveToBase,
    ReserveToPlay,
    DrawToPlay,
    DrawToBase,
    Stop,
}

impl Command {
    /// Menu entries in display order.
    pub const MENU: [Command; 10] = [
        Command::NewGame,
        Command::Rules,
        Command::PlayToPlay,
        Command::PlayToBase,
        Command::PlayToReserve,
        Command::ReserveToBase,
        Command::ReserveToPlay,
        Command::DrawToPlay,
        Command::DrawToBase,
        Command::Stop,
    ];

    /// What the player types to pick this entry.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Command::NewGame => "new",
            Command::Rules => "rules",
            Command::PlayToPlay => "1",
            Command::PlayToBase => "2",
            Command::PlayToReserve => "3",
            Command::ReserveToBase => "4",
            Command::ReserveToPlay => "5",
            Command::DrawToPlay => "6",
            Command::DrawToBase => "7",
            Command::Stop => "stop",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Command::NewGame => "Start a new game",
            Command::Rules => "View game rules",
            Command::PlayToPlay => "Move card from play column to play column",
            Command::PlayToBase => "Move card from play column to base column",
            Command::PlayToReserve => "Move card from play column to reserve column",
            Command::ReserveToBase => "Move card from reserve column to base column",
            Command::ReserveToPlay => "Move card from reserve column to play column",
            Command::DrawToPlay => "Move card from draw pile to play column",
            Command::DrawToBase => "Move card from draw pile to base column",
            Command::Stop => "Stop the game",
        }
    }

    /// Look up the entry for typed input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::MENU.into_iter().find(|command| command.key() == input)
    }

    /// Whether the move takes a source column as well as a destination.
    fn needs_source(self) -> bool {
        !matches!(self, Command::DrawToPlay | Command::DrawToBase)
    }

    /// Build the move request for zero-based indices.
    fn to_move(self, from: usize, to: usize) -> Option<Move> {
        Some(match self {
            Command::PlayToPlay => Move::PlayToPlay { from, to },
            Command::PlayToBase => Move::PlayToBase { from, to },
            Command::PlayToReserve => Move::PlayToReserve { from, to },
            Command::ReserveToBase => Move::ReserveToBase { from, to },
            Command::ReserveToPlay => Move::ReserveToPlay { from, to },
            Command::DrawToPlay => Move::DrawToPlay { to },
            Command::DrawToBase => Move::DrawToBase { to },
            Command::NewGame | Command::Rules | Command::Stop => return None,
        })
    }
}

/// Convert a typed one-based column number to a zero-based index.
///
/// Returns `None` unless the text is a plain non-negative integer.
/// Column `0`, and numbers too large for `usize`, map to an index no
/// table has, so the move is refused.
#[must_use]
pub fn parse_column(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = text
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .unwrap_or(usize::MAX);
    Some(index)
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Stopped,
}

struct Shell<'g, R, W> {
    game: &'g mut Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    /// Print `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        for command in Command::MENU {
            writeln!(self.output, "{:6} {}", command.key(), command.description())?;
        }
        Ok(())
    }

    /// One round: board, menu, command. `Some` when the session is over.
    fn step(&mut self) -> io::Result<Option<Outcome>> {
        writeln!(self.output, "{}", self.game)?;
        self.print_menu()?;
        let Some(answer) = self.ask("Enter one of the commands: ")? else {
            return Ok(Some(Outcome::Stopped));
        };

        match Command::parse(&answer) {
            None => writeln!(self.output, "You entered the wrong command, please try again")?,
            Some(Command::Stop) => return Ok(Some(Outcome::Stopped)),
            Some(Command::NewGame) => self.game.new_game(),
            Some(Command::Rules) => writeln!(self.output, "{RULES}")?,
            Some(command) => {
                if !self.request_move(command)? {
                    return Ok(Some(Outcome::Stopped));
                }
            }
        }

        Ok(self.game.win().then_some(Outcome::Won))
    }

    /// Prompt for columns and attempt the move. `false` at end of input.
    fn request_move(&mut self, command: Command) -> io::Result<bool> {
        let source = if command.needs_source() {
            let Some(text) = self.ask("Enter the number of the column from which you want to take a card: ")? else {
                return Ok(false);
            };
            Some(text)
        } else {
            None
        };
        let Some(target) = self.ask("Enter the number of the column on which you want to place a card: ")? else {
            return Ok(false);
        };

        let from = match source.as_deref() {
            Some(text) => parse_column(text),
            // Draw moves have no source column.
            None => Some(0),
        };
        let request = from
            .zip(parse_column(&target))
            .and_then(|(from, to)| command.to_move(from, to));

        match request {
            Some(mv) => {
                if !self.game.apply(mv) {
                    writeln!(self.output, "Failed to move card.\n")?;
                }
            }
            None => writeln!(self.output, "Please enter an integer.")?,
        }
        Ok(true)
    }
}

/// Run the menu loop until the player stops, input ends or the game is won.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, output: W) -> io::Result<Outcome> {
    let mut shell = Shell { game, input, output };
    let outcome = loop {
        if let Some(outcome) = shell.step()? {
            break outcome;
        }
    };

    writeln!(shell.output, "{}", shell.game)?;
    if outcome == Outcome::Won {
        writeln!(shell.output, "Congratulations, you won!")?;
    }
    writeln!(shell.output, "Game over.")?;
    Ok(outcome)
}
