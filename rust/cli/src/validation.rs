//! Parsing of interactive input and card notation.

use ridebus_engine::cards::{Card, Rank, Suit};
use ridebus_engine::rules::Guess;

/// One parsed line of `play` input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Start a round; `None` uses the session's default bet
    Start(Option<f64>),
    Guess(Guess),
    CashOut,
    Odds,
    Stats,
    Help,
    Quit,
    Invalid(String),
}

/// Parses a line typed during `play`. Case-insensitive.
///
/// ```rust
/// use ridebus_cli::validation::{parse_play_input, ParseResult};
/// use ridebus_engine::rules::Guess;
///
/// assert_eq!(parse_play_input("start 25"), ParseResult::Start(Some(25.0)));
/// assert_eq!(parse_play_input("Higher"), ParseResult::Guess(Guess::Higher));
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" | "exit" => ParseResult::Quit,
        "help" | "?" => ParseResult::Help,
        "odds" => ParseResult::Odds,
        "stats" => ParseResult::Stats,
        "cash" | "cashout" | "cash-out" => ParseResult::CashOut,
        "start" | "bet" | "deal" => match parts.get(1) {
            None => ParseResult::Start(None),
            Some(raw) => match raw.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount > 0.0 => {
                    ParseResult::Start(Some(amount))
                }
                Ok(_) => ParseResult::Invalid("Bet amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid bet amount '{}'", raw)),
            },
        },
        token => match parse_guess(token) {
            Some(guess) => ParseResult::Guess(guess),
            None => ParseResult::Invalid(format!(
                "Unrecognized input '{}'. Type 'help' for commands",
                token
            )),
        },
    }
}

/// Guess token to [`Guess`]. Accepts full words and short forms.
pub fn parse_guess(token: &str) -> Option<Guess> {
    let guess = match token {
        "red" | "r" => Guess::Red,
        "black" | "b" => Guess::Black,
        "higher" | "high" | "hi" | "up" => Guess::Higher,
        "lower" | "low" | "lo" | "down" => Guess::Lower,
        "in" | "inside" | "between" => Guess::Between,
        "out" | "outside" => Guess::Outside,
        other => Guess::Suit(parse_suit(other)?),
    };
    Some(guess)
}

fn parse_suit(token: &str) -> Option<Suit> {
    match token {
        "hearts" | "heart" | "h" | "♥" => Some(Suit::Hearts),
        "diamonds" | "diamond" | "d" | "♦" => Some(Suit::Diamonds),
        "clubs" | "club" | "c" | "♣" => Some(Suit::Clubs),
        "spades" | "spade" | "s" | "♠" => Some(Suit::Spades),
        _ => None,
    }
}

/// Parses card notation such as `7h`, `Qs`, `10d` or `Td`.
pub fn parse_card(s: &str) -> Result<Card, String> {
    let s = s.trim();
    let mut chars = s.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| "Empty card".to_string())?;
    let rank_str = chars.as_str().to_ascii_lowercase();
    let suit = parse_suit(&suit_char.to_lowercase().to_string())
        .ok_or_else(|| format!("Invalid suit in '{}'", s))?;
    let rank = match rank_str.as_str() {
        "a" => Rank::Ace,
        "k" => Rank::King,
        "q" => Rank::Queen,
        "j" => Rank::Jack,
        "t" => Rank::Ten,
        digits => digits
            .parse::<u8>()
            .ok()
            .filter(|v| (2..=10).contains(v))
            .and_then(Rank::from_value)
            .ok_or_else(|| format!("Invalid rank in '{}'", s))?,
    };
    Ok(Card::new(rank, suit))
}

/// Parses a list of cards, rejecting duplicates.
pub fn parse_cards(items: &[String]) -> Result<Vec<Card>, String> {
    let mut cards = Vec::with_capacity(items.len());
    for item in items.iter().filter(|i| !i.trim().is_empty()) {
        let card = parse_card(item)?;
        if cards.contains(&card) {
            return Err(format!("Duplicate card '{}'", item.trim()));
        }
        cards.push(card);
    }
    Ok(cards)
}
