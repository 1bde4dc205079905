/// A betting action, preflop or postflop.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Fold,
    Limp,
    Call,
    Raise,
    ThreeBet,
    FourBet,
    AllIn,
    Check,
    Bet,
}

impl TryFrom<&str> for Action {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "fold" => Ok(Self::Fold),
            "limp" => Ok(Self::Limp),
            "call" => Ok(Self::Call),
            "raise" => Ok(Self::Raise),
            "3bet" | "three_bet" => Ok(Self::ThreeBet),
            "4bet" | "four_bet" => Ok(Self::FourBet),
            "allin" | "all_in" => Ok(Self::AllIn),
            "check" => Ok(Self::Check),
            "bet" => Ok(Self::Bet),
            _ => Err(crate::Error::ParseAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Limp => write!(f, "limp"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
            Self::ThreeBet => write!(f, "3bet"),
            Self::FourBet => write!(f, "4bet"),
            Self::AllIn => write!(f, "allin"),
            Self::Check => write!(f, "check"),
            Self::Bet => write!(f, "bet"),
        }
    }
}
