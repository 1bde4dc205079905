/// Seat relative to the button at a full-ring table.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Position {
    UTG,
    UTG1,
    MP,
    MP1,
    CO,
    BTN,
    SB,
    BB,
}

impl Position {
    pub const fn all() -> [Self; 8] {
        [
            Self::UTG,
            Self::UTG1,
            Self::MP,
            Self::MP1,
            Self::CO,
            Self::BTN,
            Self::SB,
            Self::BB,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UTG => "Under the Gun",
            Self::UTG1 => "UTG+1",
            Self::MP => "Middle Position",
            Self::MP1 => "Middle Position +1",
            Self::CO => "Cutoff",
            Self::BTN => "Button",
            Self::SB => "Small Blind",
            Self::BB => "Big Blind",
        }
    }

    /// preflop acting order, 1-indexed
    pub fn order(&self) -> usize {
        *self as usize + 1
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Self::UTG => "First to act preflop. Play very tight from here.",
            Self::UTG1 => "Second earliest position. Still play tight.",
            Self::MP => "Middle position. Can open up slightly.",
            Self::MP1 => "Later middle position.",
            Self::CO => "Second best position. Good for stealing.",
            Self::BTN => "Best position! Act last postflop. Play wide.",
            Self::SB => "Forced bet, out of position postflop.",
            Self::BB => "Defends vs steals. Gets good pot odds.",
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "UTG" => Ok(Self::UTG),
            "UTG1" | "UTG+1" => Ok(Self::UTG1),
            "MP" => Ok(Self::MP),
            "MP1" | "MP+1" => Ok(Self::MP1),
            "CO" => Ok(Self::CO),
            "BTN" => Ok(Self::BTN),
            "SB" => Ok(Self::SB),
            "BB" => Ok(Self::BB),
            _ => Err(crate::Error::ParsePosition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_seat() {
        for position in Position::all() {
            let s = format!("{}", position);
            assert_eq!(Position::try_from(s.as_str()).unwrap(), position);
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(Position::try_from("btn").unwrap(), Position::BTN);
        assert_eq!(Position::try_from("utg+1").unwrap(), Position::UTG1);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Position::try_from("HJ").is_err());
    }

    #[test]
    fn acting_order() {
        assert_eq!(Position::UTG.order(), 1);
        assert_eq!(Position::BB.order(), 8);
    }
}
