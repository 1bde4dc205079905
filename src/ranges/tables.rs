use super::notation::Notation;
use super::position::Position;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Static preflop ranges for tight-aggressive full-ring play, keyed by
/// position. UTG+1 mirrors UTG and MP+1 mirrors MP.
#[derive(Debug, Clone)]
pub struct Seat {
    pub open_raise: BTreeSet<Notation>,
    pub three_bet: BTreeSet<Notation>,
    pub call: BTreeSet<Notation>,
    pub limp: BTreeSet<Notation>,
}

fn parse(chart: &str) -> BTreeSet<Notation> {
    chart
        .split_whitespace()
        .map(|s| Notation::try_from(s).expect("static range table entry"))
        .collect()
}

const UTG_OPEN: &str = "AA KK QQ JJ TT 99 88 AKs AQs AJs ATs KQs AKo AQo";
const UTG_3BET: &str = "AA KK QQ AKs AKo";

const MP_OPEN: &str = "AA KK QQ JJ TT 99 88 77
    AKs AQs AJs ATs A9s KQs KJs QJs JTs
    AKo AQo AJo KQo";
const MP_3BET: &str = "AA KK QQ JJ AKs AKo AQs";

const CO_OPEN: &str = "AA KK QQ JJ TT 99 88 77 66 55
    AKs AQs AJs ATs A9s A8s A7s A6s A5s A4s A3s A2s
    KQs KJs KTs K9s QJs QTs Q9s JTs J9s T9s 98s 87s 76s
    AKo AQo AJo ATo KQo KJo QJo JTo";
const CO_3BET: &str = "AA KK QQ JJ TT AKs AQs AJs AKo AQo A5s A4s 76s 65s";

const BTN_OPEN: &str = "AA KK QQ JJ TT 99 88 77 66 55 44 33 22
    AKs AQs AJs ATs A9s A8s A7s A6s A5s A4s A3s A2s
    KQs KJs KTs K9s K8s K7s K6s K5s
    QJs QTs Q9s Q8s JTs J9s J8s T9s T8s 98s 97s 87s 86s 76s 75s 65s 64s 54s
    AKo AQo AJo ATo A9o A8o A7o A6o A5o A4o
    KQo KJo KTo QJo QTo JTo J9o T9o 98o";
const BTN_3BET: &str = "AA KK QQ JJ TT 99 AKs AQs AJs ATs AKo AQo AJo
    A5s A4s A3s 76s 65s 54s K9s";

const SB_OPEN: &str = "AA KK QQ JJ TT 99 88 77 66 55 44
    AKs AQs AJs ATs A9s A8s A7s A6s A5s A4s A3s A2s
    KQs KJs KTs K9s QJs QTs JTs T9s 98s 87s 76s
    AKo AQo AJo ATo A9o KQo KJo QJo";
const SB_3BET: &str = "AA KK QQ JJ TT AKs AQs AKo 99 88 AJs A5s A4s";
const SB_LIMP: &str = "22 33 44 55 66 77
    54s 65s 76s 87s 98s T9s J9s
    A2s A3s A4s A5s";

const BB_3BET: &str = "AA KK QQ JJ TT AKs AQs AJs AKo AQo 99 88 ATs KQs A5s A4s";
const BB_CALL: &str = "AA KK QQ JJ TT 99 88 77 66 55 44 33 22
    AKs AQs AJs ATs A9s A8s A7s A6s A5s A4s A3s A2s
    KQs KJs KTs K9s K8s K7s K6s K5s
    QJs QTs Q9s Q8s JTs J9s J8s T9s T8s 98s 97s 87s 86s 76s 75s 65s 64s 54s 53s 43s
    AKo AQo AJo ATo A9o A8o A7o KQo KJo KTo QJo QTo JTo T9o 98o 87o";

/// weak-passive limping range, used when a seat has no limp set
pub static DEFAULT_LIMP: LazyLock<BTreeSet<Notation>> = LazyLock::new(|| {
    parse(
        "22 33 44 55 66 77 88
        54s 65s 76s 87s 98s T9s
        A2s A3s A4s A5s K9s Q9s J9s
        A9o KTo QTo JTo",
    )
});

/// position-independent 4-bet range
pub static FOUR_BET: LazyLock<BTreeSet<Notation>> =
    LazyLock::new(|| parse("AA KK QQ AKs AKo"));

/// position-independent shoving range
pub static ALL_IN: LazyLock<BTreeSet<Notation>> =
    LazyLock::new(|| parse("AA KK QQ JJ AKs AKo AQs"));

static SEATS: LazyLock<[Seat; 8]> = LazyLock::new(|| {
    let utg = Seat {
        open_raise: parse(UTG_OPEN),
        three_bet: parse(UTG_3BET),
        call: BTreeSet::new(),
        limp: BTreeSet::new(),
    };
    let mp = Seat {
        open_raise: parse(MP_OPEN),
        three_bet: parse(MP_3BET),
        call: BTreeSet::new(),
        limp: BTreeSet::new(),
    };
    let co = Seat {
        open_raise: parse(CO_OPEN),
        three_bet: parse(CO_3BET),
        call: BTreeSet::new(),
        limp: BTreeSet::new(),
    };
    let btn = Seat {
        open_raise: parse(BTN_OPEN),
        three_bet: parse(BTN_3BET),
        call: BTreeSet::new(),
        limp: BTreeSet::new(),
    };
    let sb = Seat {
        open_raise: parse(SB_OPEN),
        three_bet: parse(SB_3BET),
        call: BTreeSet::new(),
        limp: parse(SB_LIMP),
    };
    let bb = Seat {
        open_raise: BTreeSet::new(),
        three_bet: parse(BB_3BET),
        call: parse(BB_CALL),
        limp: BTreeSet::new(),
    };
    [utg.clone(), utg, mp.clone(), mp, co, btn, sb, bb]
});

pub fn seat(position: Position) -> &'static Seat {
    &SEATS[position as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_seats_alias() {
        assert_eq!(
            seat(Position::UTG).open_raise,
            seat(Position::UTG1).open_raise
        );
        assert_eq!(seat(Position::MP).three_bet, seat(Position::MP1).three_bet);
    }

    #[test]
    fn ranges_widen_toward_the_button() {
        let utg = seat(Position::UTG).open_raise.len();
        let mp = seat(Position::MP).open_raise.len();
        let co = seat(Position::CO).open_raise.len();
        let btn = seat(Position::BTN).open_raise.len();
        assert!(utg < mp && mp < co && co < btn);
    }

    #[test]
    fn big_blind_never_opens() {
        assert!(seat(Position::BB).open_raise.is_empty());
        assert!(!seat(Position::BB).call.is_empty());
    }

    #[test]
    fn utg_open_is_fourteen_hands() {
        assert_eq!(seat(Position::UTG).open_raise.len(), 14);
    }

    #[test]
    fn every_table_entry_parses() {
        assert!(!DEFAULT_LIMP.is_empty());
        assert_eq!(FOUR_BET.len(), 5);
        assert_eq!(ALL_IN.len(), 7);
        for position in Position::all() {
            let _ = seat(position);
        }
    }
}
