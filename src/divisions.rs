// src/divisions.rs
//
// Static team → division table. Divisions have been stable since 2002; relocated
// franchises keep their division under every code they have played under
// (OAK/LV, SD/LAC, STL/LA/LAR).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Conference {
    Afc,
    Nfc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    East,
    North,
    South,
    West,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Division {
    pub conference: Conference,
    pub region: Region,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = match self.conference {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        };
        let region = match self.region {
            Region::East => "East",
            Region::North => "North",
            Region::South => "South",
            Region::West => "West",
        };
        write!(f, "{conf} {region}")
    }
}

const fn div(conference: Conference, region: Region) -> Division {
    Division { conference, region }
}

const AFC_EAST: Division = div(Conference::Afc, Region::East);
const AFC_NORTH: Division = div(Conference::Afc, Region::North);
const AFC_SOUTH: Division = div(Conference::Afc, Region::South);
const AFC_WEST: Division = div(Conference::Afc, Region::West);
const NFC_EAST: Division = div(Conference::Nfc, Region::East);
const NFC_NORTH: Division = div(Conference::Nfc, Region::North);
const NFC_SOUTH: Division = div(Conference::Nfc, Region::South);
const NFC_WEST: Division = div(Conference::Nfc, Region::West);

/// nflverse team codes. WAS covers Redskins, Football Team and Commanders.
pub const DIVISIONS: &[(&str, Division)] = &[
    ("BUF", AFC_EAST), ("MIA", AFC_EAST), ("NE", AFC_EAST), ("NYJ", AFC_EAST),
    ("BAL", AFC_NORTH), ("CIN", AFC_NORTH), ("CLE", AFC_NORTH), ("PIT", AFC_NORTH),
    ("HOU", AFC_SOUTH), ("IND", AFC_SOUTH), ("JAX", AFC_SOUTH), ("TEN", AFC_SOUTH),
    ("DEN", AFC_WEST), ("KC", AFC_WEST), ("LAC", AFC_WEST), ("SD", AFC_WEST),
    ("LV", AFC_WEST), ("OAK", AFC_WEST),
    ("DAL", NFC_EAST), ("NYG", NFC_EAST), ("PHI", NFC_EAST), ("WAS", NFC_EAST),
    ("CHI", NFC_NORTH), ("DET", NFC_NORTH), ("GB", NFC_NORTH), ("MIN", NFC_NORTH),
    ("ATL", NFC_SOUTH), ("CAR", NFC_SOUTH), ("NO", NFC_SOUTH), ("TB", NFC_SOUTH),
    ("ARI", NFC_WEST), ("SEA", NFC_WEST), ("SF", NFC_WEST), ("LA", NFC_WEST),
    ("LAR", NFC_WEST), ("STL", NFC_WEST),
];

/// Division for a team code, or None when the code is not in the table.
pub fn division_of(team: &str) -> Option<Division> {
    DIVISIONS.iter().find(|(code, _)| *code == team).map(|(_, d)| *d)
}
