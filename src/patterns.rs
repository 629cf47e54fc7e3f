use crate::CellState;

/// Square sample pattern; `cells` lists rows bottom-to-top, `1` is alive.
pub struct Pattern {
    pub name: &'static str,
    pub edge: usize,
    pub cells: &'static [u8],
}

impl Pattern {
    pub fn cells(&self) -> Vec<CellState> {
        self.cells.iter().map(|&c| CellState::from(c != 0)).collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        edge: 2,
        cells: &[
            1, 1,
            1, 1,
        ],
    },
    Pattern {
        name: "Blinker",
        edge: 3,
        cells: &[
            0, 0, 0,
            1, 1, 1,
            0, 0, 0,
        ],
    },
    Pattern {
        name: "Glider",
        edge: 3,
        cells: &[
            1, 1, 1,
            0, 0, 1,
            0, 1, 0,
        ],
    },
    Pattern {
        name: "R-pentomino",
        edge: 3,
        cells: &[
            0, 1, 0,
            1, 1, 0,
            0, 1, 1,
        ],
    },
    Pattern {
        name: "Toad",
        edge: 4,
        cells: &[
            0, 0, 0, 0,
            1, 1, 1, 0,
            0, 1, 1, 1,
            0, 0, 0, 0,
        ],
    },
    Pattern {
        name: "Beacon",
        edge: 4,
        cells: &[
            0, 0, 1, 1,
            0, 0, 1, 1,
            1, 1, 0, 0,
            1, 1, 0, 0,
        ],
    },
];
