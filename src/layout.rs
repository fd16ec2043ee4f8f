//! Fleet layout exchange format: strict text parser and writer.
//!
//! One line of nested lists in packed coordinates, for example
//! `[[(16, 1), (16, 2)], [(18, 4)]]`. The grammar is
//!
//! ```text
//! layout := '[' ship (',' ship)* ']'
//! ship   := '[' coord (',' coord)* ']'
//! coord  := '(' int ',' int ')'
//! ```
//!
//! Whitespace between tokens is ignored; anything else fails with the
//! byte position of the offending input. Parsing only produces the raw
//! cell lists — [`crate::Fleet::from_layout`] enforces the fleet
//! invariants afterwards.

use crate::config::{MAX_SHIP_LEN, NUM_SHIPS};
use crate::fleet::Fleet;
use crate::grid::Coord;
use core::fmt;
use core::str::FromStr;

/// Errors raised on malformed layout text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Input ended in the middle of a structure.
    UnexpectedEnd,
    /// A character that no grammar rule accepts.
    Unexpected { pos: usize, found: char },
    /// Missing digits or a value outside the coordinate range.
    Number { pos: usize },
    /// More ships than a fleet can hold.
    TooManyShips { pos: usize },
    /// More cells than a ship can hold.
    TooManyCells { pos: usize },
    /// Well-formed layout followed by garbage.
    Trailing { pos: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnexpectedEnd => write!(f, "unexpected end of layout"),
            LayoutError::Unexpected { pos, found } => {
                write!(f, "unexpected character {:?} at byte {}", found, pos)
            }
            LayoutError::Number { pos } => write!(f, "bad number at byte {}", pos),
            LayoutError::TooManyShips { pos } => {
                write!(f, "more than {} ships at byte {}", NUM_SHIPS, pos)
            }
            LayoutError::TooManyCells { pos } => {
                write!(f, "more than {} cells in a ship at byte {}", MAX_SHIP_LEN, pos)
            }
            LayoutError::Trailing { pos } => {
                write!(f, "trailing input at byte {}", pos)
            }
        }
    }
}

/// Cell list of one ship, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipCells {
    cells: [Coord; MAX_SHIP_LEN as usize],
    len: u8,
}

impl ShipCells {
    const EMPTY: ShipCells = ShipCells {
        cells: [Coord::new(0, 0); MAX_SHIP_LEN as usize],
        len: 0,
    };

    pub fn cells(&self) -> &[Coord] {
        &self.cells[..self.len as usize]
    }

    fn push(&mut self, c: Coord) -> bool {
        if self.len as usize >= MAX_SHIP_LEN as usize {
            return false;
        }
        self.cells[self.len as usize] = c;
        self.len += 1;
        true
    }
}

/// The exchange representation of a fleet: ordered ships, ordered cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetLayout {
    ships: [ShipCells; NUM_SHIPS],
    count: u8,
}

impl FleetLayout {
    /// Number of ships in the layout.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cell lists of the ships, in file order.
    pub fn ships(&self) -> impl Iterator<Item = &[Coord]> {
        self.ships[..self.count as usize].iter().map(|s| s.cells())
    }

    /// Parse layout text against the strict grammar.
    pub fn parse(input: &str) -> Result<Self, LayoutError> {
        let mut p = Parser {
            src: input.as_bytes(),
            pos: 0,
        };
        let layout = p.layout()?;
        p.skip_ws();
        if p.pos < p.src.len() {
            return Err(LayoutError::Trailing { pos: p.pos });
        }
        Ok(layout)
    }
}

impl FromStr for FleetLayout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FleetLayout::parse(s)
    }
}

impl fmt::Display for FleetLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, ship) in self.ships().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, cell) in ship.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", cell)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl From<&Fleet> for FleetLayout {
    fn from(fleet: &Fleet) -> Self {
        let mut layout = FleetLayout {
            ships: [ShipCells::EMPTY; NUM_SHIPS],
            count: 0,
        };
        for ship in fleet.ships() {
            let mut cells = ShipCells::EMPTY;
            for c in ship.cells() {
                let _ = cells.push(c);
            }
            layout.ships[layout.count as usize] = cells;
            layout.count += 1;
        }
        layout
    }
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while self
            .src
            .get(self.pos)
            .map(|b| b.is_ascii_whitespace())
            .unwrap_or(false)
        {
            self.pos += 1;
        }
    }

    /// Next non-whitespace byte without consuming it.
    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.get(self.pos).copied()
    }

    fn expect(&mut self, wanted: u8) -> Result<(), LayoutError> {
        match self.peek() {
            None => Err(LayoutError::UnexpectedEnd),
            Some(b) if b == wanted => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(LayoutError::Unexpected {
                pos: self.pos,
                found: b as char,
            }),
        }
    }

    /// One or more digits forming a coordinate component.
    fn number(&mut self) -> Result<u8, LayoutError> {
        let start = match self.peek() {
            None => return Err(LayoutError::UnexpectedEnd),
            Some(b) if b.is_ascii_digit() => self.pos,
            Some(b) => {
                return Err(LayoutError::Unexpected {
                    pos: self.pos,
                    found: b as char,
                })
            }
        };
        let mut value: u32 = 0;
        while let Some(b) = self.src.get(self.pos).copied() {
            if !b.is_ascii_digit() {
                break;
            }
            value = value * 10 + u32::from(b - b'0');
            if value > u32::from(u8::MAX) {
                return Err(LayoutError::Number { pos: start });
            }
            self.pos += 1;
        }
        Ok(value as u8)
    }

    fn coord(&mut self) -> Result<Coord, LayoutError> {
        self.expect(b'(')?;
        let col = self.number()?;
        self.expect(b',')?;
        let row = self.number()?;
        self.expect(b')')?;
        Ok(Coord::new(col, row))
    }

    fn ship(&mut self) -> Result<ShipCells, LayoutError> {
        self.expect(b'[')?;
        let mut cells = ShipCells::EMPTY;
        loop {
            let c = self.coord()?;
            if !cells.push(c) {
                return Err(LayoutError::TooManyCells { pos: self.pos });
            }
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(cells);
                }
                Some(b) => {
                    return Err(LayoutError::Unexpected {
                        pos: self.pos,
                        found: b as char,
                    })
                }
                None => return Err(LayoutError::UnexpectedEnd),
            }
        }
    }

    fn layout(&mut self) -> Result<FleetLayout, LayoutError> {
        self.expect(b'[')?;
        let mut out = FleetLayout {
            ships: [ShipCells::EMPTY; NUM_SHIPS],
            count: 0,
        };
        loop {
            let ship = self.ship()?;
            if out.count as usize >= NUM_SHIPS {
                return Err(LayoutError::TooManyShips { pos: self.pos });
            }
            out.ships[out.count as usize] = ship;
            out.count += 1;
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b) => {
                    return Err(LayoutError::Unexpected {
                        pos: self.pos,
                        found: b as char,
                    })
                }
                None => return Err(LayoutError::UnexpectedEnd),
            }
        }
    }
}
