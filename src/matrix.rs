// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Row,
    Col,
}

impl Orientation {
    // (row delta, col delta) for one step along this orientation.
    #[inline(always)]
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Row => (0, 1),
            Orientation::Col => (1, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Row => "row",
            Orientation::Col => "col",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Orientation {
    type Err = super::error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" | "right" | "across" => Ok(Orientation::Row),
            "col" | "down" => Ok(Orientation::Col),
            _ => Err(super::error::new(format!(
                "bad direction {:?} (try 'row' or 'col')",
                s
            ))),
        }
    }
}

#[derive(Clone)]
pub struct Strider {
    base: usize,
    step: usize,
    len: usize,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> usize {
        self.base + idx * self.step
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: usize,
    pub cols: usize,
}

impl Dim {
    #[inline(always)]
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
        }
    }

    #[inline(always)]
    pub fn across(&self, row: usize) -> Strider {
        Strider {
            base: row * self.cols,
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: usize) -> Strider {
        Strider {
            base: col,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, orientation: Orientation, lane: usize) -> Strider {
        match orientation {
            Orientation::Row => self.across(lane),
            Orientation::Col => self.down(lane),
        }
    }

    #[inline(always)]
    pub fn num_lanes(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Row => self.rows,
            Orientation::Col => self.cols,
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline(always)]
    pub fn row_col(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Signed coordinates are checked before indexing.
    #[inline(always)]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    // (lane, position along the lane) for a cell, as seen by `orientation`.
    #[inline(always)]
    pub fn lane_and_idx(&self, orientation: Orientation, row: usize, col: usize) -> (usize, usize) {
        match orientation {
            Orientation::Row => (row, col),
            Orientation::Col => (col, row),
        }
    }

    #[inline(always)]
    pub fn row_col_in_lane(
        &self,
        orientation: Orientation,
        lane: usize,
        idx: usize,
    ) -> (usize, usize) {
        match orientation {
            Orientation::Row => (lane, idx),
            Orientation::Col => (idx, lane),
        }
    }
}
