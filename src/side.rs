/// The two competing players. Light starts on rows 0 and 1 and advances
/// toward higher rows; Dark mirrors from rows 7 and 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Direction this side's pawns advance along the row axis.
    pub const fn forward_direction(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// The rank this side's power pieces start on.
    pub const fn back_rank(self) -> i8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    /// The rank this side's pawns start on.
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => 6,
        }
    }

    /// The far rank where this side's pawns promote.
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Side::Light => 7,
            Side::Dark => 0,
        }
    }
}
