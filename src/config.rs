pub const BOARD_SIZE: u8 = 10;
/// Horizontal shift of grid B in the shared coordinate space.
pub const SIDE_B_OFFSET: u8 = 15;
pub const NUM_SHIPS: usize = 10;
pub const MAX_SHIP_LEN: u8 = 4;
/// Required ship lengths, placed longest first.
pub const SHIP_LENGTHS: [u8; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
pub const TOTAL_SHIP_CELLS: usize = 20;
/// Rejection-sampling budget per ship during random placement.
pub const MAX_PLACE_ATTEMPTS: usize = 1000;

/// How many ships of the given length (1..=4) a fleet carries.
pub const fn ships_of_length(length: u8) -> u8 {
    5 - length
}
