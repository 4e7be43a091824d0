/// A marker position on a square board.
///
/// Both components are zero-based and bounded by the board size. The derived
/// ordering is lexicographic on `(x, y)`, which is the order canonical-key
/// sorting uses.
///
/// # Examples
///
/// ```
/// use gridlace_core::Coord;
///
/// let a = Coord::new(0, 0);
/// let b = Coord::new(1, 2);
/// assert_eq!(a.square_distance(b), 5);
/// assert_eq!(b.to_string(), "(1,2)");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({x},{y})")]
pub struct Coord {
    /// Column, in `[0, size)`.
    pub x: u8,
    /// Row, in `[0, size)`.
    pub y: u8,
}

impl Coord {
    /// Creates a coordinate from its column and row.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the square of the Euclidean distance between `self` and `other`.
    #[must_use]
    #[inline]
    pub fn square_distance(self, other: Self) -> usize {
        let dx = usize::from(self.x.abs_diff(other.x));
        let dy = usize::from(self.y.abs_diff(other.y));
        dx * dx + dy * dy
    }
}
