/// The width of a single bus access.
///
/// The discriminant of each width is its size in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Size {
    Byte = 1,
    Half = 2,
    Word = 4,
    Dual = 8,
}

impl Size {
    pub fn bytes(self) -> u32 {
        self as u32
    }
}
