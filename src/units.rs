#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallsCount(pub usize);

/// Thickness of a wall, along the axis the wall blocks.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct WallThickness(pub f32);
/// Height of a wall above the ground region.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct WallHeight(pub f32);
