use crate::grid::{Grid, GridSize, Loc};

pub const TILE_SIZE: u32 = 7;
pub const TILE_MARGIN: u32 = 2;
pub const TILE_OFFSET: u32 = 5;

/// Fixed on-screen layout of the board: square tiles separated by a margin,
/// the whole board shifted by an offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGeometry {
    pub size: u32,
    pub margin: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl TileGeometry {
    pub fn pitch(&self) -> u32 {
        self.size + self.margin
    }

    /// Drawable area left in a window once the offset is taken off each side.
    pub fn canvas_size(&self, window_width: u32, window_height: u32) -> (u32, u32) {
        (
            window_width.saturating_sub(2 * self.offset_x),
            window_height.saturating_sub(2 * self.offset_y),
        )
    }

    /// How many whole tiles fit on a canvas, less one on each axis.
    pub fn grid_size(&self, canvas_width: u32, canvas_height: u32) -> GridSize {
        let pitch = self.pitch().max(1);
        GridSize::new(
            (canvas_width / pitch).saturating_sub(1),
            (canvas_height / pitch).saturating_sub(1),
        )
    }

    /// Grid size for a window of the given pixel size.
    pub fn grid_size_for_window(&self, window_width: u32, window_height: u32) -> GridSize {
        let (canvas_width, canvas_height) = self.canvas_size(window_width, window_height);
        self.grid_size(canvas_width, canvas_height)
    }

    /// Top-left pixel of the tile at `loc`.
    pub fn tile_origin(&self, loc: Loc) -> (u32, u32) {
        (
            loc.col * self.pitch() + self.offset_x,
            loc.row * self.pitch() + self.offset_y,
        )
    }

    /// The cell whose tile contains the point, edges included. Points in a
    /// margin or off the board hit nothing.
    pub fn cell_at_point(&self, grid: &Grid, x: f64, y: f64) -> Option<Loc> {
        let col = self.tile_on_axis(x, self.offset_x, grid.width())?;
        let row = self.tile_on_axis(y, self.offset_y, grid.height())?;
        Some(Loc::new(row, col))
    }

    fn tile_on_axis(&self, pos: f64, offset: u32, num_tiles: u32) -> Option<u32> {
        let pitch = self.pitch() as f64;
        let from_origin = pos - offset as f64;
        if !from_origin.is_finite() || from_origin < 0.0 || pitch <= 0.0 {
            return None;
        }
        let tile = (from_origin / pitch).floor();
        let within = from_origin - tile * pitch;
        if tile >= num_tiles as f64 || within > self.size as f64 {
            return None;
        }
        Some(tile as u32)
    }
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self {
            size: TILE_SIZE,
            margin: TILE_MARGIN,
            offset_x: TILE_OFFSET,
            offset_y: TILE_OFFSET,
        }
    }
}
