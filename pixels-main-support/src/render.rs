use life_grid::Simulation;

pub const ALIVE_COLOR: [u8; 4] = [0xda, 0xd7, 0xa7, 0xff];
pub const DEAD_COLOR: [u8; 4] = [0xee, 0xee, 0xee, 0xff];
pub const BACKGROUND_RGBA: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

pub fn cell_color_rgba(alive: bool) -> [u8; 4] {
    if alive { ALIVE_COLOR } else { DEAD_COLOR }
}

/// Paints the board into an RGBA frame `frame_width` pixels wide. Tiles that
/// hang off the frame are clipped.
pub fn draw_frame(frame: &mut [u8], frame_width: u32, simulation: &Simulation) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND_RGBA);
    }
    if frame_width == 0 {
        return;
    }

    let tile = simulation.tile();
    for (loc, alive) in simulation.render_cells() {
        fill_tile(frame, frame_width, tile.tile_origin(loc), tile.size, cell_color_rgba(alive));
    }
}

fn fill_tile(frame: &mut [u8], frame_width: u32, origin: (u32, u32), size: u32, color: [u8; 4]) {
    let frame_width = frame_width as usize;
    let frame_height = frame.len() / 4 / frame_width;
    let (left, top) = (origin.0 as usize, origin.1 as usize);
    let right = (left + size as usize).min(frame_width);
    let bottom = (top + size as usize).min(frame_height);
    if left >= right {
        return;
    }

    for y in top..bottom {
        let row_start = 4 * (y * frame_width + left);
        let row_end = 4 * (y * frame_width + right);
        for pixel in frame[row_start..row_end].chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }
}
