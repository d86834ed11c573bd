use minifb::{Key, Window, WindowOptions};
use thiserror::Error;

use crate::engine::figure::Figure;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to open display window: {0}")]
    Open(#[source] minifb::Error),

    #[error("Failed to update display window: {0}")]
    Update(#[source] minifb::Error),
}

/// Pack RGB triples into the `0RGB` words the window expects.
pub fn to_window_buffer(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32)
        .collect()
}

/// Show `figure` in a window and block until the user closes it (or presses Escape).
pub fn show_figure(figure: &Figure, title: &str) -> Result<(), DisplayError> {
    let width = figure.width as usize;
    let height = figure.height as usize;
    let buffer = to_window_buffer(&figure.pixels);

    let mut window =
        Window::new(title, width, height, WindowOptions::default()).map_err(DisplayError::Open)?;
    window.set_target_fps(30);

    log::info!("Showing {}x{} figure, close the window to exit", width, height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(DisplayError::Update)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_window_buffer_packs_rgb() {
        let rgb = [0xff, 0x00, 0x00, 0x12, 0x34, 0x56, 0xff, 0xff, 0xff];

        let buffer = to_window_buffer(&rgb);

        assert_eq!(buffer, vec![0x00ff0000, 0x00123456, 0x00ffffff]);
    }
}
