use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::WindowCanvas;

use c8vm::{Error, FrameBuffer, Pixels, Result, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Colours for lit and unlit pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            foreground: Color::RGB(0xFF, 0xFF, 0xFF),
            background: Color::RGB(0x00, 0x00, 0x00),
        }
    }
}

/// # Display
/// The Chip-8 display is composed of 64x32 monochrome pixels.
/// Each frame is uploaded as a 64x32 RGB24 texture and stretched over the whole window, so one
/// Chip-8 pixel covers `scale`x`scale` window pixels.
///
/// Dropping the display destroys the renderer and then the window.
pub struct Display {
    canvas: WindowCanvas,
    palette: Palette,
}

fn host_error<E: ToString>(err: E) -> Error {
    Error::Host(err.to_string())
}

impl Display {
    /// Creates a new display object bound to an sdl2 context and clears it.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    /// * `palette` the colours to draw with
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32, palette: Palette) -> Result<Self> {
        let video_subsystem = sdl.video().map_err(host_error)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(host_error)?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(host_error)?;

        let mut display = Display { canvas, palette };
        display.clear();
        Ok(display)
    }

    /// Fills the window with the background colour
    pub fn clear(&mut self) {
        self.canvas.set_draw_color(self.palette.background);
        self.canvas.clear();
        self.canvas.present();
    }

    /// Formats a Chip-8 frame as concatenated rows of RGB24 pixels.
    ///
    /// # Arguments
    /// * `pixels` the on/off state of every pixel, indexed [y][x]
    /// * `palette` the colours lit and unlit pixels become
    fn frame_to_rgb24(pixels: &Pixels, palette: &Palette) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|lit| {
                let Color { r, g, b, .. } = if *lit {
                    palette.foreground
                } else {
                    palette.background
                };
                [r, g, b]
            })
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<()> {
        let rgb = Display::frame_to_rgb24(frame.pixels(), &self.palette);
        let row_len = DISPLAY_WIDTH * 3;

        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(host_error)?;

        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                for (y, row) in rgb.chunks(row_len).enumerate() {
                    buffer[y * pitch..y * pitch + row_len].copy_from_slice(row);
                }
            })
            .map_err(host_error)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(host_error)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_rgb24() {
        let mut frame = FrameBuffer::new();
        frame.xor_sprite(1, 0, &[0x80]);
        frame.xor_sprite(0, 1, &[0x80]);
        let rgb = Display::frame_to_rgb24(frame.pixels(), &Palette::default());

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(rgb, expected);
    }

    #[test]
    fn test_frame_to_rgb24_uses_palette() {
        let palette = Palette {
            foreground: Color::RGB(0x00, 0x7F, 0xFF),
            background: Color::RGB(0x10, 0x20, 0x30),
        };
        let mut frame = FrameBuffer::new();
        frame.xor_sprite(0, 0, &[0x80]);
        let rgb = Display::frame_to_rgb24(frame.pixels(), &palette);
        assert_eq!(rgb[0..6], [0x00, 0x7F, 0xFF, 0x10, 0x20, 0x30]);
    }
}
