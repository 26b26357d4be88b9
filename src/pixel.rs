/// One 24-bit pixel: red, green, blue. No alpha.
pub type Pixel = rgb::RGB8;

/// Opaque black, the fill for freshly allocated grids.
pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

/// A width x height grid of [`Pixel`]s with a top-left origin.
///
/// The codec reads and writes images only through this trait, so any
/// caller-owned container can be saved from or loaded into. Coordinates
/// passed in are always in `0..width` and `0..height`.
pub trait PixelGrid: Sized {
    /// Allocate a `width` x `height` grid with every pixel set to `fill`.
    fn new_filled(width: u32, height: u32, fill: Pixel) -> Self;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel(&self, x: u32, y: u32) -> Pixel;

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel);
}
