// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stroke rasterization — incremental line stepping and the filled-disk brush
// stamped at every touch sample.

use super::buffer::BufferAccessor;
use super::image::RasterImage;
use super::intensity::Intensity;

impl<T: Intensity, B: BufferAccessor<T>> RasterImage<T, B> {
    /// Write `INK` at `(x, y)` if it lies on the raster; otherwise do nothing.
    pub fn put_pixel(&mut self, x: i32, y: i32) {
        self.put_pixel_wide(i64::from(x), i64::from(y));
    }

    fn put_pixel_wide(&mut self, x: i64, y: i64) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        let (width, height) = self.dimensions();
        if x < width && y < height {
            self[(x, y)] = T::INK;
        }
    }

    /// Rasterize the segment from `(x0, y0)` towards `(x1, y1)`.
    ///
    /// Integer Bresenham stepping along x only: `x` runs from `x0` while
    /// `x < x1`, so the end column is never drawn and nothing is drawn unless
    /// `x1 > x0`. `y` can only step downwards (increase). Vertical and
    /// right-to-left segments are not supported; the brush only ever draws
    /// left-to-right horizontal chords, and existing classifier weights were
    /// trained on exactly this output. Off-raster pixels are clipped.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.draw_line_wide(
            i64::from(x0),
            i64::from(y0),
            i64::from(x1),
            i64::from(y1),
        );
    }

    // Touch samples may sit anywhere in i32, so the error terms and the
    // brush chord ends are carried in i64.
    fn draw_line_wide(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let dx = x1 - x0;
        let dy = y1 - y0;

        let mut x = x0;
        let mut y = y0;
        let mut p = 2 * dy - dx;

        while x < x1 {
            self.put_pixel_wide(x, y);
            if p >= 0 {
                y += 1;
                p += 2 * dy - 2 * dx;
            } else {
                p += 2 * dy;
            }
            x += 1;
        }
    }

    /// Stamp a filled disk centred on `(x0, y0)`.
    ///
    /// Midpoint-circle stepping yields, per octant pair, the half-widths of
    /// four horizontal chords mirrored about both axes; each chord is filled
    /// with [`draw_line`](Self::draw_line). Because chords exclude their right
    /// end, the disk is one pixel narrower on the right than on the left.
    pub fn draw_circle(&mut self, x0: i32, y0: i32, radius: i32) {
        let (x0, y0, radius) = (i64::from(x0), i64::from(y0), i64::from(radius));
        let mut x = radius - 1;
        let mut y = 0;
        let mut dx = 1;
        let mut dy = 1;
        let mut err = dx - (radius << 1);

        while x >= y {
            self.draw_line_wide(x0 - x, y0 + y, x0 + x, y0 + y);
            self.draw_line_wide(x0 - y, y0 + x, x0 + y, y0 + x);
            self.draw_line_wide(x0 - x, y0 - y, x0 + x, y0 - y);
            self.draw_line_wide(x0 - y, y0 - x, x0 + y, y0 - x);

            if err <= 0 {
                y += 1;
                err += dy;
                dy += 2;
            } else {
                x -= 1;
                dx += 2;
                err += dx - (radius << 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::raster::RasterImage;

    fn blank(width: usize, height: usize) -> RasterImage<u8> {
        let mut img = RasterImage::new(width, height).unwrap();
        img.clear();
        img
    }

    #[test]
    fn horizontal_line_excludes_end() {
        let mut img = blank(10, 10);
        img.draw_line(0, 0, 5, 0);

        for x in 0..5 {
            assert_eq!(img.pixel(x, 0), 255, "pixel ({x}, 0) should be inked");
        }
        assert_eq!(img.pixel(5, 0), 0);
        assert_eq!(img.foreground_count(), 5);
    }

    #[test]
    fn shallow_slope_steps_down() {
        let mut img = blank(10, 10);
        img.draw_line(0, 0, 4, 2);

        // dx=4, dy=2: p starts at 0, so y advances on every other column.
        assert_eq!(img.pixel(0, 0), 255);
        assert_eq!(img.pixel(1, 1), 255);
        assert_eq!(img.pixel(2, 1), 255);
        assert_eq!(img.pixel(3, 2), 255);
        assert_eq!(img.foreground_count(), 4);
    }

    #[test]
    fn reversed_or_vertical_segment_draws_nothing() {
        let mut img = blank(10, 10);
        img.draw_line(5, 0, 1, 0);
        img.draw_line(3, 0, 3, 8);
        assert_eq!(img.foreground_count(), 0);
    }

    #[test]
    fn line_is_clipped_to_raster() {
        let mut img = blank(4, 4);
        img.draw_line(-3, 2, 8, 2);
        assert_eq!(img.foreground_count(), 4);
        for x in 0..4 {
            assert_eq!(img.pixel(x, 2), 255);
        }
    }

    #[test]
    fn circle_is_filled() {
        let mut img = blank(40, 40);
        img.draw_circle(20, 20, 7);

        assert_eq!(img.pixel(20, 20), 255);
        // Left edge of the centre chord is x0 - (radius - 1).
        assert_eq!(img.pixel(14, 20), 255);
        assert_eq!(img.pixel(13, 20), 0);
        // Right edge stops one short of x0 + (radius - 1).
        assert_eq!(img.pixel(25, 20), 255);
        assert_eq!(img.pixel(26, 20), 0);
        // Nothing outside the radius.
        assert_eq!(img.pixel(20, 28), 0);
        assert_eq!(img.pixel(20, 12), 0);
        // Interior points off the axes are inked too (not a hollow ring).
        assert_eq!(img.pixel(18, 18), 255);
        assert_eq!(img.pixel(22, 23), 255);
    }

    #[test]
    fn circle_near_corner_is_clipped() {
        let mut img = blank(10, 10);
        img.draw_circle(0, 0, 4);
        assert_eq!(img.pixel(0, 0), 255);
        assert!(img.foreground_count() > 0);
        assert_eq!(img.pixel(9, 9), 0);
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut img = blank(10, 10);
        img.draw_circle(5, 5, 0);
        assert_eq!(img.foreground_count(), 0);
    }

    #[test]
    fn extreme_touch_coordinates_are_clipped() {
        let mut img = blank(240, 240);
        img.draw_circle(i32::MAX - 3, 10, 7);
        img.draw_circle(i32::MIN + 2, i32::MAX, 7);
        img.draw_line(i32::MIN, 5, i32::MIN + 4, i32::MAX);
        assert_eq!(img.foreground_count(), 0);

        img.draw_circle(239, i32::MAX - 1, 7);
        assert_eq!(img.foreground_count(), 0);
    }

    #[test]
    fn lines_near_i32_limits_do_not_overflow() {
        let mut img = blank(4, 4);
        img.draw_line(i32::MAX - 1, 0, i32::MAX, 0);
        img.put_pixel(i32::MIN, i32::MAX);
        assert_eq!(img.foreground_count(), 0);
    }
}
