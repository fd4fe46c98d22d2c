use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::filter::gaussian_blur_f32;

const BLUR_SIGMA: f32 = 1.1;
const THRESHOLD_WINDOW: u32 = 11;
const THRESHOLD_BIAS: i32 = 4;

/// ImageProcessor turns a raw document photo into a binarized image that the
/// OCR engine can read reliably.
pub struct ImageProcessor;

impl ImageProcessor {
    /// Fixed preprocessing pipeline: luminance, light blur, local threshold.
    /// The output keeps the input dimensions and contains only 0 and 255.
    pub fn preprocess(image: &DynamicImage) -> GrayImage {
        let gray = image.to_luma8();
        let blurred = gaussian_blur_f32(&gray, BLUR_SIGMA);
        Self::adaptive_mean_threshold(&blurred, THRESHOLD_WINDOW, THRESHOLD_BIAS)
    }

    /// Mean-based local thresholding. Each pixel is compared against the mean
    /// of its surrounding window minus a small bias, which keeps glyph strokes
    /// legible under uneven card lighting.
    fn adaptive_mean_threshold(gray: &GrayImage, window_size: u32, bias: i32) -> GrayImage {
        let (width, height) = gray.dimensions();
        let mut result = ImageBuffer::new(width, height);

        // Precompute row prefix sums for O(1) window sum lookups
        let mut row_sums = vec![vec![0u32; width as usize + 1]; height as usize];
        for y in 0..height as usize {
            for x in 0..width as usize {
                row_sums[y][x + 1] =
                    row_sums[y][x] + gray.get_pixel(x as u32, y as u32).0[0] as u32;
            }
        }

        for y in 0..height {
            for x in 0..width {
                let start_x = x.saturating_sub(window_size / 2) as usize;
                let end_x = std::cmp::min(x + window_size / 2, width - 1) as usize;
                let start_y = y.saturating_sub(window_size / 2) as usize;
                let end_y = std::cmp::min(y + window_size / 2, height - 1) as usize;

                let mut sum = 0u32;
                let mut count = 0u32;
                for ny in start_y..=end_y {
                    sum += row_sums[ny][end_x + 1] - row_sums[ny][start_x];
                    count += (end_x - start_x + 1) as u32;
                }

                let mean = sum / count;
                let threshold = std::cmp::max(mean as i32 - bias, 0) as u8;
                let value = if gray.get_pixel(x, y).0[0] > threshold { 255 } else { 0 };
                result.put_pixel(x, y, Luma([value]));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn preprocess_keeps_input_dimensions() {
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([120, 80, 200])));
        let processed = ImageProcessor::preprocess(&input);
        assert_eq!(processed.dimensions(), (64, 48));
    }

    #[test]
    fn preprocess_output_is_strictly_binary() {
        let mut input = RgbImage::new(32, 32);
        for (x, y, pixel) in input.enumerate_pixels_mut() {
            let v = ((x * 8 + y * 3) % 256) as u8;
            *pixel = Rgb([v, v, v]);
        }
        let processed = ImageProcessor::preprocess(&DynamicImage::ImageRgb8(input));
        assert!(processed.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn uniform_input_thresholds_to_white() {
        // A flat card background sits above its own window mean minus the bias
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([128, 128, 128])));
        let processed = ImageProcessor::preprocess(&input);
        assert!(processed.pixels().all(|p| p.0[0] == 255));
    }
}
