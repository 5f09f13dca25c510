use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Fill used for the letterbox border, the gray YOLO models are trained with.
pub const LETTERBOX_FILL: Rgb<u8> = Rgb([114, 114, 114]);

/// An image resized into a square network input, plus the factor used to get there.
pub struct Letterbox {
    pub image: RgbImage,
    /// `resized / original`; divide model coordinates by this to get original pixels.
    pub ratio: f32,
}

/// Pads an rgb8 image by adding pixels to the right and bottom of the image.
pub fn pad_right_bottom_img_rbg8(
    original_image: &RgbImage,
    new_width: u32,
    new_height: u32,
    fill: Rgb<u8>,
) -> RgbImage {
    let mut padded_image: RgbImage = RgbImage::from_pixel(new_width, new_height, fill);
    imageops::replace(&mut padded_image, original_image, 0, 0);
    padded_image
}

/// Resizes the longer side to `size` keeping aspect ratio, then pads right and bottom.
///
/// Padding only on the right and bottom keeps the origin fixed, so undoing the transform is a
/// single division by `ratio`.
pub fn letterbox(original_image: &RgbImage, size: u32) -> Letterbox {
    let (width, height) = original_image.dimensions();
    let ratio = (size as f32 / width as f32).min(size as f32 / height as f32);
    let new_width = ((width as f32 * ratio).round() as u32).clamp(1, size);
    let new_height = ((height as f32 * ratio).round() as u32).clamp(1, size);
    let resized = if (new_width, new_height) == (width, height) {
        original_image.clone()
    } else {
        imageops::resize(original_image, new_width, new_height, FilterType::Triangle)
    };
    Letterbox {
        image: pad_right_bottom_img_rbg8(&resized, size, size, LETTERBOX_FILL),
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_keeps_pixels_and_fills_border() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        let padded = pad_right_bottom_img_rbg8(&img, 4, 3, LETTERBOX_FILL);
        assert_eq!(padded.dimensions(), (4, 3));
        assert_eq!(padded.get_pixel(1, 1), &Rgb([1, 2, 3]));
        assert_eq!(padded.get_pixel(3, 0), &LETTERBOX_FILL);
        assert_eq!(padded.get_pixel(0, 2), &LETTERBOX_FILL);
    }

    #[test]
    fn letterbox_wide_image() {
        let img = RgbImage::from_pixel(1280, 640, Rgb([200, 200, 200]));
        let boxed = letterbox(&img, 640);
        assert_eq!(boxed.image.dimensions(), (640, 640));
        assert_eq!(boxed.ratio, 0.5);
        assert_eq!(boxed.image.get_pixel(10, 10), &Rgb([200, 200, 200]));
        assert_eq!(boxed.image.get_pixel(10, 639), &LETTERBOX_FILL);
    }

    #[test]
    fn letterbox_small_image_is_upscaled() {
        let img = RgbImage::from_pixel(160, 320, Rgb([9, 9, 9]));
        let boxed = letterbox(&img, 640);
        assert_eq!(boxed.ratio, 2.0);
        assert_eq!(boxed.image.get_pixel(300, 600), &Rgb([9, 9, 9]));
        assert_eq!(boxed.image.get_pixel(400, 10), &LETTERBOX_FILL);
    }
}
