use image::RgbImage;
use ndarray::Array4;

/// Converts an RGB image into a `(1, 3, height, width)` array scaled to [0, 1].
pub fn convert_rgb_image_to_owned_array(rgb_image: &RgbImage) -> Array4<f32> {
    let mut image_array = Array4::zeros((
        1,
        3,
        rgb_image.height() as usize,
        rgb_image.width() as usize,
    ));
    for (x, y, pixel) in rgb_image.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        let [r, g, b] = pixel.0;
        image_array[[0, 0, y, x]] = (r as f32) / 255.;
        image_array[[0, 1, y, x]] = (g as f32) / 255.;
        image_array[[0, 2, y, x]] = (b as f32) / 255.;
    }
    image_array
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn convert_rgb_image_to_owned_array_test() {
        let mut rgb_img = RgbImage::new(3, 2);
        rgb_img.put_pixel(0, 1, Rgb([255, 0, 0]));
        rgb_img.put_pixel(1, 1, Rgb([0, 255, 0]));
        rgb_img.put_pixel(2, 1, Rgb([0, 0, 255]));
        rgb_img.put_pixel(2, 0, Rgb([255, 255, 255]));
        let img = convert_rgb_image_to_owned_array(&rgb_img);

        // The dimensions encode (image, channel, row, column).
        assert_eq!(img.shape(), &[1, 3, 2, 3]);
        assert_eq!(
            (img[[0, 0, 0, 0]], img[[0, 1, 0, 0]], img[[0, 2, 0, 0]]),
            (0.0, 0.0, 0.0)
        );
        assert_eq!(
            (img[[0, 0, 0, 2]], img[[0, 1, 0, 2]], img[[0, 2, 0, 2]]),
            (1.0, 1.0, 1.0)
        );
        assert_eq!(
            (img[[0, 0, 1, 0]], img[[0, 1, 1, 0]], img[[0, 2, 1, 0]]),
            (1.0, 0.0, 0.0)
        );
        assert_eq!(
            (img[[0, 0, 1, 1]], img[[0, 1, 1, 1]], img[[0, 2, 1, 1]]),
            (0.0, 1.0, 0.0)
        );
        assert_eq!(
            (img[[0, 0, 1, 2]], img[[0, 1, 1, 2]], img[[0, 2, 1, 2]]),
            (0.0, 0.0, 1.0)
        );
    }
}
