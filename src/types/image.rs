use crate::layout::{PREVIEW_MAX_SIZE, fit_within};
use egui::{ColorImage, TextureHandle};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// A downscaled copy of one selected image, uploaded as a texture. The
/// preview window that shows it owns it, so the pixels live exactly as long
/// as the window does.
pub struct PreviewImage {
    pub path: PathBuf,
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
}

impl PreviewImage {
    pub fn load(path: &Path, ctx: &egui::Context) -> Result<PreviewImage, String> {
        let rgba = decode_preview(path, PREVIEW_MAX_SIZE)?;
        let size = [rgba.width() as usize, rgba.height() as usize];

        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture(
            format!("preview:{}", path.display()),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        Ok(PreviewImage {
            path: path.to_path_buf(),
            texture,
            width: size[0] as u32,
            height: size[1] as u32,
        })
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}

/// Decodes `path` and shrinks it to fit a `max_size` square. Never upscales.
pub fn decode_preview(path: &Path, max_size: u32) -> Result<RgbaImage, String> {
    let img = image::open(path).map_err(|e| format!("Image loading error: {}", e))?;
    let (width, height) = fit_within(img.width(), img.height(), max_size, max_size);
    if (width, height) == (img.width(), img.height()) {
        return Ok(img.to_rgba8());
    }
    Ok(img.resize_exact(width, height, FilterType::Lanczos3).to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_png(dir: &tempfile::TempDir, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(format!("{width}x{height}.png"));
        RgbImage::from_pixel(width, height, Rgb([0, 128, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_large_image_fits_preview_box() {
        let dir = tempfile::tempdir().unwrap();
        let preview = decode_preview(&write_png(&dir, 1000, 400), PREVIEW_MAX_SIZE).unwrap();
        assert_eq!(preview.dimensions(), (500, 200));
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let dir = tempfile::tempdir().unwrap();
        let preview = decode_preview(&write_png(&dir, 64, 48), PREVIEW_MAX_SIZE).unwrap();
        assert_eq!(preview.dimensions(), (64, 48));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(decode_preview(&dir.path().join("gone.png"), PREVIEW_MAX_SIZE).is_err());
    }
}
