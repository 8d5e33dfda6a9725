/// US Letter in PDF points.
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;
pub const PAGE_MARGIN: f64 = 36.0;

/// Bounding box of the preview window, in pixels.
pub const PREVIEW_MAX_SIZE: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportSettings {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            margin: PAGE_MARGIN,
        }
    }
}

impl ExportSettings {
    pub fn available_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    pub fn available_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }
}

/// Where an image lands on a page. Origin is the bottom-left corner, as in PDF.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePlacement {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PagePlacement {
    /// Uniformly scales a `width`×`height` image to fill the content area and
    /// centers it on the page. Small images are scaled up.
    pub fn fit(width: u32, height: u32, settings: &ExportSettings) -> PagePlacement {
        let (w, h) = (width as f64, height as f64);
        let scale = (settings.available_width() / w).min(settings.available_height() / h);

        let drawn_width = w * scale;
        let drawn_height = h * scale;

        PagePlacement {
            scale,
            x: (settings.page_width - drawn_width) / 2.0,
            y: (settings.page_height - drawn_height) / 2.0,
            width: drawn_width,
            height: drawn_height,
        }
    }
}

/// Size of an image shrunk to fit inside `max_width`×`max_height`.
/// Images already inside the box keep their size.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let scale = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);

    let fitted_width = ((width as f64 * scale).round() as u32).max(1);
    let fitted_height = ((height as f64 * scale).round() as u32).max(1);
    (fitted_width, fitted_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_exact_fit_has_unit_scale() {
        let placement = PagePlacement::fit(540, 720, &ExportSettings::default());
        assert_close(placement.scale, 1.0);
        assert_close(placement.x, 36.0);
        assert_close(placement.y, 36.0);
        assert_close(placement.width, 540.0);
        assert_close(placement.height, 720.0);
    }

    #[test]
    fn test_large_image_is_scaled_down() {
        let placement = PagePlacement::fit(1080, 1440, &ExportSettings::default());
        assert_close(placement.scale, 0.5);
        assert_close(placement.x, 36.0);
        assert_close(placement.y, 36.0);
    }

    #[test]
    fn test_small_square_image_is_scaled_up_and_centered() {
        let placement = PagePlacement::fit(100, 100, &ExportSettings::default());
        assert_close(placement.scale, 5.4);
        assert_close(placement.width, 540.0);
        assert_close(placement.height, 540.0);
        assert_close(placement.x, 36.0);
        assert_close(placement.y, 126.0);
    }

    #[test]
    fn test_wide_image_is_width_limited() {
        let placement = PagePlacement::fit(2000, 500, &ExportSettings::default());
        assert_close(placement.scale, 0.27);
        assert_close(placement.width, 540.0);
        assert_close(placement.height, 135.0);
        assert_close(placement.y, (792.0 - 135.0) / 2.0);
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(120, 80, 500, 500), (120, 80));
        assert_eq!(fit_within(500, 500, 500, 500), (500, 500));
    }

    #[test]
    fn test_fit_within_keeps_aspect_ratio() {
        assert_eq!(fit_within(1000, 500, 500, 500), (500, 250));
        assert_eq!(fit_within(600, 1200, 500, 500), (250, 500));
    }
}
