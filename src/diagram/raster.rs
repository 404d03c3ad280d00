use super::sketch::{Line, Rgb, Scene, TextItem, BLACK};
use crate::error::{Error, Result};
use crate::render::ensure_output_dir;
use ab_glyph::{FontVec, PxScale};
use image::{ImageFormat, RgbImage};
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
    draw_text_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::fs;
use std::path::Path;

/// Fonts tried in order when none is configured.
pub const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn load_font(path: &Path) -> Result<FontVec> {
    let font_error = |message: String| Error::Font {
        path: path.to_path_buf(),
        message,
    };

    let bytes = fs::read(path).map_err(|e| font_error(e.to_string()))?;
    FontVec::try_from_vec(bytes).map_err(|e| font_error(e.to_string()))
}

/// Load the configured font, or the first usable fallback.
///
/// A configured font that fails to load is an error. Without a configured
/// font and with no fallback present, `Ok(None)` is returned and text is
/// skipped.
pub fn resolve_font(configured: Option<&Path>) -> Result<Option<FontVec>> {
    if let Some(path) = configured {
        return load_font(path).map(Some);
    }

    for candidate in FALLBACK_FONTS {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        match load_font(path) {
            Ok(font) => {
                tracing::debug!(font = %path.display(), "using fallback font");
                return Ok(Some(font));
            }
            Err(e) => tracing::debug!(error = %e, "skipping unusable font"),
        }
    }

    tracing::debug!(candidates = FALLBACK_FONTS.len(), "no fallback font found");
    Ok(None)
}

/// Paint a scene. Text items are skipped when `font` is `None`.
pub fn rasterize(scene: &Scene, font: Option<&FontVec>) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(scene.width, scene.height, pixel(scene.background));

    if let Some(font) = font {
        draw_text(&mut canvas, &scene.title, font);
    }

    for class_box in &scene.boxes {
        // both corners are inside the box
        let rect =
            Rect::at(class_box.x, class_box.y).of_size(class_box.width + 1, class_box.height + 1);
        draw_filled_rect_mut(&mut canvas, rect, pixel(class_box.fill));
        draw_hollow_rect_mut(&mut canvas, rect, pixel(BLACK));

        if let Some(font) = font {
            for text in &class_box.texts {
                draw_text(&mut canvas, text, font);
            }
        }
    }

    for line in &scene.lines {
        draw_line(&mut canvas, line);
    }

    canvas
}

/// Rasterize `scene` and save it as PNG, overwriting `output`.
pub fn render_sketch(scene: &Scene, font: Option<&FontVec>, output: &Path) -> Result<()> {
    ensure_output_dir(output)?;
    let canvas = rasterize(scene, font);
    canvas.save_with_format(output, ImageFormat::Png)?;
    tracing::info!(output = %output.display(), "wrote sketch");
    Ok(())
}

fn draw_text(image: &mut RgbImage, item: &TextItem, font: &FontVec) {
    draw_text_mut(
        image,
        pixel(BLACK),
        item.x,
        item.y,
        PxScale::from(item.size.px()),
        font,
        &item.text,
    );
}

fn draw_line(image: &mut RgbImage, line: &Line) {
    let (x0, y0) = line.from;
    let (x1, y1) = line.to;

    let (dx, dy) = ((x1 - x0) as f32, (y1 - y0) as f32);
    let length = (dx * dx + dy * dy).sqrt();
    let half = line.width as f32 / 2.0;
    let (nx, ny) = if length > 0.0 {
        (
            (-dy / length * half).round() as i32,
            (dx / length * half).round() as i32,
        )
    } else {
        (0, 0)
    };

    // too thin for a polygon
    if line.width <= 1 || (nx, ny) == (0, 0) {
        draw_line_segment_mut(
            image,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            pixel(BLACK),
        );
        return;
    }

    let corners = [
        Point::new(x0 + nx, y0 + ny),
        Point::new(x1 + nx, y1 + ny),
        Point::new(x1 - nx, y1 - ny),
        Point::new(x0 - nx, y0 - ny),
    ];
    draw_polygon_mut(image, &corners, pixel(BLACK));
}

fn pixel(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([color.0, color.1, color.2])
}
