use crate::layout::{ExportSettings, PagePlacement};
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const IMAGE_RESOURCE_NAME: &str = "Im0";

#[derive(Debug)]
pub enum ExportError {
    Decode { path: PathBuf, message: String },
    Pdf(String),
    Io { path: PathBuf, message: String },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode { path, message } => {
                write!(f, "failed to read image {}: {message}", path.display())
            }
            Self::Pdf(msg) => write!(f, "pdf error: {msg}"),
            Self::Io { path, message } => {
                write!(f, "failed to write {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub page_count: usize,
}

/// Writes one page per image into a single PDF at `output_path`.
///
/// Every image is decoded and the whole document is assembled before the
/// output file is touched, so a bad input leaves no partial PDF behind and a
/// failed write leaves any earlier file untouched.
pub fn save_images_as_pdf(
    image_paths: &[PathBuf],
    output_path: &Path,
    settings: &ExportSettings,
) -> Result<ExportSummary, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        let image = load_rgb_on_white(path)?;
        let page_id = add_image_page(&mut doc, pages_id, &image, settings)?;
        log::debug!(
            "Added page {} for {} ({}×{})",
            page_ids.len() + 1,
            path.display(),
            image.width(),
            image.height()
        );
        page_ids.push(page_id);
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => page_ids.len() as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    write_atomically(&mut doc, output_path)?;

    Ok(ExportSummary {
        output_path: output_path.to_path_buf(),
        page_count: page_ids.len(),
    })
}

/// Saves into a temporary file next to `output_path` and renames it into
/// place, so an earlier file at that path is only replaced by a complete PDF.
fn write_atomically(doc: &mut Document, output_path: &Path) -> Result<(), ExportError> {
    let io_error = |message: String| ExportError::Io {
        path: output_path.to_path_buf(),
        message,
    };

    let dir = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| io_error(e.to_string()))?;

    doc.save_to(&mut temp).map_err(|e| io_error(e.to_string()))?;
    temp.persist(output_path)
        .map_err(|e| io_error(e.error.to_string()))?;
    Ok(())
}

/// Decodes an image and flattens any transparency onto white, matching the
/// page background it is drawn over.
fn load_rgb_on_white(path: &Path) -> Result<RgbImage, ExportError> {
    let rgba = image::open(path)
        .map_err(|e| ExportError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let alpha = src[3] as u32;
        for c in 0..3 {
            dst[c] = ((src[c] as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        }
    }
    Ok(rgb)
}

fn add_image_page(
    doc: &mut Document,
    pages_id: ObjectId,
    image: &RgbImage,
    settings: &ExportSettings,
) -> Result<ObjectId, ExportError> {
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width() as i64,
            "Height" => image.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        image.as_raw().clone(),
    ));

    let placement = PagePlacement::fit(image.width(), image.height(), settings);
    log::trace!(
        "Placing image at ({:.1}, {:.1}), scale {:.3}",
        placement.x,
        placement.y,
        placement.scale
    );
    let content = page_content(&placement, settings);
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content
            .encode()
            .map_err(|e| ExportError::Pdf(format!("Failed to encode page content: {e}")))?,
    ));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            IMAGE_RESOURCE_NAME => image_id,
        },
    });

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(settings.page_width as f32),
            Object::Real(settings.page_height as f32),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    }))
}

/// White full-page fill, then the image scaled into its placement rectangle.
fn page_content(placement: &PagePlacement, settings: &ExportSettings) -> Content {
    let real = |v: f64| Object::Real(v as f32);
    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new("rg", vec![real(1.0), real(1.0), real(1.0)]),
            Operation::new(
                "re",
                vec![
                    real(0.0),
                    real(0.0),
                    real(settings.page_width),
                    real(settings.page_height),
                ],
            ),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(placement.width),
                    real(0.0),
                    real(0.0),
                    real(placement.height),
                    real(placement.x),
                    real(placement.y),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    }
}
