use crate::refs::{ObjectReferences, RefType};
use crate::PDFError;
use image::{DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// A raster image (precinct crest, institutional logo) to embed in the document.
/// Images are re-encoded as flate-compressed RGB, with any alpha channel written
/// as a soft mask.
pub struct Image {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn from_bytes(data: &[u8]) -> Result<Image, PDFError> {
        let image = image::load_from_memory(data)?;
        Ok(Image::new(image))
    }

    pub fn new(image: DynamicImage) -> Image {
        let (width, height) = image.dimensions();
        Image {
            image,
            width,
            height,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Image, PDFError> {
        let data = std::fs::read(path)?;
        Image::from_bytes(&data)
    }

    /// Load an optional decoration. A letterhead that cannot be read must not stop
    /// the document from being issued, so failures are logged and the document
    /// proceeds without the image.
    pub fn load_or_skip<P: AsRef<Path>>(path: P) -> Option<Image> {
        let path = path.as_ref();
        match Image::load(path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("skipping image {}: {e}", path.display());
                None
            }
        }
    }

    /// Height over width
    pub fn aspect_ratio(&self) -> f32 {
        self.height as f32 / self.width.max(1) as f32
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(index));
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = self.image.color().has_alpha().then(|| {
            let alphas: Vec<u8> = self.image.pixels().map(|(_, _, p)| p.0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });
        let mask_id = mask.as_ref().map(|_| refs.gen(RefType::ImageMask(index)));

        let rgb = compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level);
        let mut xobject = writer.image_xobject(id, &rgb);
        xobject.filter(Filter::FlateDecode);
        xobject.width(self.width as i32);
        xobject.height(self.height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            xobject.s_mask(mask_id);
        }
        xobject.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, mask) {
            let mut s_mask = writer.image_xobject(mask_id, &mask);
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
