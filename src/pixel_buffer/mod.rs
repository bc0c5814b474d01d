use crate::error::{RaycastError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub type Rgb = [u8; 3];

/// Row-major grid of RGB pixels, `height` rows of `width` cells.
#[derive(Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<Rgb>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn ppm_header(&self) -> String {
        format!("P6\n{} {}\n255\n", self.width, self.height)
    }

    /// Binary PPM: the three-line header followed by the raw RGB bytes.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.data.as_flattened())?;
        writer.flush()
    }

    pub fn encode_ppm(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.ppm_header().len() + self.data.len() * 3);
        // Writing into a Vec cannot fail.
        let _ = self.write_ppm(&mut bytes);
        bytes
    }

    /// Writes the image to `path`. `.ppm` files (and paths without an
    /// extension) use the built-in encoder; anything else goes through the
    /// `image` crate, which picks the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .map_or(true, |ext| ext.eq_ignore_ascii_case("ppm"));
        if is_ppm {
            // The whole image is encoded before the file is created.
            let bytes = self.encode_ppm();
            fs::write(path, bytes).map_err(|source| RaycastError::Io {
                path: path.display().to_string(),
                source,
            })?;
        } else {
            self.to_rgb_image().save(path)?;
        }
        log::info!("Image saved to {}", path.display());
        Ok(())
    }

    fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.get_pixel(x, y))
        })
    }
}
