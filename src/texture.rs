//! 2D textures decoded with `image` and uploaded with `REPEAT` wrap, `LINEAR`
//! filters and a generated mipmap chain.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext as _;

use crate::{Error, Result};

/// Decoded 8-bit pixels, rows stored top to bottom as given to `glTexImage2D`.
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    /// 1 (R), 2 (RG), 3 (RGB) or 4 (RGBA)
    pub num_channel: u8,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Decodes `path`, keeping the channel count found in the file.
    /// With `flip_vertically` the last row of the file becomes the first row of
    /// the texture, matching OpenGL's bottom-left texture origin.
    pub fn load(path: impl AsRef<Path>, flip_vertically: bool) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| Error::TextureLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let img = if flip_vertically { img.flipv() } else { img };
        let image = Self::from_dynamic(img);
        log::info!(
            "loaded {} ({}x{}, {} channels)",
            path.display(),
            image.width,
            image.height,
            image.num_channel
        );
        Ok(image)
    }

    fn from_dynamic(img: image::DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (num_channel, pixels) = match img.color().channel_count() {
            1 => (1, img.into_luma8().into_raw()),
            2 => (2, img.into_luma_alpha8().into_raw()),
            3 => (3, img.into_rgb8().into_raw()),
            _ => (4, img.into_rgba8().into_raw()),
        };
        TextureImage {
            width,
            height,
            num_channel,
            pixels,
        }
    }

    /// GL pixel format matching the channel count.
    pub fn format(&self) -> u32 {
        match self.num_channel {
            1 => glow::RED,
            2 => glow::RG,
            3 => glow::RGB,
            _ => glow::RGBA,
        }
    }
}

pub struct Texture {
    gl: Arc<glow::Context>,
    texture: glow::Texture,
}

impl Texture {
    pub fn new(gl: &Arc<glow::Context>, image: &TextureImage) -> Result<Self> {
        let texture = unsafe { gl.create_texture() }.map_err(|reason| Error::GlObject {
            what: "texture",
            reason,
        })?;
        let format = image.format();
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            // rows of RGB/R images are not 4-byte aligned in general
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                image.width as i32,
                image.height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(&image.pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);
        }
        Ok(Texture {
            gl: gl.clone(),
            texture,
        })
    }

    /// [`TextureImage::load`] followed by [`Texture::new`].
    pub fn from_file(
        gl: &Arc<glow::Context>,
        path: impl AsRef<Path>,
        flip_vertically: bool,
    ) -> Result<Self> {
        let image = TextureImage::load(path, flip_vertically)?;
        Self::new(gl, &image)
    }

    /// Binds to texture unit `unit` (`GL_TEXTURE0 + unit`).
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { self.gl.delete_texture(self.texture) };
    }
}
