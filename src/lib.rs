// Copyright 2026 the dominance authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the dominant color from an image.
//!
//! The image is decoded and normalized to RGBA, resampled down to a small fixed grid (50 by 50
//! by default, nearest-neighbor), filtered to drop fully transparent and near-white background
//! pixels, and tallied by exact pixel value. The most frequent remaining color wins; when several
//! colors are equally common, the one first encountered in the row-major pixel scan wins, so the
//! result is stable across runs.

mod error;
mod filter;
mod histogram;
mod swatch;

pub const DEFAULT_RESIZE_WIDTH: u32 = 50;
pub const DEFAULT_RESIZE_HEIGHT: u32 = 50;

pub use crate::{
    error::ExtractError,
    filter::{DefaultFilter, Filter},
    swatch::Swatch,
};
pub use image;

use histogram::ColorHistogram;
use image::{imageops::FilterType, io::Reader as ImageReader, RgbaImage};
use std::path::Path;

/// The outcome of counting an image's qualifying pixels: one [`Swatch`] per distinct color, in
/// the order the colors were first encountered.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorCount {
    swatches: Vec<Swatch>,
}

pub struct ColorCountBuilder {
    image: RgbaImage,
    resize_width: u32,
    resize_height: u32,
    filters: Vec<Box<dyn Filter>>,
}

impl ColorCount {
    pub fn from_image(image: RgbaImage) -> ColorCountBuilder {
        ColorCountBuilder::from_image(image)
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The most frequent counted color, or `None` if no pixel qualified for counting. Ties
    /// resolve to the color encountered first.
    pub fn dominant(&self) -> Option<Swatch> {
        let mut dominant: Option<Swatch> = None;

        // swatches are in encounter order, so the running winner is only displaced by a strictly
        // greater population
        for swatch in self.swatches.iter().copied() {
            match dominant {
                Some(best) if swatch.population() <= best.population() => {}
                _ => dominant = Some(swatch),
            }
        }

        dominant
    }
}

impl ColorCountBuilder {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            resize_width: DEFAULT_RESIZE_WIDTH,
            resize_height: DEFAULT_RESIZE_HEIGHT,
            filters: vec![Box::new(DefaultFilter)],
        }
    }

    /// Set the grid the image is resampled to before counting. Passing 0 for either dimension
    /// disables resampling entirely.
    pub fn resize_dimensions(self, resize_width: u32, resize_height: u32) -> Self {
        Self {
            resize_width,
            resize_height,
            ..self
        }
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    pub fn count(mut self) -> ColorCount {
        self.scale_image_down();

        let pixels = self.image.pixels().copied().collect();
        let swatches = ColorHistogram::new(pixels, self.filters).into_swatches();

        tracing::debug!(distinct = swatches.len(), "tallied qualifying colors");

        ColorCount { swatches }
    }

    fn scale_image_down(&mut self) {
        if self.resize_width == 0 || self.resize_height == 0 {
            return;
        }

        if self.image.dimensions() != (self.resize_width, self.resize_height) {
            // nearest-neighbor keeps the resample deterministic and avoids inventing blended
            // colors that never appear in the source
            self.image = image::imageops::resize(
                &self.image,
                self.resize_width,
                self.resize_height,
                FilterType::Nearest,
            );
        }
    }
}

/// Extract the dominant color of the image at `path` with the default grid and filters.
///
/// Returns `Ok(None)` when the image decodes but every pixel is filtered out as transparent or
/// near-white background. Failures to open or decode the file are returned as
/// [`ExtractError`] so the caller can tell them apart from the no-color outcome.
pub fn dominant_color<P>(path: P) -> Result<Option<Swatch>, ExtractError>
where
    P: AsRef<Path>,
{
    let image = ImageReader::open(path)?.decode()?;
    let buffer = image.to_rgba8();

    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        "decoded image"
    );

    Ok(ColorCount::from_image(buffer).count().dominant())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn dominant_is_the_most_frequent_color() {
        let mut image = solid(10, 10, [0, 0, 255, 255]);
        for x in 0..10 {
            for y in 0..4 {
                image.put_pixel(x, y, Rgba([0, 255, 0, 255]));
            }
        }

        let dominant = ColorCount::from_image(image).count().dominant().unwrap();

        assert_eq!(dominant.rgb(), (0, 0, 255));
        assert_eq!(dominant.hex(), "#0000ff");
    }

    #[test]
    fn ties_go_to_the_first_encountered_color() {
        // two colors, 50 pixels each; red comes first in the row-major scan
        let mut image = solid(10, 10, [0, 0, 255, 255]);
        for x in 0..10 {
            for y in 0..5 {
                image.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        let dominant = ColorCount::from_image(image)
            .resize_dimensions(0, 0)
            .count()
            .dominant()
            .unwrap();

        assert_eq!(dominant.hex(), "#ff0000");
    }

    #[test]
    fn image_is_resampled_to_the_grid() {
        let image = solid(200, 100, [10, 20, 30, 255]);

        let count = ColorCount::from_image(image).count();
        let swatches = count.swatches();

        assert_eq!(swatches.len(), 1);
        assert_eq!(
            swatches[0].population(),
            DEFAULT_RESIZE_WIDTH * DEFAULT_RESIZE_HEIGHT
        );
    }

    #[test]
    fn zero_grid_disables_resampling() {
        let image = solid(8, 4, [10, 20, 30, 255]);

        let count = ColorCount::from_image(image).resize_dimensions(0, 0).count();

        assert_eq!(count.swatches()[0].population(), 32);
    }

    #[test]
    fn fully_filtered_image_has_no_dominant_color() {
        let transparent = solid(10, 10, [50, 50, 50, 0]);
        assert_eq!(ColorCount::from_image(transparent).count().dominant(), None);

        let white = solid(10, 10, [255, 255, 255, 255]);
        assert_eq!(ColorCount::from_image(white).count().dominant(), None);
    }

    #[test]
    fn custom_filter_replaces_the_default() {
        struct RejectRed;
        impl Filter for RejectRed {
            fn is_allowed(&self, (r, _, _, _): (u8, u8, u8, u8)) -> bool {
                r < 128
            }
        }

        let mut image = solid(10, 10, [255, 0, 0, 255]);
        image.put_pixel(0, 0, Rgba([0, 100, 0, 255]));

        let dominant = ColorCount::from_image(image)
            .clear_filters()
            .add_filter(RejectRed)
            .count()
            .dominant()
            .unwrap();

        assert_eq!(dominant.rgb(), (0, 100, 0));
    }
}
