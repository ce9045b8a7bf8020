use crate::{filter::Filter, swatch::Swatch};
use image::Rgba;
use std::collections::{hash_map::Entry, HashMap};

pub struct ColorHistogram {
    pixels: Vec<Rgba<u8>>,
    filters: Vec<Box<dyn Filter>>,
}

impl ColorHistogram {
    pub fn new(pixels: Vec<Rgba<u8>>, filters: Vec<Box<dyn Filter>>) -> Self {
        Self { pixels, filters }
    }

    pub fn into_swatches(self) -> Vec<Swatch> {
        // tally exact pixel values, remembering the order each distinct color was first seen in.
        // the encounter order is what makes tie-breaking between equally common colors
        // deterministic
        let mut counts: HashMap<[u8; 4], u32> = HashMap::new();
        let mut encounter_order = Vec::new();

        for pixel in self.pixels.iter() {
            let rgba = pixel.0;

            if self.should_ignore_color(rgba) {
                continue;
            }

            match counts.entry(rgba) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    entry.insert(1);
                    encounter_order.push(rgba);
                }
            }
        }

        encounter_order
            .into_iter()
            .map(|rgba| Swatch::new((rgba[0], rgba[1], rgba[2], rgba[3]), counts[&rgba]))
            .collect()
    }

    fn should_ignore_color(&self, [r, g, b, a]: [u8; 4]) -> bool {
        self.filters.iter().any(|filter| !filter.is_allowed((r, g, b, a)))
    }
}
