const WHITE_CHANNEL_MIN: u8 = 240;

/// A trait used to implement filters for the color counting process.
///
/// During counting, filters are used to remove pixels from the tally entirely, so they can never
/// contribute to the dominant color. This trait allows the library consumer to implement custom
/// filters.
///
/// See [`crate::ColorCountBuilder::add_filter`] on how to add filters to the counting process.
pub trait Filter {
    /// Return whether a given pixel should be counted or not. The pixel is given as its four
    /// RGBA channels.
    fn is_allowed(&self, rgba: (u8, u8, u8, u8)) -> bool;
}

/// The default filter included in every [`crate::ColorCountBuilder`] by default.
///
/// This filter will disallow fully transparent pixels, and pixels whose three color channels are
/// all above 240, which makes them read as white background regardless of their alpha.
#[derive(Debug)]
pub struct DefaultFilter;
impl Filter for DefaultFilter {
    fn is_allowed(&self, (r, g, b, a): (u8, u8, u8, u8)) -> bool {
        !is_transparent(a) && !is_near_white(r, g, b)
    }
}

fn is_transparent(a: u8) -> bool {
    a == 0
}

fn is_near_white(r: u8, g: u8, b: u8) -> bool {
    r > WHITE_CHANNEL_MIN && g > WHITE_CHANNEL_MIN && b > WHITE_CHANNEL_MIN
}
