use dominance::image::io::Reader as ImageReader;

const DARK_CHANNEL_MAX: u8 = 15;

// this filter uses the same approach as the default filter in dominance, except it drops
// near-black pixels instead of near-white ones
struct DarkBackgroundFilter;
impl dominance::Filter for DarkBackgroundFilter {
    fn is_allowed(&self, (r, g, b, a): (u8, u8, u8, u8)) -> bool {
        a > 0 && !(r < DARK_CHANNEL_MAX && g < DARK_CHANNEL_MAX && b < DARK_CHANNEL_MAX)
    }
}

fn main() {
    let reader = ImageReader::open("logo.png").unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let count = dominance::ColorCount::from_image(buf)
        .clear_filters() // remove the default filter
        .add_filter(DarkBackgroundFilter) // add our custom filter
        .count();

    println!("{:#?}", count.dominant());
}
