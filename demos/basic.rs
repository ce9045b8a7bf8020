use dominance::image::io::Reader as ImageReader;

fn main() {
    let reader = ImageReader::open("logo.png").unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let count = dominance::ColorCount::from_image(buf).count();

    match count.dominant() {
        Some(swatch) => println!("{} ({} pixels)", swatch.hex(), swatch.population()),
        None => println!("no dominant color"),
    }
}
