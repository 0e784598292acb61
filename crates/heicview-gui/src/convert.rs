use heicview_core::document::capped_size;
use image::imageops::FilterType;
use image::RgbaImage;

/// Convert an RGBA8 bitmap to an egui ColorImage.
pub fn rgba_to_color_image(bitmap: &RgbaImage) -> egui::ColorImage {
    let size = [bitmap.width() as usize, bitmap.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw())
}

/// Upload `bitmap` as a texture named `name`, shrinking it first if it is
/// larger than the backend's texture limit.
pub fn load_texture(ctx: &egui::Context, name: &str, bitmap: &RgbaImage) -> egui::TextureHandle {
    let max_side = ctx.input(|i| i.max_texture_side) as u32;
    let size = [bitmap.width(), bitmap.height()];
    let [w, h] = capped_size(size, max_side);
    let image = if [w, h] == size {
        rgba_to_color_image(bitmap)
    } else {
        rgba_to_color_image(&image::imageops::resize(bitmap, w, h, FilterType::Triangle))
    };
    ctx.load_texture(name, image, egui::TextureOptions::LINEAR)
}
