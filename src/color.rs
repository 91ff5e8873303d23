/// Convert a single sRGB channel in [0, 1] to linear.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Unpack a `0xRRGGBB` colour into linear RGB.
#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

#[inline]
pub fn scaled(rgb: [f32; 3], intensity: f32) -> [f32; 3] {
    [rgb[0] * intensity, rgb[1] * intensity, rgb[2] * intensity]
}
