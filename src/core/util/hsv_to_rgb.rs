use crate::core::data::colour::Colour;

/// Converts normalised HSV to RGB.
///
/// All channels are expected in `[0, 1]`; hue wraps modulo 1, so `1.25`
/// means the same as `0.25`. Each output channel is rounded to the nearest
/// value in `[0, 255]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let chroma = value * saturation;
    let h_prime = hue.rem_euclid(1.0) * 6.0;
    let x = chroma * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (chroma, x, 0.0)
    } else if h_prime < 2.0 {
        (x, chroma, 0.0)
    } else if h_prime < 3.0 {
        (0.0, chroma, x)
    } else if h_prime < 4.0 {
        (0.0, x, chroma)
    } else if h_prime < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let m = value - chroma;

    Colour {
        r: to_channel(r1 + m),
        g: to_channel(g1 + m),
        b: to_channel(b1 + m),
    }
}

fn to_channel(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}
