mod color_scale;
mod color_scale_error;
mod palette;
mod rgb;

pub use color_scale::{build_color_scale, ColorScale, DEFAULT_BUCKET_COUNT};
pub use color_scale_error::ColorScaleError;
pub use palette::Palette;
pub use rgb::{Rgb, MISSING_COLOR};
