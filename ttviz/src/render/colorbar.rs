use super::RenderError;
use std::fmt::Write;
use ttviz_core::color::ColorScale;

/// a vertical colorbar, highest bucket on top, labelled with the scale's
/// ticks
pub fn colorbar_html(scale: &ColorScale, height_px: u32) -> Result<String, RenderError> {
    let mut html = String::new();
    write!(
        html,
        r#"<div class="colorbar"><div class="colorbar-title">Travel Time (minutes)</div><div class="colorbar-body" style="height: {height_px}px;"><div class="colorbar-swatches">"#
    )?;
    for (lower, upper, color) in scale.buckets().collect::<Vec<_>>().into_iter().rev() {
        write!(
            html,
            r#"<div class="colorbar-swatch" style="background: {color};" title="{lower:.1} to {upper:.1} min"></div>"#
        )?;
    }
    html.push_str(r#"</div><div class="colorbar-ticks">"#);
    let span = scale.domain_max - scale.domain_min;
    for tick in scale.ticks() {
        let offset = if span > 0.0 {
            ((scale.domain_max - tick as f64) / span * 100.0).clamp(0.0, 100.0)
        } else {
            50.0
        };
        write!(
            html,
            r#"<span class="colorbar-tick" style="top: {offset:.2}%;">{tick}</span>"#
        )?;
    }
    html.push_str("</div></div></div>");
    Ok(html)
}

pub const COLORBAR_CSS: &str = r#"
.colorbar { display: flex; flex-direction: column; align-items: flex-start; margin-left: 20px; }
.colorbar-title { font-size: 14pt; margin-bottom: 8px; white-space: nowrap; }
.colorbar-body { display: flex; position: relative; }
.colorbar-swatches { display: flex; flex-direction: column; width: 30px; height: 100%; }
.colorbar-swatch { flex: 1; }
.colorbar-ticks { position: relative; width: 60px; height: 100%; margin-left: 12px; font-size: 10pt; }
.colorbar-tick { position: absolute; left: 0; transform: translateY(-50%); }
"#;

#[cfg(test)]
mod test {
    use super::colorbar_html;
    use ttviz_core::color::{build_color_scale, Palette};

    #[test]
    fn test_colorbar() {
        let scale =
            build_color_scale(&[0.0, 24.0], 24, Palette::Spectral).expect("should build scale");
        let html = colorbar_html(&scale, 400).expect("should render");
        assert_eq!(html.matches("class=\"colorbar-swatch\"").count(), 24);
        assert_eq!(html.matches("class=\"colorbar-tick\"").count(), 25);
        // highest bucket is drawn first
        let top = html.find(&scale.colors[23].to_hex()).expect("top color");
        let bottom = html.find(&scale.colors[0].to_hex()).expect("bottom color");
        assert!(top < bottom);
        assert!(html.contains(r#"style="top: 0.00%;">24<"#));
        assert!(html.contains(r#"style="top: 100.00%;">0<"#));
    }
}
