//! QR code rendering for share links.

use qrcode::QrCode;
use qrcode::render::svg;

/// Render `data` as an inline SVG at least `size` pixels wide.
///
/// Returns `None` when the payload does not fit in a QR code.
pub fn qr_svg(data: &str, size: u32) -> Option<String> {
    let code = QrCode::new(data.as_bytes()).ok()?;
    Some(
        code.render::<svg::Color<'_>>()
            .min_dimensions(size, size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_svg() {
        let svg = qr_svg("https://files.example.com/s/abc", 150).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_rejects_oversized_payload() {
        assert!(qr_svg(&"x".repeat(8000), 150).is_none());
    }
}
