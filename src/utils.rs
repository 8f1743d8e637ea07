//! Utility functions

use chrono::NaiveDateTime;

// Rounded tile with swap arrows — for the header logo
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><style>.c1{fill:#6366f1}.c2{fill:#fff}</style></defs><rect class="c1" x="2" y="2" width="60" height="60" rx="14"/><path class="c2" d="M14 21h22v-7l12 10-12 10v-7H14z"/><path class="c2" d="M50 37h-22v-7l-12 10 12 10v-7h22z"/></svg>"##;

// Full-bleed variant — for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><style>.c1{fill:#6366f1}.c2{fill:#fff}</style></defs><rect class="c1" x="0" y="0" width="64" height="64" rx="12"/><path class="c2" d="M14 21h22v-7l12 10-12 10v-7H14z"/><path class="c2" d="M50 37h-22v-7l-12 10 12 10v-7h22z"/></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Uppercase initial used for avatar placeholders
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Format a swap timestamp for display, "N/A" when the backend omitted it
pub fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn avatar_initial_is_uppercased() {
        assert_eq!(avatar_initial("ada"), "A");
        assert_eq!(avatar_initial("Żaneta"), "Ż");
        assert_eq!(avatar_initial(""), "?");
    }

    #[test]
    fn timestamp_formats_or_falls_back() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2024-05-01 12:30");
        assert_eq!(format_timestamp(None), "N/A");
    }
}
