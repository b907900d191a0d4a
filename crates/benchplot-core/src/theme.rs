// File: crates/benchplot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

/// Categorical palette (tab10 ordering), cycled by series index.
fn tab10() -> [skia::Color; 10] {
    [
        rgb(0x1f, 0x77, 0xb4),
        rgb(0xff, 0x7f, 0x0e),
        rgb(0x2c, 0xa0, 0x2c),
        rgb(0xd6, 0x27, 0x28),
        rgb(0x94, 0x67, 0xbd),
        rgb(0x8c, 0x56, 0x4b),
        rgb(0xe3, 0x77, 0xc2),
        rgb(0x7f, 0x7f, 0x7f),
        rgb(0xbc, 0xbd, 0x22),
        rgb(0x17, 0xbe, 0xcf),
    ]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(255, 255, 255),
            grid: rgb(0xdd, 0xdd, 0xdd),
            axis_line: rgb(0x20, 0x20, 0x20),
            axis_label: rgb(0x10, 0x10, 0x10),
            tick: rgb(0x30, 0x30, 0x30),
            title: rgb(0x00, 0x00, 0x00),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: rgb(0xcc, 0xcc, 0xcc),
            palette: tab10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: rgb(18, 18, 20),
            grid: rgb(40, 40, 45),
            axis_line: rgb(180, 180, 190),
            axis_label: rgb(235, 235, 245),
            tick: rgb(150, 150, 160),
            title: rgb(245, 245, 250),
            legend_fill: skia::Color::from_argb(204, 28, 28, 32),
            legend_border: rgb(70, 70, 78),
            palette: tab10(),
        }
    }

    /// Stroke color for the series drawn at position `index`.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        assert_eq!(t.series_color(0), t.series_color(10));
        assert_ne!(t.series_color(0), t.series_color(1));
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("DARK").map(|t| t.name), Some("dark"));
        assert!(find("neon").is_none());
    }
}
