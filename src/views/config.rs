/// Display constants for the derived views
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Degrees below the file-wide sensor minimum where the polar axis starts
    pub polar_floor_offset: f64,
    /// Degrees above the file-wide sensor maximum where the polar axis ends
    pub polar_ceiling_offset: f64,
    /// Half width of the highlight marker, in pixels
    pub highlight_half_width_px: f64,
    /// Highlight fill opacity (0-1)
    pub highlight_opacity: f64,
    /// Highlight fill color (any CSS color)
    pub highlight_fill: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            polar_floor_offset: 60.0,
            polar_ceiling_offset: 10.0,
            highlight_half_width_px: 5.0,
            highlight_opacity: 0.4,
            highlight_fill: "green".to_string(),
        }
    }
}
