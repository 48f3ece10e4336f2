use console::Style;

/// Cargo-style status lines on stderr, keeping stdout free
pub struct Output {
    green: Style,
    yellow: Style,
    dim: Style,
}

impl Output {
    /// Create the output helper with the default color styles
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            yellow: Style::new().yellow().bold(),
            dim: Style::new().dim(),
        }
    }

    /// "   Searching decks contractors in Travis County, TX", verb right-aligned to 12 columns
    pub fn status(&self, action: &str, target: &str) {
        eprintln!("{:>12} {}", self.green.apply_to(action), target);
    }

    /// "    Finished export for Travis County, TX (decks)"
    pub fn finish(&self, message: &str) {
        eprintln!("{:>12} {}", self.green.apply_to("Finished"), message);
    }

    /// Dimmed "Note" line for informational remarks
    pub fn note(&self, message: &str) {
        eprintln!("{:>12} {}", self.dim.apply_to("Note"), message);
    }

    /// Yellow "Warning" line, e.g. before replacing an existing export
    pub fn warning(&self, message: &str) {
        eprintln!("{:>12} {}", self.yellow.apply_to("Warning"), message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
