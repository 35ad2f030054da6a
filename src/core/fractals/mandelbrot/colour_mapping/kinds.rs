#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotColourMapKinds {
    HsvSweep,
    PowerGlow,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HsvSweep, Self::PowerGlow];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HsvSweep => "HSV sweep",
            Self::PowerGlow => "Power glow",
        }
    }
}

impl Default for MandelbrotColourMapKinds {
    fn default() -> Self {
        Self::HsvSweep
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
