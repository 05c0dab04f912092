#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Mandelbrot => Self::Julia,
            Self::Julia => Self::Mandelbrot,
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FractalKinds::ALL.first(), Some(&FractalKinds::default()));
    }

    #[test]
    fn toggling_twice_is_identity() {
        for &kind in FractalKinds::ALL {
            assert_ne!(kind.toggled(), kind);
            assert_eq!(kind.toggled().toggled(), kind);
        }
    }

    #[test]
    fn display_names_are_unique() {
        assert_ne!(
            FractalKinds::Mandelbrot.display_name(),
            FractalKinds::Julia.display_name()
        );
        assert_eq!(format!("{}", FractalKinds::Julia), "Julia");
    }
}
