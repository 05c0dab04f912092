//! Parameters the control panel can set directly.
//!
//! Each editable field of [`ViewParameters`] has one [`PanelEntry`] carrying
//! its external name, widget kind, suggested range and accessors. Lookups by
//! name go through [`PanelParam::from_name`].

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use crate::core::data::view_parameters::ViewParameters;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PanelParam {
    FractalType,
    Zoom,
    CenterX,
    CenterY,
    JuliaConstantX,
    JuliaConstantY,
    ColourOffsetR,
    ColourOffsetG,
    ColourOffsetB,
    ColourFrequency,
}

impl PanelParam {
    pub const ALL: &'static [Self] = &[
        Self::FractalType,
        Self::Zoom,
        Self::CenterX,
        Self::CenterY,
        Self::JuliaConstantX,
        Self::JuliaConstantY,
        Self::ColourOffsetR,
        Self::ColourOffsetG,
        Self::ColourOffsetB,
        Self::ColourFrequency,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        PANEL_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.param)
    }

    #[must_use]
    pub fn entry(self) -> &'static PanelEntry {
        // PANEL_TABLE is declared in the same order as ALL.
        &PANEL_TABLE[self as usize]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelKind {
    Choice,
    Slider,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PanelValue {
    Fractal(FractalKinds),
    Scalar(f64),
}

impl PanelValue {
    #[must_use]
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::Fractal(_) => PanelKind::Choice,
            Self::Scalar(_) => PanelKind::Slider,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PanelEditError {
    KindMismatch {
        param: PanelParam,
        expected: PanelKind,
        found: PanelKind,
    },
}

impl fmt::Display for PanelEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch {
                param,
                expected,
                found,
            } => write!(
                f,
                "panel parameter '{}' expects a {:?} value, got {:?}",
                param.entry().name,
                expected,
                found
            ),
        }
    }
}

impl Error for PanelEditError {}

type Getter = fn(&ViewParameters) -> PanelValue;
type Setter = fn(&mut ViewParameters, PanelValue) -> Result<(), PanelEditError>;

pub struct PanelEntry {
    pub param: PanelParam,
    pub name: &'static str,
    /// Heading the entry is grouped under, if any.
    pub group: Option<&'static str>,
    pub kind: PanelKind,
    /// Suggested slider bounds. Not enforced on set.
    pub range: Option<RangeInclusive<f64>>,
    pub get: Getter,
    pub set: Setter,
}

impl PanelEntry {
    #[must_use]
    pub fn read(&self, params: &ViewParameters) -> PanelValue {
        (self.get)(params)
    }

    pub fn write(&self, params: &mut ViewParameters, value: PanelValue) -> Result<(), PanelEditError> {
        (self.set)(params, value)
    }
}

impl fmt::Debug for PanelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelEntry")
            .field("param", &self.param)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

const JULIA_GROUP: Option<&str> = Some("Julia Constant");
const COLOUR_GROUP: Option<&str> = Some("Color Settings");

fn scalar(param: PanelParam, value: PanelValue) -> Result<f64, PanelEditError> {
    match value {
        PanelValue::Scalar(scalar) => Ok(scalar),
        other => Err(PanelEditError::KindMismatch {
            param,
            expected: PanelKind::Slider,
            found: other.kind(),
        }),
    }
}

macro_rules! slider {
    ($param:ident, $name:literal, $group:expr, $min:literal..=$max:literal, |$p:ident| $field:expr) => {
        PanelEntry {
            param: PanelParam::$param,
            name: $name,
            group: $group,
            kind: PanelKind::Slider,
            range: Some($min..=$max),
            get: |$p| PanelValue::Scalar($field),
            set: |$p, value| {
                $field = scalar(PanelParam::$param, value)?;
                Ok(())
            },
        }
    };
}

pub static PANEL_TABLE: [PanelEntry; 10] = [
    PanelEntry {
        param: PanelParam::FractalType,
        name: "fractalType",
        group: None,
        kind: PanelKind::Choice,
        range: None,
        get: |p| PanelValue::Fractal(p.fractal_type),
        set: |p, value| match value {
            PanelValue::Fractal(kind) => {
                p.fractal_type = kind;
                Ok(())
            }
            other => Err(PanelEditError::KindMismatch {
                param: PanelParam::FractalType,
                expected: PanelKind::Choice,
                found: other.kind(),
            }),
        },
    },
    slider!(Zoom, "zoom", None, 0.1..=10.0, |p| p.zoom),
    slider!(CenterX, "centerX", None, -2.0..=2.0, |p| p.center.real),
    slider!(CenterY, "centerY", None, -2.0..=2.0, |p| p.center.imag),
    slider!(JuliaConstantX, "juliaConstantX", JULIA_GROUP, -1.0..=1.0, |p| p.julia_constant.real),
    slider!(JuliaConstantY, "juliaConstantY", JULIA_GROUP, -1.0..=1.0, |p| p.julia_constant.imag),
    slider!(ColourOffsetR, "colorOffsetR", COLOUR_GROUP, 0.0..=10.0, |p| p.colour_offset.r),
    slider!(ColourOffsetG, "colorOffsetG", COLOUR_GROUP, 0.0..=10.0, |p| p.colour_offset.g),
    slider!(ColourOffsetB, "colorOffsetB", COLOUR_GROUP, 0.0..=10.0, |p| p.colour_offset.b),
    slider!(ColourFrequency, "colorFrequency", COLOUR_GROUP, 0.0..=10.0, |p| p.colour_frequency),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_table_order_matches_params() {
        assert_eq!(PANEL_TABLE.len(), PanelParam::ALL.len());

        for (entry, &param) in PANEL_TABLE.iter().zip(PanelParam::ALL) {
            assert_eq!(entry.param, param);
            assert_eq!(param.entry().param, param);
        }
    }

    #[test]
    fn test_names_resolve() {
        assert_eq!(PanelParam::from_name("zoom"), Some(PanelParam::Zoom));
        assert_eq!(
            PanelParam::from_name("juliaConstantY"),
            Some(PanelParam::JuliaConstantY)
        );
        assert_eq!(
            PanelParam::from_name("colorFrequency"),
            Some(PanelParam::ColourFrequency)
        );
        assert_eq!(PanelParam::from_name("maxIterations"), None);

        for entry in &PANEL_TABLE {
            assert_eq!(PanelParam::from_name(entry.name), Some(entry.param));
        }
    }

    #[test]
    fn test_every_slider_writes_only_its_field() {
        for entry in PANEL_TABLE.iter().filter(|e| e.kind == PanelKind::Slider) {
            let mut params = ViewParameters::default();
            let before = params;

            entry.write(&mut params, PanelValue::Scalar(7.25)).unwrap();

            assert_eq!(entry.read(&params), PanelValue::Scalar(7.25));

            for other in PANEL_TABLE.iter().filter(|e| e.param != entry.param) {
                assert_eq!(other.read(&params), other.read(&before), "{}", other.name);
            }
        }
    }

    #[test]
    fn test_fractal_type_choice() {
        let mut params = ViewParameters::default();
        let entry = PanelParam::FractalType.entry();

        entry
            .write(&mut params, PanelValue::Fractal(FractalKinds::Julia))
            .unwrap();

        assert_eq!(params.fractal_type, FractalKinds::Julia);
        assert_eq!(entry.read(&params), PanelValue::Fractal(FractalKinds::Julia));
        assert!(entry.range.is_none());
    }

    #[test]
    fn test_kind_mismatch_leaves_params_untouched() {
        let mut params = ViewParameters::default();

        assert_eq!(
            PanelParam::Zoom
                .entry()
                .write(&mut params, PanelValue::Fractal(FractalKinds::Julia)),
            Err(PanelEditError::KindMismatch {
                param: PanelParam::Zoom,
                expected: PanelKind::Slider,
                found: PanelKind::Choice,
            })
        );
        assert_eq!(
            PanelParam::FractalType
                .entry()
                .write(&mut params, PanelValue::Scalar(1.0)),
            Err(PanelEditError::KindMismatch {
                param: PanelParam::FractalType,
                expected: PanelKind::Choice,
                found: PanelKind::Slider,
            })
        );
        assert_eq!(params, ViewParameters::default());
    }

    #[test]
    fn test_out_of_range_values_are_assigned() {
        let mut params = ViewParameters::default();

        PanelParam::CenterX
            .entry()
            .write(&mut params, PanelValue::Scalar(-3.5))
            .unwrap();

        assert_eq!(params.center, Complex::new(-3.5, 0.0));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(PanelParam::Zoom.entry().range, Some(0.1..=10.0));
        assert_eq!(PanelParam::CenterY.entry().range, Some(-2.0..=2.0));
        assert_eq!(PanelParam::JuliaConstantX.entry().range, Some(-1.0..=1.0));
        assert_eq!(PanelParam::ColourOffsetB.entry().range, Some(0.0..=10.0));
        assert_eq!(PanelParam::ColourFrequency.entry().range, Some(0.0..=10.0));
    }

    #[test]
    fn test_error_display() {
        let err = PanelEditError::KindMismatch {
            param: PanelParam::Zoom,
            expected: PanelKind::Slider,
            found: PanelKind::Choice,
        };

        assert_eq!(
            err.to_string(),
            "panel parameter 'zoom' expects a Slider value, got Choice"
        );
    }
}
