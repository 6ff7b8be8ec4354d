//! Raw dialog inputs and the validated, immutable parameter record.
//!
//! [`WaveDriveInputs`] is what a host UI (or a JSON file) hands over. It is turned into a
//! [`WaveDriveParams`] through [`WaveDriveParams::new`], which rejects invalid input sets as a
//! whole. Every derived dimension is a pure accessor over the stored inputs; nothing is cached
//! and nothing is ever mutated after construction.

use crate::errors::ParameterError;
use crate::float_types::{PI, Real};
use serde::{Deserialize, Serialize};

/// Eccentricity as a fraction of the roller diameter.
pub const ECCENTRICITY_FACTOR: Real = 0.2;

/// Profile samples per lobe.
pub const RESOLUTION_BASE: usize = 8;

/// Spacing margin between neighbouring rollers used for the minimal cycloid radius.
pub const MIN_DIAMETER_MARGIN: Real = 1.03;

/// Separator wall thickness as a multiple of the eccentricity.
pub const SEPARATOR_THICKNESS_FACTOR: Real = 2.2;

/// Axial allowance added on top of the roller stack when extruding the disk, cam and separator.
pub const EXTRUSION_CLEARANCE: Real = 0.2;

/// Radial margin between the outer edge of the lobed profile blank and `cycloid_diameter`.
pub const BLANK_MARGIN: Real = 0.2;

/// Fewest rolling elements that still form a closed orbit.
pub const MIN_ROLLERS: usize = 3;

/// Most rolling elements a drive may carry; the host dialog spinner stops here too.
pub const MAX_ROLLERS: usize = 100;

/// Raw, unvalidated inputs as collected from the host dialog.
///
/// Missing fields fall back to the dialog defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveDriveInputs {
    pub roller_diameter: Real,
    pub rollers_number: usize,
    pub use_balls: bool,
    pub roller_height: Real,
    pub use_minimal_diameter: bool,
    pub cycloid_diameter: Real,
    pub shaft_diameter: Real,
    pub roller_tolerance: Real,
}

impl Default for WaveDriveInputs {
    fn default() -> Self {
        Self {
            roller_diameter: 6.0,
            rollers_number: 17,
            use_balls: false,
            roller_height: 6.0,
            use_minimal_diameter: false,
            cycloid_diameter: 75.0,
            shaft_diameter: 5.0,
            roller_tolerance: 0.1,
        }
    }
}

impl WaveDriveInputs {
    /// Parse inputs from a JSON document. Absent keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Validated wave drive parameters.
///
/// Two records built from identical inputs always yield identical derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveDriveParams {
    roller_diameter: Real,
    rollers_number: usize,
    use_balls: bool,
    roller_height_input: Real,
    use_minimal_diameter: bool,
    cycloid_diameter: Real,
    shaft_diameter: Real,
    roller_tolerance: Real,
}

impl TryFrom<&WaveDriveInputs> for WaveDriveParams {
    type Error = ParameterError;

    fn try_from(inputs: &WaveDriveInputs) -> Result<Self, Self::Error> {
        Self::new(inputs)
    }
}

impl WaveDriveParams {
    /// Validate `inputs` and build the parameter record.
    ///
    /// # Errors
    /// - [`ParameterError::NonFiniteValue`] for NaN or infinite lengths
    /// - [`ParameterError::NonPositiveDimension`] for zero or negative diameters, or a zero roller
    ///   height when cylindrical rollers are selected
    /// - [`ParameterError::TooFewRollers`] when fewer than [`MIN_ROLLERS`] are requested
    /// - [`ParameterError::TooManyRollers`] when more than [`MAX_ROLLERS`] are requested
    /// - [`ParameterError::NegativeTolerance`] when the clearance is below zero
    pub fn new(inputs: &WaveDriveInputs) -> Result<Self, ParameterError> {
        require_positive("roller_diameter", inputs.roller_diameter)?;
        require_positive("cycloid_diameter", inputs.cycloid_diameter)?;
        require_positive("shaft_diameter", inputs.shaft_diameter)?;
        if !inputs.use_balls {
            require_positive("roller_height", inputs.roller_height)?;
        }
        if !inputs.roller_tolerance.is_finite() {
            return Err(ParameterError::NonFiniteValue { name: "roller_tolerance" });
        }
        if inputs.roller_tolerance < 0.0 {
            return Err(ParameterError::NegativeTolerance(inputs.roller_tolerance));
        }
        if inputs.rollers_number < MIN_ROLLERS {
            return Err(ParameterError::TooFewRollers {
                count: inputs.rollers_number,
                minimum: MIN_ROLLERS,
            });
        }
        if inputs.rollers_number > MAX_ROLLERS {
            return Err(ParameterError::TooManyRollers {
                count: inputs.rollers_number,
                maximum: MAX_ROLLERS,
            });
        }

        Ok(Self {
            roller_diameter: inputs.roller_diameter,
            rollers_number: inputs.rollers_number,
            use_balls: inputs.use_balls,
            roller_height_input: inputs.roller_height,
            use_minimal_diameter: inputs.use_minimal_diameter,
            cycloid_diameter: inputs.cycloid_diameter,
            shaft_diameter: inputs.shaft_diameter,
            roller_tolerance: inputs.roller_tolerance,
        })
    }

    /// Returns a copy whose `cycloid_diameter` is replaced by `2 × min_cycloid_radius`.
    ///
    /// The record itself never overrides its own diameter; the pipeline decides when to
    /// substitute (see [`effective`](Self::effective)).
    pub fn with_minimal_diameter(&self) -> Self {
        Self {
            cycloid_diameter: 2.0 * self.min_cycloid_radius(),
            ..self.clone()
        }
    }

    /// The parameters downstream consumers should use: the minimal-diameter substitute when
    /// `use_minimal_diameter` is set, otherwise an unchanged copy.
    pub fn effective(&self) -> Self {
        if self.use_minimal_diameter {
            self.with_minimal_diameter()
        } else {
            self.clone()
        }
    }

    /// Echo the stored values back as raw inputs.
    pub fn to_inputs(&self) -> WaveDriveInputs {
        WaveDriveInputs {
            roller_diameter: self.roller_diameter,
            rollers_number: self.rollers_number,
            use_balls: self.use_balls,
            roller_height: self.roller_height_input,
            use_minimal_diameter: self.use_minimal_diameter,
            cycloid_diameter: self.cycloid_diameter,
            shaft_diameter: self.shaft_diameter,
            roller_tolerance: self.roller_tolerance,
        }
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Stored inputs
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    #[inline]
    pub const fn roller_diameter(&self) -> Real {
        self.roller_diameter
    }

    #[inline]
    pub const fn roller_radius(&self) -> Real {
        self.roller_diameter / 2.0
    }

    #[inline]
    pub const fn rollers_number(&self) -> usize {
        self.rollers_number
    }

    #[inline]
    pub const fn use_balls(&self) -> bool {
        self.use_balls
    }

    #[inline]
    pub const fn use_minimal_diameter(&self) -> bool {
        self.use_minimal_diameter
    }

    #[inline]
    pub const fn cycloid_diameter(&self) -> Real {
        self.cycloid_diameter
    }

    #[inline]
    pub const fn shaft_diameter(&self) -> Real {
        self.shaft_diameter
    }

    #[inline]
    pub const fn roller_tolerance(&self) -> Real {
        self.roller_tolerance
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Derived dimensions
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Lobes on the disk: always one more than the number of roller slots.
    #[inline]
    pub const fn lobe_count(&self) -> usize {
        self.rollers_number + 1
    }

    #[inline]
    pub const fn eccentricity(&self) -> Real {
        ECCENTRICITY_FACTOR * self.roller_diameter
    }

    #[inline]
    pub const fn internal_radius(&self) -> Real {
        self.cycloid_diameter - 2.0 * self.eccentricity()
    }

    #[inline]
    pub const fn cam_radius(&self) -> Real {
        self.internal_radius() + self.eccentricity() - self.roller_diameter
    }

    /// Smallest internal radius at which neighbouring rollers spaced at the lobe pitch
    /// do not interfere.
    pub fn min_cycloid_radius(&self) -> Real {
        let lobes = self.lobe_count() as Real;
        (MIN_DIAMETER_MARGIN * self.roller_diameter) / (PI / lobes).sin()
    }

    /// Axial height of a rolling element. Balls are as tall as they are wide.
    #[inline]
    pub const fn roller_height(&self) -> Real {
        if self.use_balls {
            self.roller_diameter
        } else {
            self.roller_height_input
        }
    }

    #[inline]
    pub const fn separator_thickness(&self) -> Real {
        SEPARATOR_THICKNESS_FACTOR * self.eccentricity()
    }

    #[inline]
    pub const fn separator_middle_radius(&self) -> Real {
        self.cam_radius() + self.roller_diameter / 2.0
    }

    #[inline]
    pub const fn separator_inner_radius(&self) -> Real {
        self.separator_middle_radius() - self.separator_thickness() / 2.0
    }

    #[inline]
    pub const fn separator_outer_radius(&self) -> Real {
        self.separator_middle_radius() + self.separator_thickness() / 2.0
    }

    /// Profile sample count; grows with the lobe count so every lobe gets the same sampling.
    #[inline]
    pub const fn resolution(&self) -> usize {
        RESOLUTION_BASE * self.lobe_count()
    }

    #[inline]
    pub const fn extrusion_height(&self) -> Real {
        self.roller_height() + 2.0 * self.roller_tolerance + EXTRUSION_CLEARANCE
    }

    /// Radius of the stock circle the lobed profile is cut from.
    #[inline]
    pub const fn blank_radius(&self) -> Real {
        self.cycloid_diameter + BLANK_MARGIN
    }

    #[inline]
    pub const fn shaft_radius(&self) -> Real {
        self.shaft_diameter / 2.0
    }

    /// Radial clearance bore around one rolling element.
    #[inline]
    pub const fn clearance_radius(&self) -> Real {
        self.roller_diameter / 2.0 + self.roller_tolerance
    }
}

fn require_positive(name: &'static str, value: Real) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFiniteValue { name });
    }
    if value <= 0.0 {
        return Err(ParameterError::NonPositiveDimension { name, value });
    }
    Ok(())
}
