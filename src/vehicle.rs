//! Catalog of standard load models and special vehicles.
//!
//! Each vehicle kind is a static record of inter-axle spacings and axle-load
//! sets. Special vehicles carry one variable gap, the critical distance, whose
//! value is restricted to the regulatory set in [`CriticalDistance`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::round_to;
use crate::errors::CatalogError;

/// Decimal places kept for catalogued axle positions.
const POSITION_DECIMALS: u32 = 2;

/// Tolerance used when matching a requested critical distance.
const DISTANCE_TOLERANCE: f64 = 1.0e-9;

/// Catalogued vehicle kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VehicleType {
    /// Load model 1 tandem system.
    Lm1,
    /// Load model 2 single axle.
    Lm2,
    /// Special vehicle SV80.
    Sv80,
    /// Special vehicle SV100.
    Sv100,
    /// Special vehicle SV196.
    Sv196,
}

impl VehicleType {
    /// Every catalogued kind.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Lm1,
        VehicleType::Lm2,
        VehicleType::Sv80,
        VehicleType::Sv100,
        VehicleType::Sv196,
    ];

    /// Short identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            VehicleType::Lm1 => "LM1",
            VehicleType::Lm2 => "LM2",
            VehicleType::Sv80 => "SV80",
            VehicleType::Sv100 => "SV100",
            VehicleType::Sv196 => "SV196",
        }
    }

    /// Whether the axle layout contains a critical-distance gap.
    #[must_use]
    pub fn uses_critical_distance(self) -> bool {
        self.model().trailing.is_some()
    }

    /// Static layout and loading for this kind.
    fn model(self) -> &'static VehicleModel {
        match self {
            VehicleType::Lm1 => &LM1,
            VehicleType::Lm2 => &LM2,
            VehicleType::Sv80 => &SV80,
            VehicleType::Sv100 => &SV100,
            VehicleType::Sv196 => &SV196,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for VehicleType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VehicleType::ALL
            .into_iter()
            .find(|kind| kind.identifier().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::InvalidVehicleType {
                requested: s.to_string(),
            })
    }
}

/// Permitted critical distances for special vehicles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CriticalDistance {
    /// 1.2 m
    #[default]
    Short,
    /// 5.0 m
    Medium,
    /// 9.0 m
    Long,
}

impl CriticalDistance {
    /// Every permitted distance.
    pub const ALL: [CriticalDistance; 3] = [
        CriticalDistance::Short,
        CriticalDistance::Medium,
        CriticalDistance::Long,
    ];

    /// Distance in metres.
    #[must_use]
    pub const fn metres(self) -> f64 {
        match self {
            CriticalDistance::Short => 1.2,
            CriticalDistance::Medium => 5.0,
            CriticalDistance::Long => 9.0,
        }
    }

    /// Match a distance in metres against the permitted set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidCriticalDistance`] when `metres` is not one of
    /// 1.2, 5.0 or 9.0.
    pub fn from_metres(metres: f64) -> Result<Self, CatalogError> {
        CriticalDistance::ALL
            .into_iter()
            .find(|distance| (distance.metres() - metres).abs() < DISTANCE_TOLERANCE)
            .ok_or_else(|| CatalogError::InvalidCriticalDistance {
                requested: metres,
                permitted: CriticalDistance::ALL.iter().map(|d| d.metres()).collect(),
            })
    }
}

/// Static description of one vehicle kind.
struct VehicleModel {
    /// Name used in reports.
    designation: &'static str,
    /// Spacings from the first axle up to the critical gap (or the whole vehicle).
    leading: &'static [f64],
    /// Spacings after the critical gap; `None` when the vehicle has no such gap.
    trailing: Option<&'static [f64]>,
    /// Named per-axle loads in kN.
    load_sets: &'static [(&'static str, &'static [f64])],
    /// Named accompanying uniformly distributed loads in kN/m².
    udl: &'static [(&'static str, f64)],
}

/// Load Model 1 tandem.
static LM1: VehicleModel = VehicleModel {
    designation: "LM1",
    leading: &[1.2],
    trailing: None,
    load_sets: &[
        ("NL1", &[300.0, 300.0]),
        ("NL2", &[100.0, 100.0]),
        ("NL3", &[50.0, 50.0]),
        ("RA", &[0.0, 0.0]),
    ],
    udl: &[("NL1", 5.49), ("NL2", 5.50), ("NL3", 5.50), ("RA", 5.50)],
};

/// Load Model 2 single axle.
static LM2: VehicleModel = VehicleModel {
    designation: "LM2",
    leading: &[],
    trailing: None,
    load_sets: &[("NL", &[400.0])],
    udl: &[],
};

/// Load Model 3 special vehicle SV80.
static SV80: VehicleModel = VehicleModel {
    designation: "LM3_SV80",
    leading: &[1.2, 1.2],
    trailing: Some(&[1.2, 1.2]),
    load_sets: &[("NL", &[130.0; 6])],
    udl: &[],
};

/// Load Model 3 special vehicle SV100.
static SV100: VehicleModel = VehicleModel {
    designation: "LM3_SV100",
    leading: &[1.2, 1.2],
    trailing: Some(&[1.2, 1.2]),
    load_sets: &[("NL", &[165.0; 6])],
    udl: &[],
};

/// Load Model 3 special vehicle SV196.
static SV196: VehicleModel = VehicleModel {
    designation: "LM3_SV196",
    leading: &[4.4, 1.6, 4.0, 1.2, 1.2, 1.2],
    trailing: Some(&[1.2, 1.2, 1.2, 1.2]),
    load_sets: &[(
        "NL",
        &[
            165.0, 165.0, 165.0, 165.0, 165.0, 165.0, 165.0, 165.0, 165.0, 180.0, 180.0, 100.0,
        ],
    )],
    udl: &[],
};

/// Unit labels attached to every vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Units {
    /// Lengths and positions.
    pub linear: &'static str,
    /// Axle loads.
    pub point_loads: &'static str,
    /// Uniformly distributed loads.
    pub udl: &'static str,
}

/// Units used throughout the catalog.
pub const UNITS: Units = Units {
    linear: "m",
    point_loads: "kN",
    udl: "kN/m\u{b2}",
};

/// Geometry and loading of one catalogued vehicle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vehicle {
    /// Catalog kind.
    vehicle_type: VehicleType,
    /// Name used in reports.
    designation: &'static str,
    /// Critical gap in metres, `None` when the layout has no such gap.
    critical_distance: Option<f64>,
    /// Axle offsets from the first axle, rounded to centimetres.
    axle_positions: Vec<f64>,
    /// Distances between consecutive axles.
    spacings: Vec<f64>,
    /// Named per-axle loads in kN.
    axle_loads: BTreeMap<&'static str, Vec<f64>>,
    /// Named accompanying uniformly distributed loads in kN/m².
    standard_udl: BTreeMap<&'static str, f64>,
    /// Unit labels.
    units: Units,
}

impl Vehicle {
    /// Lay out the axles of `vehicle_type`, opening the critical gap when it has one.
    fn build(vehicle_type: VehicleType, critical_distance: CriticalDistance) -> Self {
        let model = vehicle_type.model();
        let mut spacings = model.leading.to_vec();
        let mut used_distance = None;
        if let Some(trailing) = model.trailing {
            spacings.push(critical_distance.metres());
            spacings.extend_from_slice(trailing);
            used_distance = Some(critical_distance.metres());
        }

        let mut axle_positions = Vec::with_capacity(spacings.len() + 1);
        axle_positions.push(0.0);
        let mut running = 0.0;
        for spacing in &spacings {
            running += spacing;
            axle_positions.push(round_to(running, POSITION_DECIMALS));
        }

        Self {
            vehicle_type,
            designation: model.designation,
            critical_distance: used_distance,
            axle_positions,
            spacings,
            axle_loads: model
                .load_sets
                .iter()
                .map(|(name, loads)| (*name, loads.to_vec()))
                .collect(),
            standard_udl: model.udl.iter().copied().collect(),
            units: UNITS,
        }
    }

    /// Catalogued kind.
    #[must_use]
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Designation used in reports, e.g. `LM3_SV80`.
    #[must_use]
    pub fn designation(&self) -> &str {
        self.designation
    }

    /// Critical distance applied to the layout, when the vehicle has one.
    #[must_use]
    pub fn critical_distance(&self) -> Option<f64> {
        self.critical_distance
    }

    /// Distance of each axle from the first axle, in metres.
    #[must_use]
    pub fn axle_positions(&self) -> &[f64] {
        &self.axle_positions
    }

    /// Distances between consecutive axles, in metres.
    #[must_use]
    pub fn spacings(&self) -> &[f64] {
        &self.spacings
    }

    /// Number of axles.
    #[must_use]
    pub fn axle_count(&self) -> usize {
        self.axle_positions.len()
    }

    /// Distance from the first to the last axle, in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.axle_positions.last().copied().unwrap_or(0.0)
    }

    /// Every named axle-load set in kN, ordered by name.
    #[must_use]
    pub fn axle_loads(&self) -> &BTreeMap<&'static str, Vec<f64>> {
        &self.axle_loads
    }

    /// Per-axle loads of the named set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownLoadSet`](crate::AnalysisError::UnknownLoadSet)
    /// when the vehicle has no set called `name`. Names are matched case-insensitively.
    pub fn load_set(&self, name: &str) -> Result<&[f64], crate::AnalysisError> {
        self.axle_loads
            .iter()
            .find(|(set, _)| set.eq_ignore_ascii_case(name.trim()))
            .map(|(_, loads)| loads.as_slice())
            .ok_or_else(|| crate::AnalysisError::UnknownLoadSet {
                name: name.to_string(),
            })
    }

    /// Accompanying uniformly distributed loads in kN/m², ordered by name.
    #[must_use]
    pub fn standard_udl(&self) -> &BTreeMap<&'static str, f64> {
        &self.standard_udl
    }

    /// Unit labels for this vehicle's data.
    #[must_use]
    pub fn units(&self) -> Units {
        self.units
    }
}

/// Every vehicle and critical-distance combination, built once.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// One vehicle per kind and permitted critical distance.
    vehicles: BTreeMap<(VehicleType, CriticalDistance), Vehicle>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl Catalog {
    /// Build the full table.
    #[must_use]
    pub fn new() -> Self {
        let vehicles = VehicleType::ALL
            .into_iter()
            .flat_map(|kind| {
                CriticalDistance::ALL
                    .into_iter()
                    .map(move |distance| ((kind, distance), Vehicle::build(kind, distance)))
            })
            .collect();
        Self { vehicles }
    }

    /// Shared instance built on first use.
    #[must_use]
    pub fn standard() -> &'static Catalog {
        /// Catalog shared by every caller of `standard`.
        static STANDARD: Lazy<Catalog> = Lazy::new(Catalog::new);
        &STANDARD
    }

    /// Typed lookup; infallible because both keys are already validated.
    #[must_use]
    pub fn vehicle(&self, vehicle_type: VehicleType, distance: CriticalDistance) -> &Vehicle {
        &self.vehicles[&(vehicle_type, distance)]
    }

    /// Look up a vehicle by identifier and critical distance in metres.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidVehicleType`] for an unknown identifier and
    /// [`CatalogError::InvalidCriticalDistance`] for a distance outside the
    /// permitted set. The distance is validated for every vehicle, including
    /// those that ignore it.
    pub fn get(&self, vehicle_type: &str, critical_distance: f64) -> Result<&Vehicle, CatalogError> {
        let kind = vehicle_type.parse::<VehicleType>()?;
        let distance = CriticalDistance::from_metres(critical_distance)?;
        Ok(self.vehicle(kind, distance))
    }
}

/// Look up a vehicle in the shared catalog.
///
/// # Errors
///
/// See [`Catalog::get`].
///
/// # Examples
/// ```
/// use movingload::lookup;
///
/// let vehicle = lookup("sv80", 5.0).expect("catalogued vehicle");
/// assert_eq!(vehicle.designation(), "LM3_SV80");
/// assert_eq!(vehicle.axle_positions(), &[0.0, 1.2, 2.4, 7.4, 8.6, 9.8]);
/// ```
pub fn lookup(vehicle_type: &str, critical_distance: f64) -> Result<Vehicle, CatalogError> {
    let vehicle = Catalog::standard().get(vehicle_type, critical_distance)?;
    log::debug!(
        "catalog: {} with {} axles over {} m",
        vehicle.designation(),
        vehicle.axle_count(),
        vehicle.length()
    );
    Ok(vehicle.clone())
}
