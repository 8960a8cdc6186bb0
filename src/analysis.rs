//! Support reactions and design envelopes from influence ordinates.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::influence::FarSupportReaction;
use crate::simulator::SimulationData;
use crate::vehicle::Vehicle;

/// Contribution of every axle at every sample, in kN.
///
/// # Errors
///
/// Returns [`AnalysisError::ShapeMismatch`] when `axle_loads` does not have one
/// entry per column of `ordinates`.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use movingload::compute_reactions;
///
/// let reactions = compute_reactions(&[300.0, 300.0], &array![[1.0, 0.5]]).unwrap();
/// assert_eq!(reactions, array![[300.0, 150.0]]);
/// ```
pub fn compute_reactions(
    axle_loads: &[f64],
    ordinates: &Array2<f64>,
) -> Result<Array2<f64>, AnalysisError> {
    if axle_loads.len() != ordinates.ncols() {
        return Err(AnalysisError::ShapeMismatch {
            loads: axle_loads.len(),
            axles: ordinates.ncols(),
        });
    }
    Ok(ordinates * &ArrayView1::from(axle_loads))
}

/// Total reaction at each sample, the row sums of a reaction matrix.
#[must_use]
pub fn reaction_totals(reactions: &Array2<f64>) -> Array1<f64> {
    reactions.sum_axis(Axis(1))
}

/// Per-axle and total reactions at one support.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reactions {
    /// Samples × axles reaction contributions.
    per_axle: Array2<f64>,
    /// Row sums of `per_axle`, one per sample.
    totals: Array1<f64>,
}

impl Reactions {
    /// Combine axle loads with influence ordinates.
    ///
    /// # Errors
    ///
    /// See [`compute_reactions`].
    pub fn new(axle_loads: &[f64], ordinates: &Array2<f64>) -> Result<Self, AnalysisError> {
        let per_axle = compute_reactions(axle_loads, ordinates)?;
        let totals = reaction_totals(&per_axle);
        Ok(Self { per_axle, totals })
    }

    /// Samples × axles matrix of reaction contributions.
    #[must_use]
    pub fn per_axle(&self) -> &Array2<f64> {
        &self.per_axle
    }

    /// Summed reaction at each sample.
    #[must_use]
    pub fn totals(&self) -> &Array1<f64> {
        &self.totals
    }

    /// Sample index and value of the largest total; the first sample wins ties.
    #[must_use]
    pub fn maximum(&self) -> Option<(usize, f64)> {
        self.totals
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (index, value)| match best {
                Some((_, current)) if value <= current => best,
                _ => Some((index, value)),
            })
    }
}

/// Governing reaction of one load set over the whole crossing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReactionEnvelope {
    /// Name of the axle-load set.
    pub load_set: String,
    /// Largest near-support reaction in kN.
    pub max_reaction: f64,
    /// Sample at which the maximum occurs.
    pub sample_index: usize,
    /// Position of the first axle at that sample, in metres.
    pub position: f64,
}

/// Reactions at both supports for one axle-load set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadSetAnalysis {
    /// Reactions at the support the vehicle drives onto first.
    pub near: Reactions,
    /// Reactions at the opposite support.
    pub far: Reactions,
    /// Governing near-support reaction.
    pub envelope: ReactionEnvelope,
}

/// Analyse one named load set of `vehicle` for a completed simulation.
///
/// # Errors
///
/// Returns [`AnalysisError::UnknownLoadSet`] when the vehicle has no such set and
/// [`AnalysisError::ShapeMismatch`] when the simulation was run for a different
/// number of axles. [`AnalysisError::InvalidConfig`] is returned when `config`
/// asks for more decimal places than an `f64` can hold.
pub fn analyse_load_set(
    vehicle: &Vehicle,
    load_set: &str,
    simulation: &SimulationData,
    config: &AnalysisConfig,
) -> Result<LoadSetAnalysis, AnalysisError> {
    config.validate()?;
    let loads = vehicle.load_set(load_set)?;
    let near = Reactions::new(loads, simulation.shear_ordinates())?;
    let far = Reactions::new(
        loads,
        &simulation.ordinates_for(&FarSupportReaction, config),
    )?;

    // Beam grids always hold at least two samples.
    let (sample_index, max_reaction) = near.maximum().ok_or(AnalysisError::ShapeMismatch {
        loads: loads.len(),
        axles: simulation.shear_ordinates().ncols(),
    })?;
    let envelope = ReactionEnvelope {
        load_set: load_set.to_uppercase(),
        max_reaction,
        sample_index,
        position: simulation.sample_positions()[sample_index],
    };

    if config.log_matrices {
        log::trace!("{} near-support reactions:\n{}", envelope.load_set, near.per_axle);
        log::trace!("{} far-support reactions:\n{}", envelope.load_set, far.per_axle);
    }
    log::debug!(
        "{} {}: max reaction {:.2} kN with first axle at {} m",
        vehicle.designation(),
        envelope.load_set,
        envelope.max_reaction,
        envelope.position
    );

    Ok(LoadSetAnalysis {
        near,
        far,
        envelope,
    })
}

/// Governing near-support reaction for every load set of `vehicle`, ordered by set name.
///
/// # Errors
///
/// See [`analyse_load_set`].
pub fn governing_reactions(
    vehicle: &Vehicle,
    simulation: &SimulationData,
    config: &AnalysisConfig,
) -> Result<Vec<ReactionEnvelope>, AnalysisError> {
    vehicle
        .axle_loads()
        .keys()
        .map(|name| analyse_load_set(vehicle, name, simulation, config).map(|a| a.envelope))
        .collect()
}
