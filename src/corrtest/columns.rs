//! Technique-specific column layouts.

use std::ops::Range;

use log::debug;

use super::channels::ChannelTable;
use super::error::CorrtestError;
use super::format::format_charge;
use super::params::{
    ExperimentParams, APPLIED_CURRENT, APPLIED_POTENTIAL, DEPOSITION_POTENTIAL, DEPOSITION_TIME,
    FREQUENCY, SCAN_RATE,
};
use super::technique::Technique;
use crate::dataset::Column;
use crate::integrate::{integrate, Step};

/// Column long names
pub mod names {
    /// Time axis
    pub const TIME: &str = "time, s";
    /// Potential
    pub const POTENTIAL: &str = "E, V";
    /// Current
    pub const CURRENT: &str = "I, A";
    /// Integrated charge
    pub const CHARGE: &str = "Q, C";
    /// Decimal log of absolute current
    pub const LOG_CURRENT: &str = "lg(I)";
}

/// Build the columns for `technique`.
///
/// `charge` is the whole-file charge series, aligned with the channels.
pub(crate) fn build_columns(
    technique: Technique,
    params: &ExperimentParams,
    table: &ChannelTable,
    charge: &[f64],
) -> Result<Vec<Column>, CorrtestError> {
    let time = table.channel('T')?;
    let current = table.channel('I')?;
    let total_charge = charge.last().copied().unwrap_or(0.0);

    let columns = match technique {
        Technique::Chronoamperometry => vec![
            Column::new(names::TIME, time.to_vec()).as_x(),
            Column::new(names::CURRENT, current.to_vec()).with_annotation(format!(
                "E={}V Q={}C",
                params.get(APPLIED_POTENTIAL)?,
                format_charge(total_charge)
            )),
        ],

        Technique::PotentialStaircase => vec![
            Column::new(names::TIME, time.to_vec()).as_x(),
            Column::new(names::POTENTIAL, table.channel('E')?.to_vec()),
            Column::new(names::CURRENT, current.to_vec()),
        ],

        Technique::Tafel => vec![
            Column::new(names::CURRENT, current.to_vec()),
            Column::new(names::LOG_CURRENT, current.iter().map(|i| i.abs().log10())).as_x(),
            Column::new(names::POTENTIAL, table.channel('E')?.to_vec())
                .with_annotation(scan_rate_note(params)?),
        ],

        Technique::LinearStripping => {
            let potential = table.channel('E')?;
            let deposition_time = params.get_f64(DEPOSITION_TIME)?;
            let k = deposition_end(time, deposition_time)?;
            debug!("Deposition ends at row {} (t = {} s)", k, time[k]);

            vec![
                Column::new(names::TIME, time.to_vec()).as_x(),
                Column::new(names::CURRENT, current[..k].to_vec()).with_annotation(format!(
                    "Deposition E={}V Q={}C",
                    params.get(DEPOSITION_POTENTIAL)?,
                    format_charge(charge[k])
                )),
                Column::new(names::POTENTIAL, potential[k..].to_vec()).as_x(),
                Column::new(names::CURRENT, current[k..].to_vec()).with_annotation(format!(
                    "Stripping Q={}C",
                    format_charge(total_charge - charge[k])
                )),
            ]
        }

        Technique::OpenCircuit => vec![
            Column::new(names::TIME, time.to_vec()).as_x(),
            Column::new(names::POTENTIAL, table.channel('E')?.to_vec()),
        ],

        Technique::Chronopotentiometry => vec![
            Column::new(names::TIME, time.to_vec()).as_x(),
            Column::new(names::POTENTIAL, table.channel('E')?.to_vec()).with_annotation(format!(
                "I={}A Q={}C",
                params.get(APPLIED_CURRENT)?,
                format_charge(total_charge)
            )),
        ],

        Technique::LinearSweep => sweep_columns(params, table, charge)?,

        Technique::CyclicVoltammetry => {
            let mut columns = sweep_columns(params, table, charge)?;
            columns.extend(cycle_columns(params, table)?);
            columns
        }
    };

    Ok(columns)
}

/// Potential axis, current and charge shared by LSV and CV
fn sweep_columns(
    params: &ExperimentParams,
    table: &ChannelTable,
    charge: &[f64],
) -> Result<Vec<Column>, CorrtestError> {
    let note = scan_rate_note(params)?;
    Ok(vec![
        Column::new(names::POTENTIAL, table.channel('E')?.to_vec()).as_x(),
        Column::new(names::CURRENT, table.channel('I')?.to_vec()).with_annotation(note.clone()),
        Column::new(names::CHARGE, charge.to_vec()).with_annotation(note),
    ])
}

/// Per-cycle current and charge, each padded to the full row count.
///
/// Cycle charge uses a uniform step of `1 / Frq` rather than the time axis.
fn cycle_columns(
    params: &ExperimentParams,
    table: &ChannelTable,
) -> Result<Vec<Column>, CorrtestError> {
    let current = table.channel('I')?;
    let frequency = params.get_f64(FREQUENCY)?;
    if !(frequency > 0.0) || !frequency.is_finite() {
        return Err(CorrtestError::InvalidParameter {
            key: FREQUENCY.to_string(),
            value: params.get(FREQUENCY)?.to_string(),
        });
    }
    let step = 1.0 / frequency;

    let segments = cycle_segments(table.cycle_starts(), current.len());
    debug!("Found {} cycles", segments.len());

    let mut columns = Vec::with_capacity(segments.len() * 2);
    for (idx, segment) in segments.into_iter().enumerate() {
        let cycle = idx + 1;
        let cycle_current = &current[segment.clone()];
        let cycle_charge = integrate(cycle_current, Step::Uniform(step))?;

        columns.push(
            Column::padded(names::CURRENT, segment.start, cycle_current, current.len())
                .with_annotation(format!("Cycle {}", cycle)),
        );
        columns.push(
            Column::padded(names::CHARGE, segment.start, &cycle_charge, current.len())
                .with_annotation(format!("Cycle {}", cycle)),
        );
    }
    Ok(columns)
}

/// Split `0..len` at the given cycle starts.
///
/// Segments are contiguous, non-empty and cover every row once. Starts at
/// row 0, repeated starts and starts outside the range add no segment.
pub fn cycle_segments(starts: &[usize], len: usize) -> Vec<Range<usize>> {
    let mut bounds = vec![0];
    for &start in starts {
        if start > bounds[bounds.len() - 1] && start < len {
            bounds.push(start);
        }
    }
    bounds.push(len);

    bounds
        .windows(2)
        .filter(|w| w[1] > w[0])
        .map(|w| w[0]..w[1])
        .collect()
}

/// First row whose time reaches `deposition_time`
fn deposition_end(time: &[f64], deposition_time: f64) -> Result<usize, CorrtestError> {
    time.iter()
        .position(|&t| t >= deposition_time)
        .ok_or(CorrtestError::DepositionOutOfRange {
            deposition_time,
            last_time: time.last().copied().unwrap_or(f64::NAN),
        })
}

fn scan_rate_note(params: &ExperimentParams) -> Result<String, CorrtestError> {
    Ok(format!("dE/dt={}", params.get(SCAN_RATE)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_segments() {
        assert_eq!(cycle_segments(&[], 5), vec![0..5]);
        assert_eq!(cycle_segments(&[2, 4], 6), vec![0..2, 2..4, 4..6]);
        assert_eq!(cycle_segments(&[0, 3], 6), vec![0..3, 3..6]);
        assert_eq!(cycle_segments(&[3, 3], 6), vec![0..3, 3..6]);
        assert_eq!(cycle_segments(&[], 0), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_deposition_end() {
        let time = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(deposition_end(&time, 1.5).unwrap(), 2);
        assert_eq!(deposition_end(&time, 0.0).unwrap(), 0);
        assert_eq!(deposition_end(&time, 3.0).unwrap(), 3);
        assert!(matches!(
            deposition_end(&time, 3.5),
            Err(CorrtestError::DepositionOutOfRange { last_time, .. }) if last_time == 3.0
        ));
    }
}
