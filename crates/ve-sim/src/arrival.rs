//! Poisson arrival process.

use rand_distr::Exp;

use ve_core::{ConfigError, DayRng, SimTime};

use crate::SimResult;

/// One customer arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arrival {
    pub time:       SimTime,
    pub infectious: bool,
}

/// Arrivals over `[0, opening_minutes]`, in time order.
///
/// Gaps are `Exp(rate)` (mean `1 / rate` minutes).  The first arrival past
/// `opening_minutes` ends the process and is discarded.  Each kept arrival
/// is infectious with probability `infection_proportion`, independently of
/// everything else.
pub fn generate_arrivals(
    rate:                 f64,
    opening_minutes:      f64,
    infection_proportion: f64,
    rng:                  &mut DayRng,
) -> SimResult<Vec<Arrival>> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(ConfigError::InvalidRate(rate).into());
    }
    let gaps = Exp::new(rate).map_err(|_| ConfigError::InvalidRate(rate))?;

    let mut arrivals = Vec::with_capacity((rate * opening_minutes).max(0.0) as usize + 1);
    let mut t = 0.0;
    loop {
        let gap: f64 = rng.sample(&gaps);
        t += gap;
        if t > opening_minutes {
            break;
        }
        arrivals.push(Arrival {
            time:       SimTime::from_minutes(t),
            infectious: rng.gen_bool(infection_proportion),
        });
    }
    Ok(arrivals)
}
