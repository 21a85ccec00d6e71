//! Percussive envelope: smoothed attack into an exponential decay.

use std::f64::consts::FRAC_PI_2;

/// Absolute amplitude the decay reaches at the end of the tone.
pub const DECAY_FLOOR: f64 = 0.01;

/// Minimum number of full wave cycles covered by the attack ramp.
const ATTACK_CYCLES: f64 = 4.0;
/// Attack ramp bounds in seconds.
const MIN_ATTACK: f64 = 0.025;
const MAX_ATTACK: f64 = 0.06;

/// Envelope for a single struck/plucked tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Peak volume (0, 1].
    pub peak: f64,
    /// Tone length in seconds; the decay reaches [`DECAY_FLOOR`] here.
    pub duration: f64,
    /// Attack ramp length in seconds. Zero disables the ramp.
    pub attack: f64,
}

impl Envelope {
    pub fn new(peak: f64, duration: f64, attack: f64) -> Self {
        Envelope {
            peak,
            duration,
            attack,
        }
    }

    /// Envelope for a tone at `frequency`, with the attack derived from it.
    pub fn for_tone(frequency: f64, duration: f64, peak: f64) -> Self {
        Envelope::new(peak, duration, attack_for(frequency))
    }

    /// Exponential decay rate that takes `peak` down to the floor over `duration`.
    pub fn decay_rate(&self) -> f64 {
        (self.peak / DECAY_FLOOR).ln() / self.duration
    }

    /// Gain multiplier at time `t` seconds after onset.
    pub fn gain(&self, t: f64) -> f64 {
        self.peak * (-self.decay_rate() * t).exp() * self.attack_multiplier(t)
    }

    /// Sine-squared ease-in over the attack, 1 afterwards.
    fn attack_multiplier(&self, t: f64) -> f64 {
        if t < self.attack {
            (FRAC_PI_2 * t / self.attack).sin().powi(2)
        } else {
            1.0
        }
    }
}

/// Gain at `t` for a tone of `total_duration` peaking at `peak_volume`.
pub fn gain(t: f64, total_duration: f64, peak_volume: f64, attack_time: f64) -> f64 {
    Envelope::new(peak_volume, total_duration, attack_time).gain(t)
}

/// Attack length for a tone: at least four cycles, kept within 25–60 ms.
///
/// Low notes need a longer ramp so the first cycles are not distorted,
/// high notes must not be smeared by a ramp far longer than their period.
pub fn attack_for(frequency: f64) -> f64 {
    (ATTACK_CYCLES / frequency).clamp(MIN_ATTACK, MAX_ATTACK)
}
