//! Cable length tracking.
//!
//! Provides the current length of one cable as an offset from its calibrated
//! home length.

use crate::config::units::Meters;

/// Length model of a single cable.
///
/// Holds no knowledge of encoders: the owning winch converts counts
/// travelled since homing into a length delta and hands it over. No range
/// checks are performed here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cable {
    /// Cable length at the homing pose.
    home_length: Meters,
    /// Cable length as of the last refresh.
    length: Meters,
}

impl Cable {
    /// Create a cable with the given home length, currently at that length.
    #[inline]
    pub fn new(home_length: Meters) -> Self {
        Self {
            home_length,
            length: home_length,
        }
    }

    /// Set `length = home_length + delta`.
    #[inline]
    pub fn update_length(&mut self, delta: Meters) {
        self.length = self.home_length + delta;
    }

    /// Update the length from a delta since homing and return it.
    #[inline]
    pub fn refresh(&mut self, delta: Meters) -> Meters {
        self.update_length(delta);
        self.length
    }

    /// Length as of the last refresh.
    #[inline]
    pub fn current(&self) -> Meters {
        self.length
    }

    /// Get the home length.
    #[inline]
    pub fn home_length(&self) -> Meters {
        self.home_length
    }

    /// Overwrite the home length.
    ///
    /// `current()` keeps its previous value until the next refresh.
    #[inline]
    pub fn set_home_length(&mut self, home_length: Meters) {
        self.home_length = home_length;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_tracks_delta() {
        let mut cable = Cable::new(Meters(1.5));
        assert_eq!(cable.current(), Meters(1.5));

        assert_eq!(cable.refresh(Meters(0.25)), Meters(1.75));
        assert_eq!(cable.current(), Meters(1.75));

        cable.update_length(Meters(-0.5));
        assert_eq!(cable.current(), Meters(1.0));
    }

    #[test]
    fn test_set_home_length_is_not_retroactive() {
        let mut cable = Cable::new(Meters(1.0));
        cable.refresh(Meters(0.1));

        cable.set_home_length(Meters(2.0));
        assert_eq!(cable.home_length(), Meters(2.0));
        assert!((cable.current().0 - 1.1).abs() < 1e-12);

        assert!((cable.refresh(Meters(0.1)).0 - 2.1).abs() < 1e-12);
    }
}
