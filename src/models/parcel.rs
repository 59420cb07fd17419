//! Parcel type.

use serde::Serialize;

use crate::error::{FleetError, Result};

/// A parcel to be delivered from a source city to a destination city.
///
/// Parcels are immutable once created. IDs are assigned by the caller and
/// are expected to be unique; this is not checked.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Parcel;
///
/// let p = Parcel::new(1, 5, "Buffalo", "Hamilton").unwrap();
/// assert_eq!(p.id(), 1);
/// assert_eq!(p.volume(), 5);
/// assert_eq!(p.destination(), "Hamilton");
///
/// assert!(Parcel::new(2, 0, "Buffalo", "Hamilton").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parcel {
    id: usize,
    volume: u32,
    source: String,
    destination: String,
}

impl Parcel {
    /// Creates a new parcel.
    ///
    /// Returns [`FleetError::InvalidVolume`] if `volume` is zero.
    pub fn new(
        id: usize,
        volume: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self> {
        if volume == 0 {
            return Err(FleetError::InvalidVolume { id });
        }
        Ok(Self {
            id,
            volume,
            source: source.into(),
            destination: destination.into(),
        })
    }

    /// Parcel ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Volume occupied in a truck's cargo compartment.
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// City the parcel is picked up from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// City the parcel is delivered to.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_new() {
        let p = Parcel::new(27, 5, "Toronto", "Hamilton").expect("valid");
        assert_eq!(p.id(), 27);
        assert_eq!(p.volume(), 5);
        assert_eq!(p.source(), "Toronto");
        assert_eq!(p.destination(), "Hamilton");
    }

    #[test]
    fn test_parcel_zero_volume() {
        assert_eq!(
            Parcel::new(3, 0, "New York", "Windsor"),
            Err(FleetError::InvalidVolume { id: 3 })
        );
    }
}
