//! Error type shared by the distance map and the fleet model.

use thiserror::Error;

/// Errors raised when an operation's precondition does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// A parcel was created with zero volume.
    #[error("parcel {id} must have a positive volume")]
    InvalidVolume {
        /// Parcel ID.
        id: usize,
    },
    /// A truck was created with zero capacity.
    #[error("truck {id} must have a positive capacity")]
    InvalidCapacity {
        /// Truck ID.
        id: usize,
    },
    /// A distance of zero was supplied for a city pair.
    #[error("distance from {from} to {to} must be positive")]
    InvalidDistance {
        /// Origin city.
        from: String,
        /// Destination city.
        to: String,
    },
    /// A distance was recorded between a city and itself.
    #[error("cannot record a distance from {0} to itself")]
    SameCity(String),
    /// No distance is stored for the directed pair.
    #[error("no distance recorded from {from} to {to}")]
    UnknownDistance {
        /// Origin city.
        from: String,
        /// Destination city.
        to: String,
    },
    /// An average over loaded trucks was requested but every truck is empty.
    #[error("fleet has no non-empty trucks")]
    NoNonEmptyTrucks,
    /// An average over travelling trucks was requested but none left the depot.
    #[error("no truck in the fleet has travelled")]
    NoTravelledTrucks,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FleetError>;
