//! Error raised by every read-side catalogue port.

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Errors raised while reading fixture tables.
    pub enum CatalogueReadError {
        /// The backing table cannot be reached.
        Unavailable { message: String } =>
            "catalogue table unavailable: {message}",
        /// The backing table holds data that violates its invariants.
        Corrupt { message: String } =>
            "catalogue table corrupt: {message}",
    }
}

impl From<CatalogueReadError> for Error {
    fn from(err: CatalogueReadError) -> Self {
        match err {
            CatalogueReadError::Unavailable { message } => {
                Error::service_unavailable(format!("catalogue unavailable: {message}"))
            }
            CatalogueReadError::Corrupt { message } => {
                Error::internal(format!("catalogue corrupt: {message}"))
            }
        }
    }
}
