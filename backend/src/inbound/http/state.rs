//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AdminLoginService, BookingCommand, BookingQuery, LoginService, SignupService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub admin_login: Arc<dyn AdminLoginService>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
}

impl HttpState {
    /// Build state from one credential service and one booking service.
    ///
    /// Each service is shared behind the ports it implements.
    pub fn from_services<C, B>(credentials: Arc<C>, bookings: Arc<B>) -> Self
    where
        C: SignupService + LoginService + AdminLoginService + 'static,
        B: BookingCommand + BookingQuery + 'static,
    {
        Self {
            signup: credentials.clone(),
            login: credentials.clone(),
            admin_login: credentials,
            bookings: bookings.clone(),
            bookings_query: bookings,
        }
    }
}
