//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockAdminLoginService, MockBookingCommand, MockBookingQuery, MockLoginService,
    MockSignupService,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Mock driving ports. Set expectations on the ports a test exercises and
/// leave the rest untouched so unexpected calls panic.
#[derive(Default)]
pub struct MockPorts {
    pub signup: MockSignupService,
    pub login: MockLoginService,
    pub admin_login: MockAdminLoginService,
    pub bookings: MockBookingCommand,
    pub bookings_query: MockBookingQuery,
}

impl MockPorts {
    /// Move the mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState {
            signup: Arc::new(self.signup),
            login: Arc::new(self.login),
            admin_login: Arc::new(self.admin_login),
            bookings: Arc::new(self.bookings),
            bookings_query: Arc::new(self.bookings_query),
        }
    }
}

/// Build an app with every API route registered over the given mocks.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .configure(configure)
}
