mod form;
mod relay;

pub use form::{ContactField, ContactForm, ContactPayload, FormError};
pub use relay::{ContactRelay, OutboxRelay};
