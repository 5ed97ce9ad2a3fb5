pub mod customer_context;

pub use customer_context::{customer_context_middleware, CustomerContext, X_CUSTOMER_ID};
