pub mod identity;
pub mod request_id;

pub use identity::{
    identity_middleware, CurrentUser, FixedIdentityResolver, HeaderIdentityResolver,
    IdentityResolver,
};
pub use request_id::request_id_middleware;
