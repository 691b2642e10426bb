mod graphql;
mod health_check;

pub use graphql::*;
pub use health_check::*;
