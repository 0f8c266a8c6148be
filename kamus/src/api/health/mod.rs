use actix_web::{web, Scope};

mod endpoints;

pub use endpoints::*;


pub fn health_router() -> Scope {
    web::scope("/health").service(ping)
}
