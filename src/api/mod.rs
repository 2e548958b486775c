mod chain;
mod health;
mod mining;
pub mod models;
mod nodes;
mod tx;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::validate)
            .service(tx::post_transaction)
            .service(tx::get_pending)
            .service(mining::mine)
            .service(nodes::register_node)
            .service(nodes::resolve_conflicts),
    );
}
