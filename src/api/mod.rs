use actix_web::{web, Scope};

use crate::{ConfigStore, Settings};

mod save;

pub fn scope() -> Scope {
    Scope::new("/api").service(save::resource())
}

/// Registers shared state and routes; call once per worker.
pub fn configure(settings: Settings) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let store = ConfigStore::new(settings.target.clone());

        cfg.app_data(web::Data::new(settings))
            .app_data(web::Data::new(store))
            .service(scope());
    }
}
