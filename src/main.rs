use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use storefront_backend::config::Settings;
use storefront_backend::db::connection::init_pool;
use storefront_backend::uploads::ImageStore;
use storefront_backend::{routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().expect("Invalid configuration");
    let image_store = ImageStore::from_settings(&settings)?;
    let pool = init_pool(&settings);

    let state = web::Data::new(AppState {
        pool,
        image_store: image_store.clone(),
    });

    log::info!("Server running on port {}", settings.port);

    let port = settings.port;
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(100 * 1024))
            .configure(routes);

        if let Some(dir) = image_store.served_dir() {
            app = app.service(Files::new("/uploads", dir));
        }

        app
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
