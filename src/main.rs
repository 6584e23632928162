use actix_web::{middleware::Logger, App, HttpServer};

use config_saver::*;
use log::{error, info, warn};
use simplelog::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .map_err(std::io::Error::other)?;

    let settings = match Settings::load().await {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            return Err(std::io::Error::other(e));
        }
    };

    if !settings.can_save() {
        warn!("{TOKEN_VAR} is empty, every save request will be refused");
    }

    let (host, port) = (settings.host.clone(), settings.port);
    let reverse_proxy = settings.reverse_proxy;

    info!(
        "Writing configuration to {}",
        settings.target.display()
    );
    info!("Starting config saver on port {port}...");

    HttpServer::new(move || {
        App::new()
            .wrap(if reverse_proxy {
                Logger::new(r#"%{Forwarded}i "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#)
            } else {
                Logger::default()
            })
            .configure(api::configure(settings.clone()))
    })
    .bind((host, port))?
    .run()
    .await
}
