#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use flexi_logger::Logger;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use log::{error, info};
    use portfolio_site::{app::*, content};

    let _logger = match Logger::try_with_env_or_str("info").and_then(|l| l.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("couldn't start logger: {e}");
            None
        }
    };

    // Embedded content is part of the binary; refuse to serve a broken build.
    if let Err(e) = content::portfolio() {
        error!("{e}");
        std::process::exit(1);
    }

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
