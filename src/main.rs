#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::config::ContactConfig;
    use portfolio_site::contact;
    use tower_http::{cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::EnvFilter;

    // A missing .env file is fine; the environment may be set directly
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let contact_config = ContactConfig::from_env();
    tracing::info!(recipient = %contact_config.recipient, "contact relay configured");
    let relay = contact_config.relay();

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let relay = relay.clone();
                move || provide_context(relay.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .merge(contact::api::router(relay))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
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
