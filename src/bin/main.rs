// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - Gallery configuration shared with the video server function
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use pediatric_site::site::app::{shell, App as WebApp};
    use pediatric_site::site::config::GalleryConfig;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables and the YouTube settings
    let gallery_config = GalleryConfig::from_env();
    if gallery_config.is_configured() {
        tracing::info!(
            "Video gallery configured for channel {}",
            gallery_config.channel_handle
        );
    } else {
        tracing::warn!("YOUTUBE_API_KEY not set; the video page will show sample content");
    }

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.to_string();

        App::new()
            // Share the gallery settings with server functions
            .app_data(web::Data::new(gallery_config.clone()))
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with the HTML shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || shell(leptos_options.clone())
            })
            // Everything else in the site root (favicon, images)
            .service(Files::new("/", site_root_str.as_str()))
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
