// Storefront web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - Store configuration from the environment (and `.env`), passed to the
//   browser in the page shell
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;
    use storefront::web_app::api::catalog::{catalog, init_catalog, CatalogProvider, StaticCatalog};
    use storefront::web_app::app::App as WebApp;
    use storefront::web_app::bootstrap::{StoreBootstrap, BOOTSTRAP_ELEMENT_ID};
    use storefront::web_app::config::StoreConfig;
    use tracing_subscriber::EnvFilter;

    // Load environment variables before anything reads them
    dotenv::dotenv().ok();

    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store_config = StoreConfig::from_env().context("invalid store configuration")?;
    tracing::info!(
        tax_rate = %store_config.pricing.tax_rate,
        flat_shipping = %store_config.pricing.flat_shipping,
        low_stock_threshold = store_config.low_stock_threshold,
        "Store configuration loaded"
    );

    match &store_config.catalog_path {
        Some(path) => {
            let loaded = StaticCatalog::from_path(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            tracing::info!("Using catalog file {}", path.display());
            init_catalog(loaded);
        }
        None => {
            tracing::info!("Using bundled catalog");
            init_catalog(StaticCatalog::bundled());
        }
    }
    tracing::info!(
        products = catalog().list_all().len(),
        categories = catalog().categories().len(),
        "Catalog ready"
    );

    // The browser renders from the same config and catalog as the server
    let bootstrap_json = StoreBootstrap::new(store_config.clone(), catalog())
        .to_script_json()
        .context("could not serialize store bootstrap")?;

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let store_config = store_config.clone();
        let bootstrap_json = bootstrap_json.clone();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Product and category images
            .service(Files::new("/images", format!("{site_root_str}/images")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    provide_context(store_config.clone());
                    let bootstrap_json = bootstrap_json.clone();
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                                <script type="application/json" id=BOOTSTRAP_ELEMENT_ID inner_html=bootstrap_json></script>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
