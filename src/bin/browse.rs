//! Fetches listings from a running server and prints them, exercising the
//! same client data layer the listing view uses. Falls back to the demo
//! dataset when the server cannot be reached.

use std::env;

use property_hub::client::{ListingView, PropertyClient, ViewState};

#[actix_web::main]
async fn main() {
    env_logger::init();

    let base_url =
        env::args().nth(1).unwrap_or_else(|| "http://127.0.0.1:8000".to_string());
    let search = env::args().nth(2);

    let client = PropertyClient::new(&base_url);
    let mut view = ListingView::new();
    if let Some(term) = search {
        view.edit_filters(|f| f.search = term);
    }

    let client_ref = &client;
    view.refresh(|filters| async move { client_ref.get_properties(&filters).await })
        .await;

    debug_assert_eq!(view.state(), ViewState::Ready);
    println!("{} properties available", view.properties().len());
    for property in view.properties() {
        println!(
            "#{:<4} {:<40} {:>12} {:<28} {}",
            property.id, property.title, property.price, property.location, property.listing_type
        );
    }
}
