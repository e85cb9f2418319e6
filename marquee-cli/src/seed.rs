use marquee_catalog::CatalogError;
use marquee_order::BookingService;
use marquee_store::CatalogConfig;

/// Build a booking service with every configured movie in catalog order.
pub fn build_service(catalog: &CatalogConfig) -> Result<BookingService, CatalogError> {
    let mut service = BookingService::new();
    for movie in &catalog.movies {
        service.add_movie(&movie.title, &movie.genre, movie.showings.clone())?;
    }
    Ok(service)
}
