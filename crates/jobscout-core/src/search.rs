use url::form_urlencoded;

/// Search endpoint that serves the jobs surface
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Value of the `ibp` parameter that switches the results page to job listings
pub const JOBS_FLAG: &str = "htl;jobs";

/// Build the jobs search URL for a query and optional location.
///
/// An empty location is treated the same as no location.
pub fn build_search_url(query: &str, location: Option<&str>) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("q", query);
    params.append_pair("ibp", JOBS_FLAG);
    if let Some(location) = location.filter(|l| !l.is_empty()) {
        params.append_pair("l", location);
    }

    format!("{}?{}", SEARCH_ENDPOINT, params.finish())
}
