// Fragment service
// Fetches static HTML fragments for `#target:page` routes

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

use crate::models::ui::FragmentRoute;

/// Fragments loaded into every page regardless of the location hash.
const STATIC_FRAGMENTS: [&str; 3] = ["footer", "banner", "categories"];

pub struct FragmentLoader {
    base_url: Url,
    client: Client,
}

impl FragmentLoader {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("invalid fragment base URL {base_url}"))?;
        // Without a trailing slash `join` would replace the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    /// The footer, banner and categories fragments, each loaded into the
    /// element of the same name.
    pub fn static_fragments() -> Vec<FragmentRoute> {
        STATIC_FRAGMENTS
            .iter()
            .map(|name| FragmentRoute::new(*name, *name))
            .collect()
    }

    /// Everything one page load pulls in: the static fragments, then the
    /// route from the location hash when there is one.
    pub fn page_fragments(hash_route: Option<FragmentRoute>) -> Vec<FragmentRoute> {
        let mut routes = Self::static_fragments();
        routes.extend(hash_route);
        routes
    }

    pub fn url_for(&self, route: &FragmentRoute) -> Result<Url> {
        self.base_url
            .join(&route.file_name())
            .with_context(|| format!("cannot resolve fragment {route}"))
    }

    /// GET the fragment. Non-200 responses yield `Ok(None)`.
    pub fn fetch(&self, route: &FragmentRoute) -> Result<Option<String>> {
        let url = self.url_for(route)?;
        log::debug!("Fetching fragment {} from {}", route, url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("failed to request {url}"))?;

        if response.status() != StatusCode::OK {
            log::warn!("Fragment {} returned HTTP {}", url, response.status());
            return Ok(None);
        }

        let body = response
            .text()
            .with_context(|| format!("failed to read body of {url}"))?;
        Ok(Some(body))
    }

    /// Fetch every route in order, skipping the ones that are not available.
    pub fn fetch_all(&self, routes: &[FragmentRoute]) -> Result<Vec<(FragmentRoute, String)>> {
        let mut loaded = Vec::with_capacity(routes.len());
        for route in routes {
            if let Some(body) = self.fetch(route)? {
                loaded.push((route.clone(), body));
            }
        }
        log::info!("Loaded {} of {} fragment(s)", loaded.len(), routes.len());
        Ok(loaded)
    }
}
