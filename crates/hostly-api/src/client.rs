// Hand-crafted async HTTP client for the Hostly admin backend.
//
// Base path: /api/
// Auth: X-API-KEY header

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{
    AmenityFeatureDto, AmenityFeatureWrite, AttachPoliciesBody, EventDto, EventWrite,
    GalleryItemDto, GalleryUploadFile, Listish, MenuItemDto, MenuItemWrite, PolicyOptionDto,
    PolicyOptionWrite, PricingSeasonDto, PricingSeasonWrite, PropertyCategoryDto,
    PropertyCategoryWrite, PropertyDto, PropertyEnvelope, PropertyPoliciesDto, PropertyTypeDto,
    PropertyTypeWrite, PropertyWrite, RoomDto, RoomWrite, TableDto, TableWrite,
};

// ── Error response shape from the backend ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Hostly admin backend.
///
/// Uses API-key authentication and communicates via JSON REST endpoints
/// under `/api/`. List responses are unwrapped through [`Listish`] so
/// callers always see a plain `Vec`.
const DEFAULT_PAGE_SIZE: usize = 50;

pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: usize,
}

impl AdminClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `X-API-KEY` as a default header on every request.
    pub fn from_api_key(
        base_url: &str,
        api_key: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        key_value.set_sensitive(true);
        headers.insert("X-API-KEY", key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self {
            http,
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the page size used when walking paginated endpoints.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Ensure the base URL ends with `/api/` so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"properties"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/`, so joining `properties/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn post_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        self.handle_empty(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = truncate_at_char_boundary(&body, 200);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidApiKey;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
                code: err.code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Collect all `{page, size}` pages into a single `Vec<T>`.
    ///
    /// The backend's paginated endpoints don't report a total count, so
    /// continuation is inferred: a short page ends the walk.
    pub async fn paginate_all<T, F, Fut>(&self, size: usize, fetch: F) -> Result<Vec<T>, Error>
    where
        F: Fn(usize, usize) -> Fut,
        Fut: Future<Output = Result<Vec<T>, Error>>,
    {
        let mut all = Vec::new();
        let mut page = 0;

        loop {
            let items = fetch(page, size).await?;
            let received = items.len();
            all.extend(items);

            if received < size {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Properties ───────────────────────────────────────────────────

    pub async fn list_properties(&self) -> Result<Vec<PropertyDto>, Error> {
        let envelopes: Listish<PropertyEnvelope> = self.get("properties").await?;
        Ok(envelopes
            .into_vec()
            .into_iter()
            .map(PropertyEnvelope::into_inner)
            .collect())
    }

    pub async fn get_property(&self, property_id: i64) -> Result<PropertyDto, Error> {
        let envelope: PropertyEnvelope = self.get(&format!("properties/{property_id}")).await?;
        Ok(envelope.into_inner())
    }

    pub async fn create_property(&self, body: &PropertyWrite) -> Result<PropertyDto, Error> {
        self.post("properties", body).await
    }

    pub async fn update_property(
        &self,
        property_id: i64,
        body: &PropertyWrite,
    ) -> Result<PropertyDto, Error> {
        self.put(&format!("properties/{property_id}"), body).await
    }

    pub async fn enable_property(&self, property_id: i64) -> Result<(), Error> {
        self.post_empty(&format!("properties/{property_id}/enable"))
            .await
    }

    pub async fn disable_property(&self, property_id: i64) -> Result<(), Error> {
        self.post_empty(&format!("properties/{property_id}/disable"))
            .await
    }

    // ── Property types & categories ──────────────────────────────────

    pub async fn list_property_types(&self) -> Result<Vec<PropertyTypeDto>, Error> {
        let list: Listish<PropertyTypeDto> = self.get("property-types").await?;
        Ok(list.into_vec())
    }

    pub async fn create_property_type(
        &self,
        body: &PropertyTypeWrite,
    ) -> Result<PropertyTypeDto, Error> {
        self.post("property-types", body).await
    }

    pub async fn update_property_type(
        &self,
        type_id: i64,
        body: &PropertyTypeWrite,
    ) -> Result<PropertyTypeDto, Error> {
        self.put(&format!("property-types/{type_id}"), body).await
    }

    pub async fn list_property_categories(&self) -> Result<Vec<PropertyCategoryDto>, Error> {
        let list: Listish<PropertyCategoryDto> = self.get("property-categories").await?;
        Ok(list.into_vec())
    }

    pub async fn create_property_category(
        &self,
        body: &PropertyCategoryWrite,
    ) -> Result<PropertyCategoryDto, Error> {
        self.post("property-categories", body).await
    }

    pub async fn update_property_category(
        &self,
        category_id: i64,
        body: &PropertyCategoryWrite,
    ) -> Result<PropertyCategoryDto, Error> {
        self.put(&format!("property-categories/{category_id}"), body)
            .await
    }

    // ── Rooms ────────────────────────────────────────────────────────

    pub async fn list_rooms(&self, property_id: i64) -> Result<Vec<RoomDto>, Error> {
        let list: Listish<RoomDto> = self
            .get_with_params("rooms", &[("propertyId", property_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    pub async fn create_room(&self, property_id: i64, body: &RoomWrite) -> Result<RoomDto, Error> {
        self.post(&format!("properties/{property_id}/rooms"), body)
            .await
    }

    pub async fn update_room(&self, room_id: i64, body: &RoomWrite) -> Result<RoomDto, Error> {
        self.put(&format!("rooms/{room_id}"), body).await
    }

    pub async fn delete_room(&self, room_id: i64) -> Result<(), Error> {
        self.delete(&format!("rooms/{room_id}")).await
    }

    // ── Amenity features ─────────────────────────────────────────────

    pub async fn list_amenity_features(&self) -> Result<Vec<AmenityFeatureDto>, Error> {
        let list: Listish<AmenityFeatureDto> = self.get("amenity-features").await?;
        Ok(list.into_vec())
    }

    pub async fn create_amenity_feature(
        &self,
        body: &AmenityFeatureWrite,
    ) -> Result<AmenityFeatureDto, Error> {
        self.post("amenity-features", body).await
    }

    /// Replace a property's linked amenity set. The body is the complete
    /// id array; the backend overwrites, it does not merge.
    pub async fn set_property_amenities(
        &self,
        property_id: i64,
        amenity_ids: &[i64],
    ) -> Result<(), Error> {
        self.post_no_response(&format!("properties/{property_id}/amenities"), &amenity_ids)
            .await
    }

    // ── Gallery ──────────────────────────────────────────────────────

    /// Fetch one page of the gallery. `property_id` is forwarded as a
    /// server-side filter; callers still post-filter defensively since
    /// older backend builds ignore the parameter.
    pub async fn list_galleries(
        &self,
        page: usize,
        size: usize,
        property_id: Option<i64>,
    ) -> Result<Vec<GalleryItemDto>, Error> {
        let mut params = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(pid) = property_id {
            params.push(("propertyId", pid.to_string()));
        }

        let list: Listish<GalleryItemDto> = self.get_with_params("galleries", &params).await?;
        Ok(list.into_vec())
    }

    /// Upload media files for a property (multipart: `files[]`,
    /// `category`, `propertyId`).
    pub async fn upload_gallery_media(
        &self,
        property_id: i64,
        category: &str,
        files: Vec<GalleryUploadFile>,
    ) -> Result<Vec<GalleryItemDto>, Error> {
        let url = self.url("galleries");
        debug!("POST {url} (multipart, {} files)", files.len());

        let mut form = reqwest::multipart::Form::new()
            .text("category", category.to_owned())
            .text("propertyId", property_id.to_string());

        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(Error::Transport)?;
            form = form.part("files", part);
        }

        let resp = self.http.post(url).multipart(form).send().await?;
        let list: Listish<GalleryItemDto> = self.handle_response(resp).await?;
        Ok(list.into_vec())
    }

    pub async fn delete_gallery_item(&self, gallery_id: i64) -> Result<(), Error> {
        self.delete(&format!("galleries/{gallery_id}")).await
    }

    // ── Policies ─────────────────────────────────────────────────────

    pub async fn list_policy_options(&self) -> Result<Vec<PolicyOptionDto>, Error> {
        let list: Listish<PolicyOptionDto> = self.get("policy-options").await?;
        Ok(list.into_vec())
    }

    pub async fn create_policy_option(
        &self,
        body: &PolicyOptionWrite,
    ) -> Result<PolicyOptionDto, Error> {
        self.post("policy-options", body).await
    }

    pub async fn get_property_policies(
        &self,
        property_id: i64,
    ) -> Result<PropertyPoliciesDto, Error> {
        self.get(&format!("properties/{property_id}/policies"))
            .await
    }

    pub async fn attach_policies(&self, body: &AttachPoliciesBody) -> Result<(), Error> {
        self.post_no_response("policies/attach", body).await
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Fetch the global event list. `location_id` is forwarded as a
    /// server-side filter; callers post-filter defensively.
    pub async fn list_events(&self, location_id: Option<i64>) -> Result<Vec<EventDto>, Error> {
        let list: Listish<EventDto> = match location_id {
            Some(lid) => {
                self.get_with_params("events", &[("locationId", lid.to_string())])
                    .await?
            }
            None => self.get("events").await?,
        };
        Ok(list.into_vec())
    }

    pub async fn create_event(&self, body: &EventWrite) -> Result<EventDto, Error> {
        self.post("events", body).await
    }

    pub async fn delete_event(&self, event_id: i64) -> Result<(), Error> {
        self.delete(&format!("events/{event_id}")).await
    }

    // ── Menu items ───────────────────────────────────────────────────

    pub async fn list_menu_items(&self, property_id: i64) -> Result<Vec<MenuItemDto>, Error> {
        let list: Listish<MenuItemDto> = self
            .get_with_params("menu-items", &[("propertyId", property_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    pub async fn create_menu_item(
        &self,
        property_id: i64,
        body: &MenuItemWrite,
    ) -> Result<MenuItemDto, Error> {
        self.post(&format!("properties/{property_id}/menu-items"), body)
            .await
    }

    pub async fn update_menu_item(
        &self,
        item_id: i64,
        body: &MenuItemWrite,
    ) -> Result<MenuItemDto, Error> {
        self.put(&format!("menu-items/{item_id}"), body).await
    }

    pub async fn delete_menu_item(&self, item_id: i64) -> Result<(), Error> {
        self.delete(&format!("menu-items/{item_id}")).await
    }

    // ── Tables ───────────────────────────────────────────────────────

    pub async fn list_tables(&self, property_id: i64) -> Result<Vec<TableDto>, Error> {
        let list: Listish<TableDto> = self
            .get_with_params("tables", &[("propertyId", property_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    pub async fn create_table(
        &self,
        property_id: i64,
        body: &TableWrite,
    ) -> Result<TableDto, Error> {
        self.post(&format!("properties/{property_id}/tables"), body)
            .await
    }

    pub async fn update_table(&self, table_id: i64, body: &TableWrite) -> Result<TableDto, Error> {
        self.put(&format!("tables/{table_id}"), body).await
    }

    pub async fn delete_table(&self, table_id: i64) -> Result<(), Error> {
        self.delete(&format!("tables/{table_id}")).await
    }

    // ── Pricing seasons ──────────────────────────────────────────────

    pub async fn list_pricing_seasons(
        &self,
        property_id: i64,
    ) -> Result<Vec<PricingSeasonDto>, Error> {
        let list: Listish<PricingSeasonDto> = self
            .get_with_params(
                "pricing-seasons",
                &[("propertyId", property_id.to_string())],
            )
            .await?;
        Ok(list.into_vec())
    }

    pub async fn create_pricing_season(
        &self,
        property_id: i64,
        body: &PricingSeasonWrite,
    ) -> Result<PricingSeasonDto, Error> {
        self.post(&format!("properties/{property_id}/pricing-seasons"), body)
            .await
    }

    pub async fn update_pricing_season(
        &self,
        season_id: i64,
        body: &PricingSeasonWrite,
    ) -> Result<PricingSeasonDto, Error> {
        self.put(&format!("pricing-seasons/{season_id}"), body)
            .await
    }

    pub async fn delete_pricing_season(&self, season_id: i64) -> Result<(), Error> {
        self.delete(&format!("pricing-seasons/{season_id}")).await
    }
}

/// Truncate to at most `max` bytes without splitting a multi-byte
/// character.
fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncation_respects_char_boundaries() {
        let ascii = "a".repeat(300);
        assert_eq!(truncate_at_char_boundary(&ascii, 200).len(), 200);

        // 199 ASCII bytes then a 3-byte character straddling the cut.
        let mixed = format!("{}日本", "x".repeat(199));
        let preview = truncate_at_char_boundary(&mixed, 200);
        assert_eq!(preview.len(), 199);
        assert!(preview.ends_with('x'));

        assert_eq!(truncate_at_char_boundary("short", 200), "short");
    }
}
