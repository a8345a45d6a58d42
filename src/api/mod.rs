use crate::models::{
    Booking, BookingStatus, DashboardStats, Notification, NotificationKind, Payment,
    PaymentStatus, Property, PropertyStatus, Report, Role, User,
};
use crate::storage;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Session expired. Please sign in again.".to_string(),
        }
    }

    fn http(message: String) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

/// Extracts the backend's `{ message }` from an error body.
///
/// NestJS-style validation errors carry an array of strings; the first
/// one is surfaced. A body that is not JSON, or has no usable message,
/// yields None and the caller falls back to the raw body text.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|v| v.as_str())
            .map(|s| s.to_string()),
        _ => None,
    }
}

/// Unwraps the pagination envelope `{ data: [...], total, page, lastPage }`.
/// Anything else passes through verbatim.
pub(crate) fn unwrap_envelope(value: serde_json::Value) -> serde_json::Value {
    if let Some(data) = value.get("data") {
        if data.is_array() {
            return data.clone();
        }
    }
    value
}

/// Decodes a collection defensively: a mis-shaped payload (not an array,
/// not an envelope) yields an empty list instead of an error, and rows
/// that fail to decode are skipped. List pages render "no results"
/// rather than tearing down on one bad record.
pub(crate) fn parse_list<T: DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    let unwrapped = unwrap_envelope(value);
    let Some(items) = unwrapped.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:8080".to_string();

        // Deployment injects `window.ENV.API_URL`; fall back to a local
        // backend for development.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"API_URL".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginResponse {
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBookingRequest {
    pub property_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub guest_count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePaymentRequest {
    pub booking_id: i64,
    pub provider: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReviewRequest {
    pub booking_id: i64,
    pub rating: u32,
    pub comment: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendNotificationRequest {
    pub user_id: i64,
    pub sender_id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

pub(crate) const MAX_PROPERTY_IMAGES: usize = 5;

/// Text fields of the host listing form. Images travel beside it as
/// multipart file parts, so they are not part of the struct.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PropertyForm {
    pub title: String,
    pub description: String,
    pub address: String,
    pub price_per_night: String,
}

impl PropertyForm {
    /// Validates the form and parses the price. `image_count` is the
    /// total the listing would end up with (kept plus newly picked).
    pub fn validate(&self, image_count: usize) -> Result<f64, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("Address is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }

        let price = self
            .price_per_night
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| "Price per night must be a non-negative number".to_string())?;

        if image_count == 0 {
            return Err("Add at least one photo".to_string());
        }
        if image_count > MAX_PROPERTY_IMAGES {
            return Err(format!("At most {MAX_PROPERTY_IMAGES} photos"));
        }

        Ok(price)
    }
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    #[allow(dead_code)]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    pub fn load_from_storage() -> Self {
        Self {
            base_url: EnvConfig::new().api_url,
            token: storage::load_token(),
        }
    }

    pub fn set_token(&mut self, token: String) {
        storage::save_token(&token);
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
        storage::clear_session();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn with_auth_header(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.with_auth_header(client.request(method, url));

        if let Some(b) = body {
            req = req.json(b);
        }

        Self::handle_response(req.send().await.map_err(ApiError::network)?).await
    }

    /// Multipart uploads take this explicit entry point; the transport
    /// sets its own content-type boundary.
    async fn request_multipart<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let req = self.with_auth_header(client.request(method, url)).multipart(form);

        Self::handle_response(req.send().await.map_err(ApiError::network)?).await
    }

    async fn handle_response<T: DeserializeOwned>(res: reqwest::Response) -> ApiResult<T> {
        let status = res.status();

        if status.is_success() {
            return res.json().await.map_err(ApiError::parse);
        }

        if status.as_u16() == 401 {
            return Err(ApiError::unauthorized());
        }

        let body = res.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| FALLBACK_ERROR.to_string());
        Err(ApiError::http(message))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(reqwest::Method::GET, path, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        self.request(reqwest::Method::POST, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        self.request(reqwest::Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(reqwest::Method::DELETE, path, None::<&()>)
            .await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let value: serde_json::Value = self.get(path).await?;
        Ok(parse_list(value))
    }

    // ----- auth -----

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> ApiResult<serde_json::Value> {
        self.post(
            "/auth/register",
            &RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                full_name: full_name.to_string(),
            },
        )
        .await
    }

    pub async fn fetch_profile(&self) -> ApiResult<User> {
        self.get("/users/profile").await
    }

    pub async fn update_profile(
        &self,
        full_name: &str,
        phone: &str,
        avatar: Option<(String, Vec<u8>)>,
    ) -> ApiResult<User> {
        let mut form = reqwest::multipart::Form::new()
            .text("fullName", full_name.to_string())
            .text("phone", phone.to_string());
        if let Some((file_name, bytes)) = avatar {
            form = form.part(
                "avatar",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );
        }
        self.request_multipart(reqwest::Method::PATCH, "/users/profile", form)
            .await
    }

    // ----- properties -----

    pub async fn list_properties(&self) -> ApiResult<Vec<Property>> {
        self.get_list("/properties").await
    }

    fn property_form_parts(
        form: &PropertyForm,
        images: Vec<(String, Vec<u8>)>,
    ) -> reqwest::multipart::Form {
        let mut parts = reqwest::multipart::Form::new()
            .text("title", form.title.trim().to_string())
            .text("description", form.description.trim().to_string())
            .text("address", form.address.trim().to_string())
            .text("pricePerNight", form.price_per_night.trim().to_string());
        for (file_name, bytes) in images {
            parts = parts.part(
                "images",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );
        }
        parts
    }

    pub async fn create_property(
        &self,
        form: &PropertyForm,
        images: Vec<(String, Vec<u8>)>,
    ) -> ApiResult<serde_json::Value> {
        let parts = Self::property_form_parts(form, images);
        self.request_multipart(reqwest::Method::POST, "/properties", parts)
            .await
    }

    /// Edit keeps the still-wanted stored image URLs (`existingImages`)
    /// and uploads newly picked files beside them; the backend replaces
    /// the listing's image set with the union.
    pub async fn update_property(
        &self,
        id: i64,
        form: &PropertyForm,
        new_images: Vec<(String, Vec<u8>)>,
        existing_images: &[String],
    ) -> ApiResult<serde_json::Value> {
        let mut parts = Self::property_form_parts(form, new_images);
        for url in existing_images {
            parts = parts.text("existingImages", url.clone());
        }
        self.request_multipart(reqwest::Method::PATCH, &format!("/properties/{id}"), parts)
            .await
    }

    pub async fn get_property(&self, id: i64) -> ApiResult<Property> {
        self.get(&format!("/properties/{id}")).await
    }

    pub async fn list_host_properties(&self) -> ApiResult<Vec<Property>> {
        self.get_list("/properties/host").await
    }

    pub async fn set_property_status(
        &self,
        id: i64,
        status: PropertyStatus,
    ) -> ApiResult<serde_json::Value> {
        self.patch(
            &format!("/properties/{id}"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    pub async fn delete_property(&self, id: i64) -> ApiResult<serde_json::Value> {
        self.delete(&format!("/properties/{id}")).await
    }

    // ----- bookings -----

    pub async fn list_my_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get_list("/bookings").await
    }

    pub async fn create_booking(&self, req: &CreateBookingRequest) -> ApiResult<serde_json::Value> {
        self.post("/bookings", req).await
    }

    pub async fn cancel_booking(&self, id: i64) -> ApiResult<serde_json::Value> {
        self.post(&format!("/bookings/{id}/cancel"), &serde_json::json!({}))
            .await
    }

    // ----- reviews -----

    pub async fn create_review(
        &self,
        booking_id: i64,
        rating: u32,
        comment: &str,
    ) -> ApiResult<serde_json::Value> {
        self.post(
            "/reviews",
            &CreateReviewRequest {
                booking_id,
                rating,
                comment: comment.to_string(),
            },
        )
        .await
    }

    // ----- payments -----

    pub async fn list_my_payments(&self) -> ApiResult<Vec<Payment>> {
        self.get_list("/payments").await
    }

    pub async fn create_payment(&self, booking_id: i64) -> ApiResult<serde_json::Value> {
        self.post(
            "/payments",
            &CreatePaymentRequest {
                booking_id,
                provider: "VNPAY".to_string(),
            },
        )
        .await
    }

    pub async fn set_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> ApiResult<serde_json::Value> {
        self.patch(
            &format!("/payments/{id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    // ----- notifications -----

    pub async fn list_notifications(&self) -> ApiResult<Vec<Notification>> {
        self.get_list("/notifications").await
    }

    pub async fn mark_notification_read(&self, id: i64) -> ApiResult<serde_json::Value> {
        self.patch(
            &format!("/notifications/{id}/read"),
            &serde_json::json!({}),
        )
        .await
    }

    // ----- wishlist -----

    pub async fn list_wishlist(&self) -> ApiResult<Vec<Property>> {
        self.get_list("/wishlist").await
    }

    pub async fn add_to_wishlist(&self, property_id: i64) -> ApiResult<serde_json::Value> {
        self.post(&format!("/wishlist/{property_id}"), &serde_json::json!({}))
            .await
    }

    pub async fn remove_from_wishlist(&self, property_id: i64) -> ApiResult<serde_json::Value> {
        self.delete(&format!("/wishlist/{property_id}")).await
    }

    // ----- admin -----

    pub async fn admin_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get("/admin/dashboard/stats").await
    }

    pub async fn admin_list_users(&self) -> ApiResult<Vec<User>> {
        self.get_list("/users/admin/users").await
    }

    pub async fn admin_set_user_role(&self, id: i64, role: Role) -> ApiResult<serde_json::Value> {
        self.patch(
            &format!("/users/role/{id}"),
            &serde_json::json!({ "role": role }),
        )
        .await
    }

    pub async fn admin_set_user_verified(
        &self,
        id: i64,
        is_verified: bool,
    ) -> ApiResult<serde_json::Value> {
        self.patch(
            &format!("/users/verify/{id}"),
            &serde_json::json!({ "isVerified": is_verified }),
        )
        .await
    }

    pub async fn admin_list_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get_list("/bookings/admin").await
    }

    pub async fn admin_set_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> ApiResult<serde_json::Value> {
        self.patch(
            &format!("/bookings/{id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    pub async fn admin_list_properties(&self) -> ApiResult<Vec<Property>> {
        self.get_list("/properties/admin").await
    }

    pub async fn admin_list_payments(&self) -> ApiResult<Vec<Payment>> {
        self.get_list("/payments/admin").await
    }

    pub async fn admin_list_notifications(&self) -> ApiResult<Vec<Notification>> {
        self.get_list("/notifications/admin").await
    }

    pub async fn admin_send_notification(
        &self,
        req: &SendNotificationRequest,
    ) -> ApiResult<serde_json::Value> {
        self.post("/notifications/admin", req).await
    }

    pub async fn admin_list_reports(&self) -> ApiResult<Vec<Report>> {
        self.get_list("/reports/admin").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Property;

    #[test]
    fn envelope_unwraps_to_inner_array() {
        let value = serde_json::json!({
            "data": [{"id": 1}, {"id": 2}],
            "total": 5,
            "page": 1,
            "lastPage": 3
        });
        let unwrapped = unwrap_envelope(value);
        assert!(unwrapped.is_array());
        assert_eq!(unwrapped.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn bare_array_passes_through() {
        let value = serde_json::json!([{"id": 1}]);
        assert_eq!(unwrap_envelope(value.clone()), value);
    }

    #[test]
    fn object_without_data_array_passes_through() {
        let value = serde_json::json!({"data": "not-an-array", "id": 9});
        assert_eq!(unwrap_envelope(value.clone()), value);
    }

    #[test]
    fn parse_list_handles_malformed_payloads() {
        // A list-expecting caller must never blow up on a mis-shaped
        // response; it renders an empty list instead.
        assert!(parse_list::<Property>(serde_json::json!({"message": "oops"})).is_empty());
        assert!(parse_list::<Property>(serde_json::json!(null)).is_empty());
        assert!(parse_list::<Property>(serde_json::json!("text")).is_empty());
    }

    #[test]
    fn parse_list_skips_undecodable_rows() {
        let value = serde_json::json!([
            {
                "id": 1,
                "title": "Garden villa",
                "pricePerNight": 900000,
                "address": "Hoi An",
                "status": "ACTIVE"
            },
            {"id": "bogus"}
        ]);
        let properties: Vec<Property> = parse_list(value);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].title, "Garden villa");
    }

    #[test]
    fn parse_list_unwraps_envelope_first() {
        let value = serde_json::json!({
            "data": [{
                "id": 3,
                "title": "Loft",
                "pricePerNight": 700000,
                "address": "Hue",
                "status": "INACTIVE"
            }],
            "total": 1
        });
        let properties: Vec<Property> = parse_list(value);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, 3);
    }

    #[test]
    fn error_message_from_string_body() {
        assert_eq!(
            extract_error_message(r#"{"message": "Room is already booked"}"#),
            Some("Room is already booked".to_string())
        );
    }

    #[test]
    fn error_message_from_array_takes_first() {
        assert_eq!(
            extract_error_message(r#"{"message": ["checkIn must be a date", "guestCount too large"]}"#),
            Some("checkIn must be a date".to_string())
        );
    }

    #[test]
    fn error_message_fallbacks() {
        assert_eq!(extract_error_message("not json"), None);
        assert_eq!(extract_error_message(r#"{"error": "x"}"#), None);
        assert_eq!(extract_error_message(r#"{"message": ""}"#), None);
        assert_eq!(extract_error_message(r#"{"message": 42}"#), None);
    }

    #[test]
    fn login_request_serializes_plain_fields() {
        let req = LoginRequest {
            email: "an@example.com".to_string(),
            password: "secret".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["email"], "an@example.com");
        assert_eq!(v["password"], "secret");
    }

    #[test]
    fn register_request_uses_camel_case() {
        let req = RegisterRequest {
            email: "an@example.com".to_string(),
            password: "secret".to_string(),
            full_name: "Nguyen Van An".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["fullName"], "Nguyen Van An");
        assert!(v.get("full_name").is_none());
    }

    #[test]
    fn create_booking_request_contract() {
        let req = CreateBookingRequest {
            property_id: 3,
            check_in: "2026-01-30".to_string(),
            check_out: "2026-01-31".to_string(),
            guest_count: 2,
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["propertyId"], 3);
        assert_eq!(v["checkIn"], "2026-01-30");
        assert_eq!(v["guestCount"], 2);
    }

    #[test]
    fn create_review_request_contract() {
        let req = CreateReviewRequest {
            booking_id: 12,
            rating: 4,
            comment: "Quiet and clean".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["bookingId"], 12);
        assert_eq!(v["rating"], 4);
        assert_eq!(v["comment"], "Quiet and clean");
    }

    #[test]
    fn send_notification_request_contract() {
        let req = SendNotificationRequest {
            user_id: 7,
            sender_id: 1,
            title: "Payout schedule".to_string(),
            message: "Payouts move to Mondays next month.".to_string(),
            kind: NotificationKind::System,
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["userId"], 7);
        assert_eq!(v["senderId"], 1);
        assert_eq!(v["type"], "SYSTEM");
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn listing_form_requires_every_field() {
        let valid = PropertyForm {
            title: "Garden villa".to_string(),
            description: "Two bedrooms by the river".to_string(),
            address: "Hoi An".to_string(),
            price_per_night: "900000".to_string(),
        };
        assert_eq!(valid.validate(2), Ok(900000.0));

        let mut form = valid.clone();
        form.title = "   ".to_string();
        assert_eq!(form.validate(2), Err("Title is required".to_string()));

        let mut form = valid.clone();
        form.address.clear();
        assert_eq!(form.validate(2), Err("Address is required".to_string()));

        let mut form = valid.clone();
        form.description.clear();
        assert_eq!(form.validate(2), Err("Description is required".to_string()));
    }

    #[test]
    fn listing_form_price_must_be_a_non_negative_number() {
        let mut form = PropertyForm {
            title: "Loft".to_string(),
            description: "City center".to_string(),
            address: "Hue".to_string(),
            price_per_night: "cheap".to_string(),
        };
        assert!(form.validate(1).is_err());

        form.price_per_night = "-100".to_string();
        assert!(form.validate(1).is_err());

        form.price_per_night = " 700000 ".to_string();
        assert_eq!(form.validate(1), Ok(700000.0));
    }

    #[test]
    fn listing_form_bounds_the_photo_count() {
        let form = PropertyForm {
            title: "Loft".to_string(),
            description: "City center".to_string(),
            address: "Hue".to_string(),
            price_per_night: "700000".to_string(),
        };
        assert_eq!(form.validate(0), Err("Add at least one photo".to_string()));
        assert!(form.validate(MAX_PROPERTY_IMAGES).is_ok());
        assert!(form.validate(MAX_PROPERTY_IMAGES + 1).is_err());
    }

    #[test]
    fn api_client_token_state() {
        let client = ApiClient::new("http://localhost:8080".to_string());
        assert!(!client.is_authenticated());
        assert!(client.token.is_none());
    }
}
