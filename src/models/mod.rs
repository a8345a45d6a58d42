use serde::{Deserialize, Serialize};

/// Entity mirrors for the booking backend.
///
/// The backend owns every record's lifecycle; the client only caches
/// collections in memory for the duration of a page view. Field names
/// follow the backend's camelCase JSON.

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum Role {
    Guest,
    Host,
    Admin,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum PropertyStatus {
    Active,
    Inactive,
    Maintenance,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Property {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub cleaning_fee: f64,
    pub address: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    pub status: PropertyStatus,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub owner: Option<User>,
    /// Only the detail endpoint embeds reviews; list endpoints omit them.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Review {
    pub id: i64,
    pub rating: u32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_max_guests() -> u32 {
    1
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Refunded,
}

/// Price fields are a snapshot taken by the backend at booking time.
/// The client never recomputes them except as a pre-submit estimate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Booking {
    pub id: i64,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub nightly_price: f64,
    #[serde(default)]
    pub cleaning_fee: f64,
    #[serde(default)]
    pub service_fee: f64,
    pub total_price: f64,
    pub status: BookingStatus,
    pub property_id: i64,
    /// Set by the backend once the guest has reviewed this stay.
    #[serde(default)]
    pub has_reviewed: bool,
    #[serde(default)]
    pub guest_id: Option<i64>,
    #[serde(default)]
    pub property: Option<Property>,
    #[serde(default)]
    pub guest: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum PaymentStatus {
    Pending,
    Success,
    Failed,
    Refunded,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Payment {
    pub id: i64,
    pub amount: f64,
    pub provider: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub transaction_code: Option<String>,
    pub booking_id: i64,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub booking: Option<Booking>,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum NotificationKind {
    System,
    Booking,
    Payment,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum ReportKind {
    Report,
    Complaint,
    Violation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Report {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub total_properties: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_contract_deserialize() {
        let json = r#"{
            "id": 7,
            "email": "an@example.com",
            "fullName": "Nguyen Van An",
            "role": "HOST",
            "phone": "0900000000",
            "isVerified": true
        }"#;
        let user: User = serde_json::from_str(json).expect("user should parse");
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Host);
        assert!(user.is_verified);
        assert!(user.avatar.is_none());
    }

    #[test]
    fn booking_contract_deserialize_with_relations() {
        let json = r#"{
            "id": 12,
            "checkIn": "2026-01-30T00:00:00.000Z",
            "checkOut": "2026-01-31T00:00:00.000Z",
            "guestCount": 2,
            "nightlyPrice": 1000000,
            "cleaningFee": 200000,
            "serviceFee": 100000,
            "totalPrice": 1300000,
            "status": "PENDING",
            "propertyId": 3,
            "guestId": 7,
            "property": {
                "id": 3,
                "title": "Riverside studio",
                "pricePerNight": 1000000,
                "address": "Da Nang",
                "maxGuests": 2,
                "status": "ACTIVE"
            },
            "guest": {"id": 7, "email": "an@example.com", "fullName": "Nguyen Van An", "role": "GUEST"}
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("booking should parse");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, 1_300_000.0);
        assert_eq!(booking.property.as_ref().map(|p| p.id), Some(3));
        assert_eq!(
            booking.guest.as_ref().map(|g| g.full_name.as_str()),
            Some("Nguyen Van An")
        );
    }

    #[test]
    fn booking_without_relations_still_parses() {
        // Some endpoints omit the embedded property/guest objects.
        let json = r#"{
            "id": 1,
            "checkIn": "2026-02-01",
            "checkOut": "2026-02-03",
            "totalPrice": 0,
            "status": "CANCELLED",
            "propertyId": 9
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("booking should parse");
        assert!(booking.property.is_none());
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn property_detail_embeds_reviews() {
        let json = r#"{
            "id": 3,
            "title": "Riverside studio",
            "pricePerNight": 1000000,
            "address": "Da Nang",
            "status": "ACTIVE",
            "reviews": [
                {
                    "id": 1,
                    "rating": 5,
                    "comment": "Spotless and quiet.",
                    "createdAt": "2026-02-10T08:00:00.000Z",
                    "user": {"id": 7, "email": "an@example.com", "fullName": "Nguyen Van An", "role": "GUEST"}
                }
            ]
        }"#;
        let property: Property = serde_json::from_str(json).expect("property should parse");
        assert_eq!(property.reviews.len(), 1);
        assert_eq!(property.reviews[0].rating, 5);

        // List endpoints omit the field entirely.
        let json = r#"{
            "id": 4,
            "title": "Loft",
            "pricePerNight": 700000,
            "address": "Hue",
            "status": "ACTIVE"
        }"#;
        let property: Property = serde_json::from_str(json).expect("property should parse");
        assert!(property.reviews.is_empty());
    }

    #[test]
    fn booking_reviewed_flag_defaults_to_false() {
        let json = r#"{
            "id": 1,
            "checkIn": "2026-02-01",
            "checkOut": "2026-02-03",
            "totalPrice": 0,
            "status": "COMPLETED",
            "propertyId": 9,
            "hasReviewed": true
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("booking should parse");
        assert!(booking.has_reviewed);

        let json = r#"{
            "id": 2,
            "checkIn": "2026-02-01",
            "checkOut": "2026-02-03",
            "totalPrice": 0,
            "status": "COMPLETED",
            "propertyId": 9
        }"#;
        let booking: Booking = serde_json::from_str(json).expect("booking should parse");
        assert!(!booking.has_reviewed);
    }

    #[test]
    fn notification_type_field_maps_to_kind() {
        let json = r#"{
            "id": 4,
            "title": "Payment received",
            "message": "Your payment for booking #12 succeeded.",
            "type": "PAYMENT",
            "isRead": false
        }"#;
        let n: Notification = serde_json::from_str(json).expect("notification should parse");
        assert_eq!(n.kind, NotificationKind::Payment);
        assert!(!n.is_read);
    }

    #[test]
    fn status_enums_round_trip_through_select_values() {
        // Filter <select> values are plain backend enum strings.
        use std::str::FromStr;
        assert_eq!(BookingStatus::Pending.to_string(), "PENDING");
        assert_eq!(
            BookingStatus::from_str("REFUNDED").expect("valid status"),
            BookingStatus::Refunded
        );
        assert_eq!(PropertyStatus::Maintenance.to_string(), "MAINTENANCE");
        assert_eq!(PaymentStatus::Success.to_string(), "SUCCESS");
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert!(BookingStatus::from_str("pending").is_err());
    }

    #[test]
    fn dashboard_stats_tolerates_missing_fields() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalUsers": 10}"#).expect("stats should parse");
        assert_eq!(stats.total_users, 10);
        assert_eq!(stats.total_revenue, 0.0);
    }
}
