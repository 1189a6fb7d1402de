//! Record schemas for the eight resource kinds.
//!
//! Field names follow the wire format (camelCase). Fields without a
//! `#[serde(default)]` are required: a create or update body missing one
//! of them is rejected at the deserialization boundary.

use crate::kind::ResourceKind;
use crate::record::ResourceRecord;
use serde::{Deserialize, Serialize};

/// Placeholder portrait used when a member is created without an image.
pub const DEFAULT_MEMBER_IMAGE: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// Placeholder photo used when an activity is created without an image.
pub const DEFAULT_ACTIVITY_IMAGE: &str =
    "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400&h=300&fit=crop";

/// Placeholder photo used when an experience is created without an image.
pub const DEFAULT_EXPERIENCE_IMAGE: &str =
    "https://images.unsplash.com/photo-1579952363873-27d3bfad9c0d?w=400&h=300&fit=crop";

fn default_member_image() -> String {
    DEFAULT_MEMBER_IMAGE.to_string()
}

fn default_activity_image() -> String {
    DEFAULT_ACTIVITY_IMAGE.to_string()
}

fn default_experience_image() -> String {
    DEFAULT_EXPERIENCE_IMAGE.to_string()
}

fn default_activity_type() -> String {
    "match".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

/// A club member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Full name.
    pub name: String,
    /// Email or other contact address.
    pub contact: String,
    /// Phone number.
    pub phone: String,
    /// Date the member joined, `YYYY-MM-DD`.
    pub join_date: String,
    /// Role within the club (player, coach, treasurer, …).
    pub role: String,
    /// Portrait URL; a fixed placeholder when omitted.
    #[serde(default = "default_member_image")]
    pub image: String,
}

impl ResourceRecord for Member {
    const KIND: ResourceKind = ResourceKind::Members;
}

/// Lifecycle status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Scheduled but not yet held.
    #[default]
    Upcoming,
    /// Held within the recent past.
    Recent,
    /// Finished and archived.
    Completed,
}

/// A club activity: a match, training session, or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Headline shown in listings.
    pub title: String,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, free-form.
    pub time: String,
    /// Longer description.
    pub description: String,
    /// Cover photo URL; a fixed placeholder when omitted.
    #[serde(default = "default_activity_image")]
    pub image: String,
    /// Lifecycle status; `upcoming` when omitted.
    #[serde(default)]
    pub status: ActivityStatus,
    /// Free-form category; `match` when omitted.
    #[serde(rename = "type", default = "default_activity_type")]
    pub activity_type: String,
    /// Display priority; `medium` when omitted.
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Optional link target for the listing card.
    #[serde(default)]
    pub redirect_url: String,
    /// Whether the link opens in a new tab.
    #[serde(default)]
    pub open_new_tab: bool,
}

impl ResourceRecord for Activity {
    const KIND: ResourceKind = ResourceKind::Activities;
}

/// An incoming donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Name of the donor.
    pub donor_name: String,
    /// Donated amount.
    pub amount: f64,
    /// Date received, `YYYY-MM-DD`.
    pub date: String,
    /// What the donation is for.
    pub purpose: String,
}

impl ResourceRecord for Donation {
    const KIND: ResourceKind = ResourceKind::Donations;
}

/// An outgoing expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// What was paid for.
    pub description: String,
    /// Amount spent.
    pub amount: f64,
    /// Date paid, `YYYY-MM-DD`.
    pub date: String,
    /// Budget category.
    pub category: String,
    /// Who was paid.
    pub vendor: String,
    /// How it was paid (cash, transfer, …).
    pub payment_method: String,
}

impl ResourceRecord for Expense {
    const KIND: ResourceKind = ResourceKind::Expenses;
}

/// A long-form story or match report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Headline.
    pub title: String,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Body text.
    pub description: String,
    /// Cover photo URL; a fixed placeholder when omitted.
    #[serde(default = "default_experience_image")]
    pub image: String,
}

impl ResourceRecord for Experience {
    const KIND: ResourceKind = ResourceKind::Experiences;
}

/// A gallery photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Caption.
    pub title: String,
    /// Photo URL.
    pub url: String,
    /// Album name; empty when the photo is unsorted.
    #[serde(default)]
    pub album: String,
    /// Whether the photo is pinned to the top-five strip.
    #[serde(default)]
    pub is_top_five: bool,
    /// Sort position within its album.
    #[serde(default)]
    pub order: i64,
}

impl ResourceRecord for GalleryItem {
    const KIND: ResourceKind = ResourceKind::Gallery;
}

/// A landing-page hero slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    /// Main heading.
    pub title: String,
    /// Secondary heading.
    pub subtitle: String,
    /// Supporting text.
    pub description: String,
    /// Full-bleed background image URL.
    pub background_image: String,
    /// Call-to-action button text.
    pub cta_text: String,
    /// Call-to-action button target.
    pub cta_link: String,
    /// Optional link target for the whole slide.
    #[serde(default)]
    pub redirect_url: String,
    /// Whether the link opens in a new tab.
    #[serde(default)]
    pub open_new_tab: bool,
}

impl ResourceRecord for HeroSlide {
    const KIND: ResourceKind = ResourceKind::HeroSlides;
}

/// Settlement status of a single weekly payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Settled.
    Paid,
    /// Due but not yet settled.
    #[default]
    Pending,
    /// Past due.
    Overdue,
}

/// One payment inside a weekly-fee ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Week the payment covers, `YYYY-MM-DD`.
    pub date: String,
    /// Amount due or paid.
    pub amount: f64,
    /// Settlement status; `pending` when omitted.
    #[serde(default)]
    pub status: PaymentStatus,
}

/// A member's weekly-fee ledger.
///
/// `member_id` and `member_name` are denormalized copies, not enforced
/// foreign keys: deleting the member leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFee {
    /// Identifier of the member this ledger belongs to.
    pub member_id: String,
    /// Member name at the time the ledger was created.
    pub member_name: String,
    /// Ordered payment history.
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl ResourceRecord for WeeklyFee {
    const KIND: ResourceKind = ResourceKind::WeeklyFees;
}
