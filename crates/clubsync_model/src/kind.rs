//! Resource kinds.

use std::fmt;

/// One of the eight independently persisted record categories.
///
/// Each kind has its own collection, its own URL path segment under
/// `/api`, and its own record schema. Operations on one kind never
/// cascade to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Club members.
    Members,
    /// Matches, training sessions, and other club events.
    Activities,
    /// Incoming donations.
    Donations,
    /// Outgoing expenses.
    Expenses,
    /// Long-form stories and match reports.
    Experiences,
    /// Gallery photos.
    Gallery,
    /// Landing-page hero slides.
    HeroSlides,
    /// Weekly membership fee ledgers.
    WeeklyFees,
}

impl ResourceKind {
    /// All kinds, in the canonical sync order.
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Members,
        ResourceKind::Activities,
        ResourceKind::Donations,
        ResourceKind::Expenses,
        ResourceKind::Experiences,
        ResourceKind::Gallery,
        ResourceKind::HeroSlides,
        ResourceKind::WeeklyFees,
    ];

    /// URL path segment under `/api`.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            ResourceKind::Members => "members",
            ResourceKind::Activities => "activities",
            ResourceKind::Donations => "donations",
            ResourceKind::Expenses => "expenses",
            ResourceKind::Experiences => "experiences",
            ResourceKind::Gallery => "gallery",
            ResourceKind::HeroSlides => "hero-slides",
            ResourceKind::WeeklyFees => "weekly-fees",
        }
    }

    /// Human-readable singular label, used in deletion confirmations.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            ResourceKind::Members => "Member",
            ResourceKind::Activities => "Activity",
            ResourceKind::Donations => "Donation",
            ResourceKind::Expenses => "Expense",
            ResourceKind::Experiences => "Experience",
            ResourceKind::Gallery => "Gallery item",
            ResourceKind::HeroSlides => "Hero slide",
            ResourceKind::WeeklyFees => "Weekly fee record",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
