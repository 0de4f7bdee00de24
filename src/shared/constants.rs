/// Homepage size of the featured products list
pub const FEATURED_PRODUCTS_LIMIT: usize = 6;

/// Number of recent contacts and pending reviews shown on the dashboard
pub const RECENT_ITEMS_LIMIT: usize = 5;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Back-office administrator
pub const ROLE_ADMIN: &str = "admin";

/// Administrator who also manages other admin accounts
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

// =============================================================================
// SITE CONTENT KEYS
// =============================================================================

pub const CONTENT_COMPANY_INFO: &str = "companyInfo";
pub const CONTENT_HERO_SLIDES: &str = "heroSlides";
pub const CONTENT_ABOUT: &str = "about";
pub const CONTENT_CONTACT_PAGE: &str = "contactPage";
pub const CONTENT_SOCIAL_LINKS: &str = "socialLinks";

/// Content keys the public site reads; other keys are accepted but unused by it
pub const WELL_KNOWN_CONTENT_KEYS: [&str; 5] = [
    CONTENT_COMPANY_INFO,
    CONTENT_HERO_SLIDES,
    CONTENT_ABOUT,
    CONTENT_CONTACT_PAGE,
    CONTENT_SOCIAL_LINKS,
];

/// Default subject for contact submissions that do not pick one
pub const DEFAULT_CONTACT_SUBJECT: &str = "general";

// =============================================================================
// MEDIA
// =============================================================================

/// Maximum media upload size (50MB)
pub const MAX_MEDIA_SIZE: usize = 50 * 1024 * 1024;

/// Content types accepted for media uploads
pub const ALLOWED_MEDIA_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/svg+xml",
    "video/mp4",
    "video/webm",
];
