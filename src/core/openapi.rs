use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::clients::{
    dtos as clients_dtos, handlers as clients_handlers, models as clients_models,
};
use crate::features::contacts::{
    dtos as contacts_dtos, handlers as contacts_handlers, models as contacts_models,
};
use crate::features::content::{
    dtos as content_dtos, handlers as content_handlers, models as content_models,
};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::media::{dtos as media_dtos, handlers as media_handlers};
use crate::features::products::{
    dtos as products_dtos, handlers as products_handlers, models as products_models,
};
use crate::features::reviews::{
    dtos as reviews_dtos, handlers as reviews_handlers, models as reviews_models,
};
use crate::shared::types::{ApiResponse, CreatedDto, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::request_password_reset,
        auth::handlers::get_me,
        // Categories
        categories_handlers::list_active_categories,
        categories_handlers::get_public_category,
        categories_handlers::get_category_by_slug,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_active_products,
        products_handlers::list_featured_products,
        products_handlers::get_public_product,
        products_handlers::get_product_by_slug,
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Reviews
        reviews_handlers::list_approved_reviews,
        reviews_handlers::submit_review,
        reviews_handlers::list_reviews,
        reviews_handlers::get_review,
        reviews_handlers::create_review,
        reviews_handlers::update_review,
        reviews_handlers::set_review_status,
        reviews_handlers::delete_review,
        // Contacts
        contacts_handlers::submit_contact,
        contacts_handlers::list_contacts,
        contacts_handlers::get_contact,
        contacts_handlers::mark_contact_read,
        contacts_handlers::reply_to_contact,
        contacts_handlers::delete_contact,
        // Content
        content_handlers::get_public_content,
        content_handlers::get_company_info,
        content_handlers::list_content,
        content_handlers::get_content,
        content_handlers::update_content,
        // Clients
        clients_handlers::list_active_clients,
        clients_handlers::list_clients,
        clients_handlers::get_client,
        clients_handlers::create_client,
        clients_handlers::update_client,
        clients_handlers::delete_client,
        // Dashboard
        dashboard_handlers::get_summary,
        // Media
        media_handlers::upload_media,
        media_handlers::delete_media,
    ),
    components(
        schemas(
            // Shared
            Meta,
            CreatedDto,
            ApiResponse<CreatedDto>,
            // Auth
            auth::model::AdminRole,
            auth::model::AuthenticatedAdmin,
            auth::dtos::LoginRequestDto,
            auth::dtos::LoginResponseDto,
            auth::dtos::PasswordResetRequestDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::LoginResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            // Categories
            categories_models::Category,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<categories_models::Category>,
            ApiResponse<Vec<categories_models::Category>>,
            // Products
            products_models::Product,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            ApiResponse<products_models::Product>,
            ApiResponse<Vec<products_models::Product>>,
            // Reviews
            reviews_models::ReviewStatus,
            reviews_models::ReviewDocument,
            reviews_dtos::CreateReviewDto,
            reviews_dtos::UpdateReviewDto,
            reviews_dtos::ReviewStatusDto,
            ApiResponse<reviews_models::ReviewDocument>,
            ApiResponse<Vec<reviews_models::ReviewDocument>>,
            // Contacts
            contacts_models::ContactSubmission,
            contacts_dtos::CreateContactDto,
            contacts_dtos::ReplyContactDto,
            ApiResponse<contacts_models::ContactSubmission>,
            ApiResponse<Vec<contacts_models::ContactSubmission>>,
            // Content
            content_models::SiteContent,
            content_models::CompanyInfo,
            content_dtos::UpdateContentDto,
            ApiResponse<content_models::SiteContent>,
            ApiResponse<Vec<content_models::SiteContent>>,
            ApiResponse<content_models::CompanyInfo>,
            // Clients
            clients_models::Client,
            clients_dtos::CreateClientDto,
            clients_dtos::UpdateClientDto,
            ApiResponse<clients_models::Client>,
            ApiResponse<Vec<clients_models::Client>>,
            // Dashboard
            dashboard_dtos::CategoryStats,
            dashboard_dtos::ProductStats,
            dashboard_dtos::ReviewStats,
            dashboard_dtos::ContactStats,
            dashboard_dtos::ClientStats,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Media
            media_dtos::MediaEntity,
            media_dtos::UploadMediaDto,
            media_dtos::MediaResponseDto,
            media_dtos::DeleteMediaDto,
            ApiResponse<media_dtos::MediaResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin sign-in and session"),
        (name = "categories", description = "Product categories (public)"),
        (name = "products", description = "Catalog products (public)"),
        (name = "reviews", description = "Approved reviews and review submission (public)"),
        (name = "contacts", description = "Contact form submission (public)"),
        (name = "content", description = "Site content and company profile (public)"),
        (name = "clients", description = "Client logos (public)"),
        (name = "admin-categories", description = "Category management"),
        (name = "admin-products", description = "Product management"),
        (name = "admin-reviews", description = "Review moderation"),
        (name = "admin-contacts", description = "Contact inbox"),
        (name = "admin-content", description = "Site content editing"),
        (name = "admin-clients", description = "Client management"),
        (name = "admin-dashboard", description = "Back-office summary"),
        (name = "admin-media", description = "Image and video uploads"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "API documentation for the business catalog",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/categories",
            "/api/products/featured",
            "/api/reviews",
            "/api/contacts",
            "/api/company",
            "/api/admin/dashboard",
            "/api/admin/media",
            "/api/auth/login",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Acme Catalog".to_string(),
            version: "2.0.0".to_string(),
            description: "Acme".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Acme Catalog");
        assert_eq!(doc.info.version, "2.0.0");
    }
}
