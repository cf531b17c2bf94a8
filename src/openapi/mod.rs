use crate::dto::{
    CategoryRequest, CategoryResponse, GameRequest, GameResponse, MonitorRequest,
    MonitorResponse, ProductRequest, ProductResponse, PurchaseRequest, PurchaseResponse,
    UserRequest, UserResponse,
};
use crate::errors::ErrorResponse;
use crate::handlers::{
    categories, games,
    health::{self, ComponentStatus, HealthResponse},
    monitors, products, purchases, users,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WebShop API",
        version = "1.0.0",
        description = r#"
# WebShop Catalog API

CRUD endpoints for the shop catalog: categories, products, games, monitors,
users and purchases.

Every collection supports the same five operations:

- `GET /api/{entity}`: 200 with the list, or 204 when it is empty
- `GET /api/{entity}/{id}`: 200 or 404
- `POST /api/{entity}`: 200 with the stored record
- `PUT /api/{entity}/{id}`: 200 or 404
- `DELETE /api/{entity}/{id}`: 200 with the removed record, or 404

Request bodies are validated before anything is stored; violations return 400.
Any other failure returns 500 without detail.
"#
    ),
    paths(
        health::health_check,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        games::list_games,
        games::get_game,
        games::create_game,
        games::update_game,
        games::delete_game,
        monitors::list_monitors,
        monitors::get_monitor,
        monitors::create_monitor,
        monitors::update_monitor,
        monitors::delete_monitor,
        purchases::list_purchases,
        purchases::get_purchase,
        purchases::create_purchase,
        purchases::update_purchase,
        purchases::delete_purchase,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(
        CategoryRequest,
        CategoryResponse,
        ProductRequest,
        ProductResponse,
        GameRequest,
        GameResponse,
        MonitorRequest,
        MonitorResponse,
        PurchaseRequest,
        PurchaseResponse,
        UserRequest,
        UserResponse,
        ErrorResponse,
        HealthResponse,
        ComponentStatus,
    )),
    tags(
        (name = "category", description = "Product categories"),
        (name = "product", description = "Catalog products"),
        (name = "game", description = "Games attached to a product"),
        (name = "monitor", description = "Monitors attached to a product"),
        (name = "purchase", description = "Purchases of a product by a user"),
        (name = "user", description = "Shop users"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
