use crate::application::http::{
    health::router::HealthApiDoc, ingredient::router::IngredientApiDoc,
    recipe::router::RecipeApiDoc, server::config::__path_get_config,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    paths(get_config),
    modifiers(&BearerAuth),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
