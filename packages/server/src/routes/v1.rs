use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::upload::upload_firmware))
        .routes(routes!(handlers::upload::re_analyze_firmware))
        .routes(routes!(handlers::firmware::get_firmware))
}
