use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address Service",
        description = "Store postal addresses and query them by great-circle distance."
    ),
    tags(
        (name = "address_service", description = "Address CRUD and proximity search"),
        (name = "server_service", description = "Service health")
    )
)]
pub struct ApiDoc;
