pub mod project_gateway_http;
pub mod project_store_memory;
