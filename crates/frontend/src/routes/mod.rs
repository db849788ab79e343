pub mod app_route;
pub mod routes;
