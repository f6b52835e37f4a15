pub mod call_routes;
pub mod candidate_routes;
pub mod health;
