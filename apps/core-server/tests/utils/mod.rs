pub mod api_clients;
pub mod context;
pub mod db_clients;
