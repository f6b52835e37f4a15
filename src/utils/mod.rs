pub mod backend_url;
