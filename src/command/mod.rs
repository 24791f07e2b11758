pub mod db;
pub mod leads;
pub mod server;
