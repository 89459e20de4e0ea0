pub mod datastore;
pub mod hyper;
pub mod instance;
pub mod network;
