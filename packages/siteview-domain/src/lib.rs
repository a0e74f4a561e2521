pub mod filter;
pub mod identifier;
pub mod reconcile;
pub mod site;
pub mod window;
