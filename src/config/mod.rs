pub mod routes;
pub mod yml_settings;

pub use routes::{Route, RouteTable};
pub use yml_settings::RouteSettings;
